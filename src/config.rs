//! Start-up constants. There are no runtime settings.

use crate::domain::{Angle, Position, Size, VehicleConfig};

pub const WINDOW_TITLE: &str = "Simple Horizon-style Free Drive";
pub const SCREEN_SIZE: Size = Size::new(960.0, 540.0);
pub const TICK_RATE_HZ: f64 = 60.0;

/// On the main highway, facing east.
pub const START_POSITION: Position = Position::new(600.0, 850.0);
pub const START_HEADING: Angle = Angle::from_deg(0.0);

pub const ARCADE_CAR: VehicleConfig = VehicleConfig::new(
    12.0, // max speed
    0.4,  // reverse speed ratio
    0.4,  // acceleration
    0.6,  // brake deceleration
    0.05, // friction deceleration
    3.0,  // turn rate
    0.2,  // steering dead zone
    50.0, // body length
    26.0, // body width
);
