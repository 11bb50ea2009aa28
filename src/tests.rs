//! Test utils.

use crate::{
    config::{ARCADE_CAR, START_HEADING, START_POSITION},
    domain::{Controls, Size, Vehicle},
};

pub use crate::config::SCREEN_SIZE;

pub const WORLD_SIZE: Size = Size::new(3000.0, 2000.0);

pub fn start_vehicle() -> Vehicle {
    Vehicle::new(START_POSITION, START_HEADING, ARCADE_CAR)
}

/// Holds `controls` for `ticks` ticks inside the default world.
pub fn drive(vehicle: &mut Vehicle, controls: Controls, ticks: usize) {
    for _ in 0..ticks {
        vehicle.update(controls, WORLD_SIZE);
    }
}
