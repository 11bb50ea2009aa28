//! The domain module encapsulates the driving model. It defines the `Vehicle` and `World`
//! entities, along with the camera rule that ties the screen to the vehicle.
//!
//! Nothing in here depends on Bevy, so the rules can be exercised without a window.

mod basis;
mod camera;
mod vehicle;
mod world;

pub use basis::{Angle, Position, Size};
pub use camera::viewport_origin;
pub use vehicle::{Controls, Vehicle, VehicleConfig};
pub use world::{Rect, World, WorldError};
