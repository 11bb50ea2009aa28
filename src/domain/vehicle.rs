//! Arcade car with a scalar speed along its heading.
//!
//! Each tick integrates a single explicit Euler step. There is no notion of elapsed time, all rates
//! are expressed per tick.

use super::{Angle, Position, Size};

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Vehicle {
    position: Position,
    heading: Angle,
    speed: f64,
    config: VehicleConfig,
}

impl Vehicle {
    /// Velocity components below this are treated as rounding noise of the heading.
    const MOTION_TOLERANCE: f64 = 1e-9;

    pub fn new(position: Position, heading: Angle, config: VehicleConfig) -> Self {
        Self {
            position,
            heading,
            speed: 0.0,
            config,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Angle {
        self.heading
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    #[cfg(test)]
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn min_speed(&self) -> f64 {
        -self.config.max_speed * self.config.reverse_speed_ratio
    }

    /// Advances the vehicle by one tick and keeps it inside `bounds`.
    ///
    /// Clamping at the edge leaves the speed untouched, so a car driven into the border stays
    /// pinned there with its residual speed.
    pub fn update(&mut self, controls: Controls, bounds: Size) {
        self.update_speed(controls);
        self.update_heading(controls);

        self.position = (self.position + self.heading.direction() * self.speed).clamp_to(bounds);
    }

    /// Whether the vehicle sits on an edge of `bounds` while moving out of it. Driving along an
    /// edge does not count.
    pub fn is_pinned(&self, bounds: Size) -> bool {
        let velocity = self.heading.direction() * self.speed;
        let pushes = |coordinate: f64, limit: f64, component: f64| {
            (coordinate <= 0.0 && component < -Self::MOTION_TOLERANCE)
                || (coordinate >= limit && component > Self::MOTION_TOLERANCE)
        };

        pushes(self.position.x(), bounds.width(), velocity.x())
            || pushes(self.position.y(), bounds.height(), velocity.y())
    }

    fn update_speed(&mut self, controls: Controls) {
        let config = &self.config;

        if controls.accelerate {
            self.speed += config.acceleration;
        } else if controls.brake {
            self.speed -= config.brake_deceleration;
        } else if self.speed > 0.0 {
            self.speed = (self.speed - config.friction_deceleration).max(0.0);
        } else if self.speed < 0.0 {
            self.speed = (self.speed + config.friction_deceleration).min(0.0);
        }

        self.speed = self.speed.clamp(self.min_speed(), config.max_speed);
    }

    fn update_heading(&mut self, controls: Controls) {
        if self.speed.abs() <= self.config.steering_dead_zone {
            return;
        }

        let turn = Angle::from_deg(self.config.turn_rate * (self.speed / self.config.max_speed));

        if controls.steer_left {
            self.heading = self.heading + -turn;
        }
        if controls.steer_right {
            self.heading = self.heading + turn;
        }
    }
}

/// Snapshot of the driver's input for one tick.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Controls {
    pub accelerate: bool,
    pub brake: bool,
    pub steer_left: bool,
    pub steer_right: bool,
}

impl Controls {
    #[cfg(test)]
    pub const IDLE: Controls = Controls {
        accelerate: false,
        brake: false,
        steer_left: false,
        steer_right: false,
    };

    #[cfg(test)]
    pub const ACCELERATE: Controls = Controls {
        accelerate: true,
        ..Controls::IDLE
    };

    #[cfg(test)]
    pub const BRAKE: Controls = Controls {
        brake: true,
        ..Controls::IDLE
    };
}

/// Rates are per tick, angles in degrees and lengths in world units. The car's front faces along
/// its heading.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct VehicleConfig {
    pub max_speed: f64,
    pub reverse_speed_ratio: f64,
    pub acceleration: f64,
    pub brake_deceleration: f64,
    pub friction_deceleration: f64,
    /// Heading change at full speed.
    pub turn_rate: f64,
    /// Speed magnitude at or below which steering has no effect.
    pub steering_dead_zone: f64,
    // Only required for visualisation
    pub body_length: f64,
    pub body_width: f64,
}

impl VehicleConfig {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        max_speed: f64,
        reverse_speed_ratio: f64,
        acceleration: f64,
        brake_deceleration: f64,
        friction_deceleration: f64,
        turn_rate: f64,
        steering_dead_zone: f64,
        body_length: f64,
        body_width: f64,
    ) -> Self {
        VehicleConfig {
            max_speed,
            reverse_speed_ratio,
            acceleration,
            brake_deceleration,
            friction_deceleration,
            turn_rate,
            steering_dead_zone,
            body_length,
            body_width,
        }
    }
}
