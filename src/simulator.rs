//! Simulation of the vehicle in the world.
//!
//! Every fixed tick samples the controls, advances the vehicle by one Euler step and moves the
//! camera after it. Nothing is simulated once the main loop has terminated.

use bevy::prelude::*;

use crate::{
    config::{ARCADE_CAR, SCREEN_SIZE, START_HEADING, START_POSITION, TICK_RATE_HZ},
    domain::{viewport_origin, Vehicle},
    lifecycle::LoopState,
    resource::{ControlsRes, VehicleRes, ViewportRes, WorldRes},
};

pub struct Simulator;

/// Stages of a single tick, run in order.
#[derive(SystemSet, Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tick {
    Sample,
    Advance,
    Follow,
}

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .insert_resource(VehicleRes::from(Vehicle::new(
                START_POSITION,
                START_HEADING,
                ARCADE_CAR,
            )))
            .init_resource::<ControlsRes>()
            .init_resource::<ViewportRes>()
            .configure_sets(
                FixedUpdate,
                (Tick::Sample, Tick::Advance, Tick::Follow)
                    .chain()
                    .run_if(in_state(LoopState::Running)),
            )
            .add_systems(Startup, follow)
            .add_systems(
                FixedUpdate,
                (simulate.in_set(Tick::Advance), follow.in_set(Tick::Follow)),
            );
    }
}

fn simulate(controls: Res<ControlsRes>, mut vehicle: ResMut<VehicleRes>, world: Res<WorldRes>) {
    let bounds = world.bounds();
    let was_pinned = vehicle.is_pinned(bounds);

    vehicle.update(controls.0, bounds);

    if !was_pinned && vehicle.is_pinned(bounds) {
        debug!(
            position = ?vehicle.position(),
            speed = vehicle.speed(),
            "vehicle pinned against the world edge"
        );
    }
}

fn follow(vehicle: Res<VehicleRes>, world: Res<WorldRes>, mut viewport: ResMut<ViewportRes>) {
    viewport.0 = viewport_origin(vehicle.position(), SCREEN_SIZE, world.bounds());
}
