//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use crate::{domain, render};

#[derive(Resource)]
pub struct VehicleRes(domain::Vehicle);

impl Deref for VehicleRes {
    type Target = domain::Vehicle;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for VehicleRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::Vehicle> for VehicleRes {
    fn from(value: domain::Vehicle) -> Self {
        Self(value)
    }
}

#[derive(Resource)]
pub struct WorldRes(domain::World);

impl Deref for WorldRes {
    type Target = domain::World;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<domain::World> for WorldRes {
    fn from(value: domain::World) -> Self {
        Self(value)
    }
}

/// Driver input sampled at the start of the current tick.
#[derive(Resource, Default)]
pub struct ControlsRes(pub domain::Controls);

/// Camera origin computed at the end of the current tick.
#[derive(Resource, Default)]
pub struct ViewportRes(pub domain::Position);

/// Draw calls of the frame being presented.
#[derive(Resource, Default)]
pub struct FrameRes(pub render::DrawList);
