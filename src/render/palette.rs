//! Colors of the scene.

use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

pub const SKY: Rgba = Rgba::rgb(80, 150, 220);
pub const GRASS: Rgba = Rgba::rgb(40, 120, 40);
pub const ROAD: Rgba = Rgba::rgb(60, 60, 60);
pub const LANE_MARKING: Rgba = Rgba::rgb(230, 230, 230);
pub const BUILDING: Rgba = Rgba::rgb(90, 90, 110);
pub const BUILDING_WINDOW: Rgba = Rgba::rgb(130, 130, 160);
pub const SUN: Rgba = Rgba::rgb(240, 210, 60);
pub const CAR_BODY: Rgba = Rgba::rgb(220, 60, 60);
pub const CAR_ROOF: Rgba = Rgba::rgb(40, 40, 40);
pub const CAR_WINDOW: Rgba = Rgba::rgb(120, 180, 220);
pub const MINIMAP_PANEL: Rgba = Rgba::rgba(0, 0, 0, 180);
pub const TEXT: Rgba = Rgba::rgb(255, 255, 255);
