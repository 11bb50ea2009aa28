//! Sprites composed of rounded rectangles.

use super::palette;
use crate::domain::{Rect, Size, VehicleConfig};

/// A stack of layers drawn in order. Layer rectangles are given in sprite space, with the origin
/// at the sprite's top-left corner and the sprite facing along the positive x-axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    size: Size,
    layers: Vec<SpriteLayer>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteLayer {
    pub rect: Rect,
    pub corner_radius: f64,
    pub color: palette::Rgba,
}

impl Sprite {
    pub fn new(size: Size, layers: Vec<SpriteLayer>) -> Self {
        Self { size, layers }
    }

    /// Red body with a dark roof and a window on top.
    pub fn car(config: &VehicleConfig) -> Self {
        let (l, w) = (config.body_length, config.body_width);
        Sprite::new(
            Size::new(l, w),
            vec![
                SpriteLayer {
                    rect: Rect::new(0.0, 0.0, l, w),
                    corner_radius: 6.0,
                    color: palette::CAR_BODY,
                },
                SpriteLayer {
                    rect: Rect::new(l * 0.25, w * 0.15, l * 0.5, w * 0.7),
                    corner_radius: 4.0,
                    color: palette::CAR_ROOF,
                },
                SpriteLayer {
                    rect: Rect::new(l * 0.3, w * 0.2, l * 0.4, w * 0.6),
                    corner_radius: 3.0,
                    color: palette::CAR_WINDOW,
                },
            ],
        )
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn layers(&self) -> &[SpriteLayer] {
        &self.layers
    }
}
