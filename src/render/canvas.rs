//! Drawing capability used by the frame builder, and a recording implementation of it.

use super::{palette::Rgba, Sprite};
use crate::domain::{Angle, Position, Rect};

/// Screen-space drawing primitives. Coordinates are pixels from the top-left corner of the
/// window, with the y-axis pointing down.
pub trait Canvas {
    fn draw_rect(&mut self, rect: Rect, corner_radius: f64, color: Rgba);

    fn draw_circle(&mut self, center: Position, radius: f64, color: Rgba);

    /// Draws `sprite` centered at `center` and turned by `heading`.
    fn draw_rotated_sprite(&mut self, center: Position, heading: Angle, sprite: &Sprite);

    fn draw_text(&mut self, origin: Position, text: &str, font_size: f64, color: Rgba);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rectangle {
        x_length: f64,
        y_length: f64,
        corner_radius: f64,
    },
    Circle {
        radius: f64,
    },
}

impl Shape {
    /// Outline of the shape centered at the origin, in screen order (clockwise on screen).
    pub fn outline(&self, segments_per_corner: usize) -> Vec<Position> {
        let (half_x, half_y, radius) = match *self {
            Shape::Rectangle {
                x_length,
                y_length,
                corner_radius,
            } => {
                let half_x = x_length / 2.0;
                let half_y = y_length / 2.0;
                let max_radius = half_x.min(half_y).max(0.0);
                (half_x, half_y, corner_radius.clamp(0.0, max_radius))
            }
            Shape::Circle { radius } => (radius, radius, radius),
        };

        let segments = if radius > 0.0 {
            segments_per_corner.max(1)
        } else {
            0
        };

        [
            (Position::new(half_x - radius, half_y - radius), 0.0),
            (Position::new(-half_x + radius, half_y - radius), 90.0),
            (Position::new(-half_x + radius, -half_y + radius), 180.0),
            (Position::new(half_x - radius, -half_y + radius), 270.0),
        ]
        .into_iter()
        .flat_map(|(corner, start)| {
            (0..=segments).map(move |i| {
                let step = if segments == 0 {
                    0.0
                } else {
                    90.0 * i as f64 / segments as f64
                };
                corner + Angle::from_deg(start + step).direction() * radius
            })
        })
        .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Shape {
        shape: Shape,
        center: Position,
        rotation: Angle,
        color: Rgba,
    },
    Text {
        origin: Position,
        text: String,
        font_size: f64,
        color: Rgba,
    },
}

/// Records draw calls in the order they were issued. Later commands are drawn on top of earlier
/// ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    fn draw_rect(&mut self, rect: Rect, corner_radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Shape {
            shape: Shape::Rectangle {
                x_length: rect.width(),
                y_length: rect.height(),
                corner_radius,
            },
            center: rect.center(),
            rotation: Angle::default(),
            color,
        });
    }

    fn draw_circle(&mut self, center: Position, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Shape {
            shape: Shape::Circle { radius },
            center,
            rotation: Angle::default(),
            color,
        });
    }

    fn draw_rotated_sprite(&mut self, center: Position, heading: Angle, sprite: &Sprite) {
        let pivot = sprite.size().center();
        for layer in sprite.layers() {
            let offset = (layer.rect.center() - pivot).rotate_vector(heading);
            self.commands.push(DrawCommand::Shape {
                shape: Shape::Rectangle {
                    x_length: layer.rect.width(),
                    y_length: layer.rect.height(),
                    corner_radius: layer.corner_radius,
                },
                center: center + offset,
                rotation: heading,
                color: layer.color,
            });
        }
    }

    fn draw_text(&mut self, origin: Position, text: &str, font_size: f64, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            font_size,
            color,
        });
    }
}
