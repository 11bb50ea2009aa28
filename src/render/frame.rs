//! Composition of a full frame: world, vehicle, minimap and speed readout.

use super::{palette, Canvas, Sprite};
use crate::domain::{Position, Rect, Size, Vehicle, World};

/// Everything a frame depends on. Building a frame never mutates any of it.
pub struct FrameContext<'a> {
    pub world: &'a World,
    pub vehicle: &'a Vehicle,
    pub sprite: &'a Sprite,
    pub viewport_origin: Position,
    pub screen: Size,
}

const SUN_CENTER: Position = Position::new(80.0, 80.0);
const SUN_RADIUS: f64 = 40.0;
const HUD_ORIGIN: Position = Position::new(10.0, 10.0);
const HUD_FONT_SIZE: f64 = 26.0;
/// Converts world units per tick into the displayed km/h.
const SPEED_READOUT_SCALE: f64 = 10.0;

pub fn draw_frame(canvas: &mut impl Canvas, frame: &FrameContext) {
    draw_world(canvas, frame);
    canvas.draw_circle(SUN_CENTER, SUN_RADIUS, palette::SUN);
    canvas.draw_rotated_sprite(
        frame.vehicle.position() - frame.viewport_origin,
        frame.vehicle.heading(),
        frame.sprite,
    );
    Minimap::new(frame.screen, frame.world.bounds()).draw(canvas, frame.world, frame.vehicle);
    canvas.draw_text(
        HUD_ORIGIN,
        &speed_readout(frame.vehicle.speed()),
        HUD_FONT_SIZE,
        palette::TEXT,
    );
}

pub fn speed_readout(speed: f64) -> String {
    format!("Speed: {} km/h", (speed.abs() * SPEED_READOUT_SCALE).trunc() as i64)
}

fn draw_world(canvas: &mut impl Canvas, frame: &FrameContext) {
    let offset = -frame.viewport_origin;

    canvas.draw_rect(
        Rect::from_position_and_size(Position::default(), frame.screen),
        0.0,
        palette::SKY,
    );
    canvas.draw_rect(frame.world.area().translated(offset), 0.0, palette::GRASS);

    for road in frame.world.roads() {
        canvas.draw_rect(road.area().translated(offset), 0.0, palette::ROAD);
    }

    for dash in frame.world.lane_dashes() {
        canvas.draw_rect(dash.translated(offset), 0.0, palette::LANE_MARKING);
    }

    for landmark in frame.world.landmarks() {
        canvas.draw_rect(landmark.area().translated(offset), 0.0, palette::BUILDING);
        canvas.draw_rect(landmark.window().translated(offset), 0.0, palette::BUILDING_WINDOW);
    }
}

/// Scaled-down overview of the roads in the top-right corner of the screen. Roads and the vehicle
/// dot are snapped to whole pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Minimap {
    panel: Rect,
    scale: f64,
}

impl Minimap {
    const SIZE: Size = Size::new(220.0, 150.0);
    const MARGIN: f64 = 10.0;
    const PADDING: f64 = 5.0;
    const CORNER_RADIUS: f64 = 6.0;
    const DOT_RADIUS: f64 = 4.0;

    pub fn new(screen: Size, world: Size) -> Self {
        let panel = Rect::new(
            screen.width() - Self::SIZE.width() - Self::MARGIN,
            Self::MARGIN,
            Self::SIZE.width(),
            Self::SIZE.height(),
        );
        let content = Self::content_size();
        let scale = f64::min(
            content.width() / world.width(),
            content.height() / world.height(),
        );
        Self { panel, scale }
    }

    #[cfg(test)]
    pub fn panel(&self) -> Rect {
        self.panel
    }

    #[cfg(test)]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Screen position of a world position, truncated to whole pixels.
    pub fn project(&self, position: Position) -> Position {
        self.content_origin() + (position * self.scale).trunc()
    }

    fn content_size() -> Size {
        Size::new(
            Self::SIZE.width() - 2.0 * Self::PADDING,
            Self::SIZE.height() - 2.0 * Self::PADDING,
        )
    }

    fn content_origin(&self) -> Position {
        self.panel.top_left_corner() + Position::new(Self::PADDING, Self::PADDING)
    }

    fn draw(&self, canvas: &mut impl Canvas, world: &World, vehicle: &Vehicle) {
        canvas.draw_rect(self.panel, Self::CORNER_RADIUS, palette::MINIMAP_PANEL);

        for road in world.roads() {
            canvas.draw_rect(
                road.area()
                    .scaled(self.scale)
                    .truncated()
                    .translated(self.content_origin()),
                0.0,
                palette::ROAD,
            );
        }

        canvas.draw_circle(
            self.project(vehicle.position()),
            Self::DOT_RADIUS,
            palette::CAR_BODY,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        domain::{viewport_origin, Angle},
        render::{DrawCommand, DrawList, Shape},
        tests::{start_vehicle, SCREEN_SIZE},
    };

    fn render(vehicle: &Vehicle) -> DrawList {
        let world = World::open_world().unwrap();
        let sprite = Sprite::car(vehicle.config());
        let mut list = DrawList::new();
        draw_frame(
            &mut list,
            &FrameContext {
                world: &world,
                vehicle,
                sprite: &sprite,
                viewport_origin: viewport_origin(vehicle.position(), SCREEN_SIZE, world.bounds()),
                screen: SCREEN_SIZE,
            },
        );
        list
    }

    fn describe(commands: &[DrawCommand]) -> String {
        let mut out = String::new();
        for command in commands {
            match command {
                DrawCommand::Shape {
                    shape: Shape::Rectangle {
                        x_length,
                        y_length,
                        corner_radius,
                    },
                    center,
                    color,
                    ..
                } => writeln!(
                    out,
                    "rect {:.1},{:.1} {x_length:.1}x{y_length:.1} r{corner_radius:.1} {color}",
                    center.x(),
                    center.y()
                ),
                DrawCommand::Shape {
                    shape: Shape::Circle { radius },
                    center,
                    color,
                    ..
                } => writeln!(
                    out,
                    "circle {:.1},{:.1} r{radius:.1} {color}",
                    center.x(),
                    center.y()
                ),
                DrawCommand::Text { origin, text, .. } => {
                    writeln!(out, "text {:.1},{:.1} {text}", origin.x(), origin.y())
                }
            }
            .unwrap();
        }
        out
    }

    #[rstest]
    #[case(0.0, "Speed: 0 km/h")]
    #[case(12.0, "Speed: 120 km/h")]
    #[case(0.35, "Speed: 3 km/h")]
    #[case(-4.5, "Speed: 45 km/h")]
    fn test_speed_readout(#[case] speed: f64, #[case] expected: &str) {
        assert_eq!(speed_readout(speed), expected);
    }

    #[test]
    fn test_frame_layers() {
        let list = render(&start_vehicle());
        let commands = list.commands();

        // sky, ground, 4 roads, 63 dashes, 4 buildings with windows, sun, 3 car layers,
        // minimap panel with 4 roads and a dot, text
        assert_eq!(commands.len(), 1 + 1 + 4 + 63 + 8 + 1 + 3 + 6 + 1);
        assert_eq!(
            describe(&commands[..2]),
            "rect 480.0,270.0 960.0x540.0 r0.0 #5096dcff\n\
             rect 1380.0,420.0 3000.0x2000.0 r0.0 #287828ff\n"
        );
        assert!(matches!(
            commands.last(),
            Some(DrawCommand::Text { text, .. }) if text == "Speed: 0 km/h"
        ));
    }

    #[test]
    fn test_frame_vehicle_is_camera_relative() {
        let list = render(&start_vehicle());
        // Camera origin is (120, 580) for a vehicle at (600, 850)
        let body = &list.commands()[1 + 1 + 4 + 63 + 8 + 1];
        match body {
            DrawCommand::Shape {
                center,
                rotation,
                color,
                ..
            } => {
                assert_abs_diff_eq!(*center, Position::new(480.0, 270.0));
                assert_eq!(*rotation, Angle::from_deg(0.0));
                assert_eq!(*color, palette::CAR_BODY);
            }
            DrawCommand::Text { .. } => panic!("expected the car body"),
        }
    }

    #[test]
    fn test_frame_minimap() {
        let list = render(&start_vehicle());
        let n = list.commands().len();

        insta::assert_snapshot!(describe(&list.commands()[n - 7..n - 1]), @r"
        rect 840.0,85.0 220.0x150.0 r6.0 #000000b4
        rect 840.0,75.0 210.0x8.0 r0.0 #3c3c3cff
        rect 837.0,85.0 8.0x140.0 r0.0 #3c3c3cff
        rect 794.5,38.5 63.0x5.0 r0.0 #3c3c3cff
        rect 892.5,101.5 63.0x5.0 r0.0 #3c3c3cff
        circle 777.0,74.0 r4.0 #dc3c3cff
        ");
    }

    #[test]
    fn test_minimap_projection() {
        let minimap = Minimap::new(SCREEN_SIZE, Size::new(3000.0, 2000.0));
        assert_eq!(minimap.panel(), Rect::new(730.0, 10.0, 220.0, 150.0));
        assert_abs_diff_eq!(minimap.scale(), 0.07, epsilon = 1e-12);
        assert_abs_diff_eq!(
            minimap.project(Position::new(3000.0, 2000.0)),
            Position::new(945.0, 155.0)
        );
    }
}
