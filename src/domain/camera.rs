//! Camera following the vehicle.

use super::{Position, Size};

/// World-space position of the screen's top-left corner when the screen is centered on `target`.
///
/// The viewport never shows anything outside the world. On an axis where the world is smaller than
/// the screen, the origin is pinned to zero.
pub fn viewport_origin(target: Position, screen: Size, world: Size) -> Position {
    let origin = target - screen.center();
    let max = Position::new(
        (world.width() - screen.width()).max(0.0),
        (world.height() - screen.height()).max(0.0),
    );
    Position::new(origin.x().clamp(0.0, max.x()), origin.y().clamp(0.0, max.y()))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use super::*;

    const SCREEN: Size = Size::new(960.0, 540.0);
    const WORLD: Size = Size::new(3000.0, 2000.0);

    #[rstest]
    #[case::centered(    (1500.0,  1000.0), (1020.0,  730.0) )]
    #[case::start(       ( 600.0,   850.0), ( 120.0,  580.0) )]
    #[case::top_left(    (   0.0,     0.0), (   0.0,    0.0) )]
    #[case::bottom_right((3000.0,  2000.0), (2040.0, 1460.0) )]
    #[case::near_left(   ( 100.0,  1000.0), (   0.0,  730.0) )]
    #[case::near_bottom( (1500.0,  1900.0), (1020.0, 1460.0) )]
    fn test_viewport_origin(#[case] target: (f64, f64), #[case] expected: (f64, f64)) {
        let origin = viewport_origin(Position::new(target.0, target.1), SCREEN, WORLD);
        assert_abs_diff_eq!(origin, Position::new(expected.0, expected.1));
    }

    #[test]
    fn test_viewport_origin_stays_in_world() {
        for x in (0..=3000).step_by(50) {
            for y in (0..=2000).step_by(50) {
                let origin = viewport_origin(Position::new(x as f64, y as f64), SCREEN, WORLD);
                assert!((0.0..=WORLD.width() - SCREEN.width()).contains(&origin.x()));
                assert!((0.0..=WORLD.height() - SCREEN.height()).contains(&origin.y()));
            }
        }
    }

    #[rstest]
    #[case::narrow_world(Size::new(500.0, 2000.0), Position::new(0.0, 730.0))]
    #[case::flat_world(Size::new(3000.0, 300.0), Position::new(1020.0, 0.0))]
    #[case::tiny_world(Size::new(10.0, 10.0), Position::new(0.0, 0.0))]
    fn test_viewport_origin_world_smaller_than_screen(
        #[case] world: Size,
        #[case] expected: Position,
    ) {
        let origin = viewport_origin(Position::new(1500.0, 1000.0), SCREEN, world);
        assert_abs_diff_eq!(origin, expected);
    }
}
