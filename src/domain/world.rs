//! Static world geometry: ground bounds, roads and landmarks.

use thiserror::Error;

use super::{Position, Size};

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct World {
    bounds: Size,
    roads: Vec<Road>,
    landmarks: Vec<Landmark>,
}

impl World {
    pub fn new(
        bounds: Size,
        roads: Vec<Road>,
        landmarks: Vec<Landmark>,
    ) -> Result<Self, WorldError> {
        let world = Self {
            bounds,
            roads,
            landmarks,
        };
        world.validate()?;
        Ok(world)
    }

    /// The hardcoded map: a horizontal highway, a vertical road crossing it, two side roads and a
    /// few buildings.
    pub fn open_world() -> Result<Self, WorldError> {
        const MARKING: LaneMarking = LaneMarking::new(55.0, 80.0, 40.0, 6.0);
        const BUILDING_SIZE: Size = Size::new(160.0, 120.0);

        World::new(
            Size::new(3000.0, 2000.0),
            vec![
                Road::new(Rect::new(0.0, 800.0, 3000.0, 120.0)).with_lane_marking(MARKING),
                Road::new(Rect::new(1400.0, 0.0, 120.0, 2000.0)).with_lane_marking(MARKING),
                Road::new(Rect::new(400.0, 300.0, 900.0, 80.0)),
                Road::new(Rect::new(1800.0, 1200.0, 900.0, 80.0)),
            ],
            [(600.0, 500.0), (900.0, 900.0), (2000.0, 600.0), (2300.0, 1400.0)]
                .into_iter()
                .map(|(x, y)| Landmark::new(Position::new(x, y), BUILDING_SIZE))
                .collect(),
        )
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn area(&self) -> Rect {
        Rect::from_position_and_size(Position::default(), self.bounds)
    }

    pub fn lane_dashes(&self) -> impl Iterator<Item = Rect> + '_ {
        self.roads.iter().flat_map(Road::lane_dashes)
    }

    fn validate(&self) -> Result<(), WorldError> {
        if !self.bounds.is_positive() {
            return Err(WorldError::InvalidBounds {
                width: self.bounds.width(),
                height: self.bounds.height(),
            });
        }

        let area = self.area();

        for (idx, road) in self.roads.iter().enumerate() {
            if !road.area.size().is_positive() {
                return Err(WorldError::DegenerateRoad(idx));
            }
            if !area.contains_rect(&road.area) {
                return Err(WorldError::RoadOutOfBounds(idx));
            }
            if let Some(marking) = road.lane_marking {
                if marking.spacing.is_nan() || marking.spacing <= 0.0 {
                    return Err(WorldError::InvalidLaneSpacing(idx));
                }
                if !Size::new(marking.dash_length, marking.dash_width).is_positive() {
                    return Err(WorldError::DegenerateLaneMarking(idx));
                }
                if !road.lane_dashes().iter().all(|dash| area.contains_rect(dash)) {
                    return Err(WorldError::LaneMarkingOutOfBounds(idx));
                }
            }
        }

        for (idx, landmark) in self.landmarks.iter().enumerate() {
            if !landmark.area.size().is_positive() {
                return Err(WorldError::DegenerateLandmark(idx));
            }
            if !area.contains_rect(&landmark.area) {
                return Err(WorldError::LandmarkOutOfBounds(idx));
            }
        }

        Ok(())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum WorldError {
    #[error("world bounds must be positive, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },
    #[error("road {0} has no area")]
    DegenerateRoad(usize),
    #[error("road {0} lies outside the world bounds")]
    RoadOutOfBounds(usize),
    #[error("lane marking of road {0} has no positive spacing")]
    InvalidLaneSpacing(usize),
    #[error("lane marking of road {0} has dashes without area")]
    DegenerateLaneMarking(usize),
    #[error("lane marking of road {0} lies outside the world bounds")]
    LaneMarkingOutOfBounds(usize),
    #[error("landmark {0} has no area")]
    DegenerateLandmark(usize),
    #[error("landmark {0} lies outside the world bounds")]
    LandmarkOutOfBounds(usize),
}

/// Axis-aligned rectangle given by its top-left corner and its size.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_position_and_size(position: Position, size: Size) -> Self {
        Self::new(position.x(), position.y(), size.width(), size.height())
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn top_left_corner(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn center(&self) -> Position {
        self.top_left_corner() + self.size().center()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_horizontal(&self) -> bool {
        self.width >= self.height
    }

    pub fn translated(&self, offset: Position) -> Rect {
        Rect::from_position_and_size(self.top_left_corner() + offset, self.size())
    }

    pub fn scaled(&self, factor: f64) -> Rect {
        Rect::from_position_and_size(self.top_left_corner() * factor, self.size() * factor)
    }

    /// Drops the fractional part of the corner and of the size, as pixel rectangles do.
    pub fn truncated(&self) -> Rect {
        Rect::new(
            self.x.trunc(),
            self.y.trunc(),
            self.width.trunc(),
            self.height.trunc(),
        )
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Road {
    area: Rect,
    lane_marking: Option<LaneMarking>,
}

impl Road {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            lane_marking: None,
        }
    }

    pub fn with_lane_marking(&self, lane_marking: LaneMarking) -> Self {
        Self {
            lane_marking: Some(lane_marking),
            ..self.clone()
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    #[cfg(test)]
    pub fn lane_marking(&self) -> Option<LaneMarking> {
        self.lane_marking
    }

    /// Dashes along the road's long axis, starting at its leading edge. The last dash may stick
    /// out over the road's end.
    pub fn lane_dashes(&self) -> Vec<Rect> {
        let Some(marking) = self.lane_marking else {
            return vec![];
        };
        let area = self.area;

        let (start, length) = if area.is_horizontal() {
            (area.x(), area.width())
        } else {
            (area.y(), area.height())
        };
        let count = (length / marking.spacing).ceil() as usize;

        (0..count)
            .map(|i| {
                let along = start + i as f64 * marking.spacing;
                if area.is_horizontal() {
                    Rect::new(
                        along,
                        area.y() + marking.offset,
                        marking.dash_length,
                        marking.dash_width,
                    )
                } else {
                    Rect::new(
                        area.x() + marking.offset,
                        along,
                        marking.dash_width,
                        marking.dash_length,
                    )
                }
            })
            .collect()
    }
}

/// Dashed line painted along a road. `offset` is measured from the road's near edge across the
/// road, `spacing` is the distance between the starts of two consecutive dashes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LaneMarking {
    pub offset: f64,
    pub spacing: f64,
    pub dash_length: f64,
    pub dash_width: f64,
}

impl LaneMarking {
    pub const fn new(offset: f64, spacing: f64, dash_length: f64, dash_width: f64) -> Self {
        Self {
            offset,
            spacing,
            dash_length,
            dash_width,
        }
    }
}

/// Decorative building with a single window accent.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Landmark {
    area: Rect,
}

impl Landmark {
    const WINDOW_INSET: f64 = 10.0;
    const WINDOW_SIZE: Size = Size::new(60.0, 40.0);

    pub fn new(position: Position, size: Size) -> Self {
        Self {
            area: Rect::from_position_and_size(position, size),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn window(&self) -> Rect {
        Rect::from_position_and_size(
            self.area.top_left_corner() + Position::new(Self::WINDOW_INSET, Self::WINDOW_INSET),
            Self::WINDOW_SIZE,
        )
    }
}
