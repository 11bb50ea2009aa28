//! Basic building blocks.

use std::ops::{Add, Mul, Neg, Sub};

/// World or screen coordinates. The y-axis points down, as on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn rotate_vector(&self, angle: Angle) -> Position {
        let (sin, cos) = angle.to_rad().sin_cos();
        Position::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Clamps each axis independently into `[0, size]`.
    pub fn clamp_to(&self, size: Size) -> Position {
        Position::new(
            self.x.clamp(0.0, size.width()),
            self.y.clamp(0.0, size.height()),
        )
    }

    pub fn trunc(&self) -> Position {
        Position::new(self.x.trunc(), self.y.trunc())
    }
}

impl From<Position> for (f32, f32) {
    fn from(value: Position) -> Self {
        (value.x as f32, value.y as f32)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Position {
    type Output = Position;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Self::Output {
        Position::new(-self.x, -self.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Mul<f64> for Size {
    type Output = Size;

    fn mul(self, rhs: f64) -> Self::Output {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

/// Direction in degrees, 0 pointing along the positive x-axis. Positive angles turn clockwise on
/// screen because the y-axis points down. The value is not normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub const fn from_deg(degree: f64) -> Self {
        Self(degree)
    }

    #[cfg(test)]
    pub fn deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    /// Unit vector pointing along the angle.
    pub fn direction(self) -> Position {
        let (sin, cos) = self.to_rad().sin_cos();
        Position::new(cos, sin)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
