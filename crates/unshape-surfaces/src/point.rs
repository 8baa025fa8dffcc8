//! Points of the plane.

use std::fmt;

use glam::DVec2;

/// Scalar type produced by every surface.
pub type Real = f64;

/// An immutable point of the plane.
///
/// There is no `Default`: a point is always built from both coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point(DVec2);

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self(DVec2::ZERO);

    /// Creates a point from its coordinates.
    pub const fn new(x: Real, y: Real) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Horizontal coordinate.
    pub fn x(&self) -> Real {
        self.0.x
    }

    /// Vertical coordinate.
    pub fn y(&self) -> Real {
        self.0.y
    }

    /// Distance from the origin.
    pub fn length(&self) -> Real {
        self.0.length()
    }

    /// The underlying vector.
    pub fn as_dvec2(&self) -> DVec2 {
        self.0
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.0
    }
}

impl From<(Real, Real)> for Point {
    fn from((x, y): (Real, Real)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x(), self.y())
    }
}
