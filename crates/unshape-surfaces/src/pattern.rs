//! Base pattern generators.
//!
//! Each generator is a small parameter struct implementing [`Field`], paired
//! with a free factory returning a [`Surface`]. Size parameters default to
//! `1.0`. A non-positive (or non-finite) size never fails: the pattern
//! degrades to `0.0` everywhere.

use crate::log::warn;
use crate::tiling::{floor_div, is_even_cell, is_valid_size};
use crate::{Field, Point, Real, Surface};

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn check_size(pattern: &'static str, size: Real) -> Real {
    if !is_valid_size(size) {
        warn!(pattern, size, "degenerate size, pattern evaluates to 0.0");
    }
    size
}

macro_rules! into_surface {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Surface {
                fn from(pattern: $ty) -> Self {
                    Surface::new(pattern)
                }
            }
        )*
    };
}

into_surface!(
    Plain, Slope, Sqr, SinWave, CosWave, Steps, Checker, Stripes, Rings, Ellipse, Rectangle,
);

/// Zero everywhere.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plain;

impl Field for Plain {
    fn sample(&self, _p: Point) -> Real {
        0.0
    }
}

/// The horizontal coordinate.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slope;

impl Field for Slope {
    fn sample(&self, p: Point) -> Real {
        p.x()
    }
}

/// The square of the horizontal coordinate.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sqr;

impl Field for Sqr {
    fn sample(&self, p: Point) -> Real {
        p.x() * p.x()
    }
}

/// `sin(x)`.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinWave;

impl Field for SinWave {
    fn sample(&self, p: Point) -> Real {
        p.x().sin()
    }
}

/// `cos(x)`.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CosWave;

impl Field for CosWave {
    fn sample(&self, p: Point) -> Real {
        p.x().cos()
    }
}

/// Staircase: the index of the vertical band of width `size` containing x.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Steps {
    /// Band width.
    pub size: Real,
}

impl Default for Steps {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

impl Steps {
    /// Creates a staircase with the given band width.
    pub fn new(size: Real) -> Self {
        Self {
            size: check_size("steps", size),
        }
    }

    /// Sets the size.
    pub fn with_size(mut self, size: Real) -> Self {
        self.size = check_size("steps", size);
        self
    }
}

impl Field for Steps {
    fn sample(&self, p: Point) -> Real {
        if !is_valid_size(self.size) {
            return 0.0;
        }
        floor_div(p.x(), self.size)
    }
}

/// Checkerboard of square cells; the cell containing the origin is `1.0`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Checker {
    /// Cell side length.
    pub size: Real,
}

impl Default for Checker {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

impl Checker {
    /// Creates a checkerboard with the given cell size.
    pub fn new(size: Real) -> Self {
        Self {
            size: check_size("checker", size),
        }
    }

    /// Sets the size.
    pub fn with_size(mut self, size: Real) -> Self {
        self.size = check_size("checker", size);
        self
    }
}

impl Field for Checker {
    fn sample(&self, p: Point) -> Real {
        if !is_valid_size(self.size) {
            return 0.0;
        }
        if is_even_cell(p.x(), self.size) == is_even_cell(p.y(), self.size) {
            1.0
        } else {
            0.0
        }
    }
}

/// Vertical stripes; odd bands are `1.0`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stripes {
    /// Stripe width.
    pub size: Real,
}

impl Default for Stripes {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

impl Stripes {
    /// Creates stripes with the given width.
    pub fn new(size: Real) -> Self {
        Self {
            size: check_size("stripes", size),
        }
    }

    /// Sets the size.
    pub fn with_size(mut self, size: Real) -> Self {
        self.size = check_size("stripes", size);
        self
    }
}

impl Field for Stripes {
    fn sample(&self, p: Point) -> Real {
        if !is_valid_size(self.size) {
            return 0.0;
        }
        if is_even_cell(p.x(), self.size) { 0.0 } else { 1.0 }
    }
}

/// Concentric rings around the origin; even rings (the centre disc
/// included) are `1.0`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rings {
    /// Ring thickness.
    pub size: Real,
}

impl Default for Rings {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

impl Rings {
    /// Creates rings with the given thickness.
    pub fn new(size: Real) -> Self {
        Self {
            size: check_size("rings", size),
        }
    }

    /// Sets the size.
    pub fn with_size(mut self, size: Real) -> Self {
        self.size = check_size("rings", size);
        self
    }
}

impl Field for Rings {
    fn sample(&self, p: Point) -> Real {
        if !is_valid_size(self.size) {
            return 0.0;
        }
        if is_even_cell(p.length(), self.size) { 1.0 } else { 0.0 }
    }
}

/// Filled axis-aligned ellipse centred on the origin, boundary included.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    /// Horizontal semi-axis.
    pub a: Real,
    /// Vertical semi-axis.
    pub b: Real,
}

impl Default for Ellipse {
    fn default() -> Self {
        Self { a: 1.0, b: 1.0 }
    }
}

impl Ellipse {
    /// Creates an ellipse with semi-axes `a` and `b`.
    pub fn new(a: Real, b: Real) -> Self {
        Self {
            a: check_size("ellipse", a),
            b: check_size("ellipse", b),
        }
    }

    /// Sets both half-axes.
    pub fn with_axes(mut self, a: Real, b: Real) -> Self {
        self.a = check_size("ellipse", a);
        self.b = check_size("ellipse", b);
        self
    }

    /// A circle of the given radius.
    pub fn circle(radius: Real) -> Self {
        Self::new(radius, radius)
    }
}

impl Field for Ellipse {
    fn sample(&self, p: Point) -> Real {
        if !is_valid_size(self.a) || !is_valid_size(self.b) {
            return 0.0;
        }
        let u = p.x() / self.a;
        let v = p.y() / self.b;
        if u * u + v * v <= 1.0 { 1.0 } else { 0.0 }
    }
}

/// Filled axis-aligned rectangle `[-a, a] x [-b, b]`, boundary included.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// Horizontal half-extent.
    pub a: Real,
    /// Vertical half-extent.
    pub b: Real,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self { a: 1.0, b: 1.0 }
    }
}

impl Rectangle {
    /// Creates a rectangle with half-extents `a` and `b`.
    pub fn new(a: Real, b: Real) -> Self {
        Self {
            a: check_size("rectangle", a),
            b: check_size("rectangle", b),
        }
    }

    /// Sets both half-axes.
    pub fn with_axes(mut self, a: Real, b: Real) -> Self {
        self.a = check_size("rectangle", a);
        self.b = check_size("rectangle", b);
        self
    }

    /// A square of the given half-extent.
    pub fn square(half: Real) -> Self {
        Self::new(half, half)
    }
}

impl Field for Rectangle {
    fn sample(&self, p: Point) -> Real {
        if !is_valid_size(self.a) || !is_valid_size(self.b) {
            return 0.0;
        }
        if p.x().abs() <= self.a && p.y().abs() <= self.b {
            1.0
        } else {
            0.0
        }
    }
}

/// Zero everywhere.
pub fn plain() -> Surface {
    Plain.into()
}

/// `x`.
pub fn slope() -> Surface {
    Slope.into()
}

/// `x * x`.
pub fn sqr() -> Surface {
    Sqr.into()
}

/// `sin(x)`.
pub fn sin_wave() -> Surface {
    SinWave.into()
}

/// `cos(x)`.
pub fn cos_wave() -> Surface {
    CosWave.into()
}

/// `floor(x / size)`.
pub fn steps(size: Real) -> Surface {
    Steps::new(size).into()
}

/// Checkerboard with cells of side `size`.
pub fn checker(size: Real) -> Surface {
    Checker::new(size).into()
}

/// Stripes of width `size`, odd bands set.
pub fn stripes(size: Real) -> Surface {
    Stripes::new(size).into()
}

/// Concentric rings of thickness `size`, even rings set.
pub fn rings(size: Real) -> Surface {
    Rings::new(size).into()
}

/// Filled ellipse with semi-axes `a` and `b`.
pub fn ellipse(a: Real, b: Real) -> Surface {
    Ellipse::new(a, b).into()
}

/// Filled rectangle with half-extents `a` and `b`.
pub fn rectangle(a: Real, b: Real) -> Surface {
    Rectangle::new(a, b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &Surface, x: Real, y: Real) -> Real {
        s.sample(Point::new(x, y))
    }

    #[test]
    fn test_simple_generators() {
        assert_eq!(at(&plain(), 3.0, -4.0), 0.0);
        assert_eq!(at(&slope(), 3.0, -4.0), 3.0);
        assert_eq!(at(&sqr(), -3.0, 1.0), 9.0);
        assert!((at(&sin_wave(), std::f64::consts::FRAC_PI_2, 5.0) - 1.0).abs() < 1e-12);
        assert!((at(&cos_wave(), std::f64::consts::PI, 5.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_steps_floor() {
        let s = steps(1.0);
        assert_eq!(at(&s, -0.5, 0.0), -1.0);
        assert_eq!(at(&s, 0.0, 0.0), 0.0);
        assert_eq!(at(&s, 0.5, 0.0), 0.0);
        assert_eq!(at(&s, 1.0, 0.0), 1.0);
        assert_eq!(at(&s, -1.0, 0.0), -1.0);

        let wide = steps(2.5);
        assert_eq!(at(&wide, 5.0, 0.0), 2.0);
        assert_eq!(at(&wide, -0.1, 0.0), -1.0);
    }

    #[test]
    fn test_checker_symmetric_across_origin() {
        let s = checker(1.0);
        assert_eq!(at(&s, 0.0, 0.0), 1.0);
        assert_eq!(at(&s, 1.0, 0.0), 0.0);
        assert_eq!(at(&s, 1.0, 1.0), 1.0);
        assert_eq!(at(&s, -1.0, 0.0), 0.0);
        assert_eq!(at(&s, -0.5, -0.5), 1.0);
        assert_eq!(at(&s, -0.5, 0.5), 0.0);
    }

    #[test]
    fn test_stripes() {
        let s = stripes(1.0);
        assert_eq!(at(&s, 0.5, 0.0), 0.0);
        assert_eq!(at(&s, 1.5, 9.0), 1.0);
        assert_eq!(at(&s, -0.5, 0.0), 1.0);
        assert_eq!(at(&s, -1.5, 0.0), 0.0);
    }

    #[test]
    fn test_rings() {
        let s = rings(1.0);
        assert_eq!(at(&s, 0.0, 0.0), 1.0);
        assert_eq!(at(&s, 0.6, 0.0), 1.0);
        assert_eq!(at(&s, 0.0, -1.5), 0.0);
        assert_eq!(at(&s, 2.1, 0.0), 1.0);
        assert_eq!(at(&s, 1.2, 1.2), 0.0);
    }

    #[test]
    fn test_ellipse_boundary() {
        let s = ellipse(1.0, 1.0);
        assert_eq!(at(&s, 1.0, 0.0), 1.0);
        assert_eq!(at(&s, 0.71, 0.71), 0.0);
        assert_eq!(at(&s, 0.7, 0.7), 1.0);

        let wide = ellipse(4.0, 1.0);
        assert_eq!(at(&wide, 3.9, 0.0), 1.0);
        assert_eq!(at(&wide, 0.0, 1.1), 0.0);
    }

    #[test]
    fn test_rectangle_boundary() {
        let s = rectangle(2.0, 3.0);
        assert_eq!(at(&s, 2.0, 3.0), 1.0);
        assert_eq!(at(&s, -2.0, -3.0), 1.0);
        assert_eq!(at(&s, 2.0001, 3.0), 0.0);
        assert_eq!(at(&s, 0.0, -3.0001), 0.0);
    }

    #[test]
    fn test_degenerate_sizes() {
        let p = Point::new(0.25, -0.75);
        for s in [
            steps(0.0),
            steps(-1.0),
            checker(0.0),
            stripes(-2.0),
            rings(Real::NAN),
            ellipse(0.0, 1.0),
            ellipse(1.0, -1.0),
            rectangle(-1.0, 1.0),
            rectangle(1.0, 0.0),
        ] {
            assert_eq!(s.sample(p), 0.0);
        }
    }

    #[test]
    fn test_defaults_are_unit_size() {
        let p = Point::new(-0.5, 0.5);
        assert_eq!(Surface::from(Steps::default()).sample(p), steps(1.0).sample(p));
        assert_eq!(Surface::from(Checker::default()).sample(p), checker(1.0).sample(p));
        assert_eq!(Surface::from(Stripes::default()).sample(p), stripes(1.0).sample(p));
        assert_eq!(Surface::from(Rings::default()).sample(p), rings(1.0).sample(p));
        assert_eq!(Ellipse::default().sample(Point::new(1.0, 0.0)), 1.0);
        assert_eq!(Rectangle::default().sample(Point::new(1.0, 1.0)), 1.0);
    }

    #[test]
    fn test_parity_at_huge_coordinates() {
        // 1e19 is past i64::MAX and lies in an even cell.
        assert_eq!(at(&stripes(1.0), 1e19, 0.0), 0.0);
        assert_eq!(at(&rings(1.0), 1e19, 0.0), 1.0);
        assert_eq!(at(&checker(1.0), 1e19, 0.0), 1.0);
        assert_eq!(at(&checker(1.0), 1e19, 0.5), 1.0);
        assert_eq!(at(&checker(1.0), 1e19, 1.5), 0.0);
        assert_eq!(at(&steps(1.0), 1e19, 0.0), 1e19);
    }

    #[test]
    fn test_with_size_builders() {
        let p = Point::new(-0.75, 0.25);
        assert_eq!(Steps::default().with_size(0.5).size, 0.5);
        assert_eq!(Steps::default().with_size(0.5).sample(p), -2.0);
        assert_eq!(Checker::default().with_size(0.5).sample(p), 1.0);
        assert_eq!(Stripes::new(2.0).with_size(0.5).sample(p), 0.0);
        assert_eq!(Rings::default().with_size(0.5).sample(p), 0.0);
        // Degenerate sizes set through the builder still degrade to zero.
        assert_eq!(Checker::default().with_size(-1.0).sample(Point::ORIGIN), 0.0);
    }

    #[test]
    fn test_with_axes_builders() {
        let e = Ellipse::default().with_axes(3.0, 0.5);
        assert_eq!((e.a, e.b), (3.0, 0.5));
        assert_eq!(e.sample(Point::new(2.9, 0.0)), 1.0);
        assert_eq!(e.sample(Point::new(0.0, 0.6)), 0.0);

        let r = Rectangle::square(1.0).with_axes(0.5, 2.0);
        assert_eq!(r.sample(Point::new(0.5, 2.0)), 1.0);
        assert_eq!(r.sample(Point::new(0.6, 0.0)), 0.0);
        assert_eq!(Rectangle::default().with_axes(0.0, 1.0).sample(Point::ORIGIN), 0.0);
    }

    #[test]
    fn test_shape_helpers() {
        assert_eq!(Ellipse::circle(2.0).sample(Point::new(0.0, 2.0)), 1.0);
        assert_eq!(Rectangle::square(0.5).sample(Point::new(0.5, 0.6)), 0.0);
    }
}
