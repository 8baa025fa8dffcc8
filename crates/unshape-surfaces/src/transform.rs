//! Domain and value transforms.
//!
//! Domain transforms remap the input point before delegating to the wrapped
//! surface; value transforms reshape its output. Each takes the wrapped
//! surface by value and returns a new, independent surface.

use glam::DVec2;

use crate::log::{debug, warn};
use crate::{Point, Real, Result, Surface, SurfaceError};

/// Moves the pattern by `offset`: samples `f` at `p - offset`.
pub fn translate(f: Surface, offset: Point) -> Surface {
    let offset = offset.as_dvec2();
    Surface::from_fn(move |p| f.sample((p.as_dvec2() - offset).into()))
}

/// Stretches the pattern by `factor`: samples `f` at `p / factor`.
///
/// Fails with [`SurfaceError::InvalidScale`] if either component is zero or
/// not finite.
pub fn scale(f: Surface, factor: Point) -> Result<Surface> {
    let factor = factor.as_dvec2();
    if !factor.is_finite() || factor.x == 0.0 || factor.y == 0.0 {
        warn!(x = factor.x, y = factor.y, "rejected scale factor");
        return Err(SurfaceError::InvalidScale {
            x: factor.x,
            y: factor.y,
        });
    }
    Ok(Surface::from_fn(move |p| {
        f.sample((p.as_dvec2() / factor).into())
    }))
}

/// Swaps the axes: samples `f` at `(y, x)`.
pub fn invert(f: Surface) -> Surface {
    Surface::from_fn(move |p| f.sample(Point::new(p.y(), p.x())))
}

/// Mirrors across the vertical axis: samples `f` at `(-x, y)`.
pub fn flip(f: Surface) -> Surface {
    Surface::from_fn(move |p| f.sample(Point::new(-p.x(), p.y())))
}

/// Rotates the pattern counter-clockwise by `degrees`.
///
/// The sample point is rotated by `-degrees` around the origin. The angle sum
/// is taken by multiplying unit directions, so no arctangent is needed. The
/// origin maps to itself.
pub fn rotate(f: Surface, degrees: Real) -> Surface {
    let turn = DVec2::from_angle(-degrees.to_radians());
    debug!(degrees, "rotate");
    Surface::from_fn(move |p| {
        let v = p.as_dvec2();
        let r = v.length();
        if r == 0.0 {
            return f.sample(p);
        }
        let direction = v / r;
        f.sample((direction.rotate(turn) * r).into())
    })
}

/// Multiplies the output by `c`.
pub fn mul(f: Surface, c: Real) -> Surface {
    Surface::from_fn(move |p| f.sample(p) * c)
}

/// Adds `c` to the output.
pub fn add(f: Surface, c: Real) -> Surface {
    Surface::from_fn(move |p| f.sample(p) + c)
}

/// Applies `g` to the output.
pub fn map<G>(f: Surface, g: G) -> Surface
where
    G: Fn(Real) -> Real + Send + Sync + 'static,
{
    Surface::from_fn(move |p| g(f.sample(p)))
}
