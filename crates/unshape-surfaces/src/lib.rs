//! Composable scalar surfaces over the plane.
//!
//! A [`Surface`] maps a [`Point`] to a [`Real`]. Generators build base
//! patterns (stripes, checkers, rings, shapes), transforms reshape either the
//! input point or the output value, and combinators blend several surfaces
//! through an arbitrary scalar function.
//!
//! Every surface owns what it captures, so it can be stored, cloned and
//! evaluated long after the expression that built it, from any thread.
//!
//! # Examples
//!
//! ```
//! use unshape_surfaces::{Point, Real, checker, evaluate, rings};
//!
//! let board = checker(1.0).rotate(45.0) * 0.5;
//! let target = rings(2.0);
//! let blend = evaluate(|a: Real, b: Real| a.max(b), (board, target));
//!
//! let value = blend.sample(Point::new(0.25, 0.25));
//! assert!((0.0..=1.0).contains(&value));
//! ```

mod bake;
mod combine;
mod error;
pub mod log;
mod pattern;
mod point;
pub mod tiling;
mod transform;

use std::fmt;
use std::ops;
use std::sync::Arc;

pub use bake::*;
pub use combine::*;
pub use error::{Result, SurfaceError};
pub use pattern::*;
pub use point::{Point, Real};
pub use transform::*;

/// Anything that can be sampled at a point of the plane.
///
/// Generator parameter structs implement this directly; [`Surface::new`]
/// erases any field into the one concrete surface type.
pub trait Field {
    /// Samples the field at `p`.
    fn sample(&self, p: Point) -> Real;
}

impl<F: Fn(Point) -> Real> Field for F {
    fn sample(&self, p: Point) -> Real {
        self(p)
    }
}

/// A shareable, self-contained scalar function of the plane.
///
/// Cloning is cheap: clones share the captured state, which is never
/// mutated after construction.
#[derive(Clone)]
pub struct Surface {
    f: Arc<dyn Fn(Point) -> Real + Send + Sync>,
}

impl Surface {
    /// Erases a field into a surface.
    pub fn new<F>(field: F) -> Self
    where
        F: Field + Send + Sync + 'static,
    {
        Self::from_fn(move |p| field.sample(p))
    }

    /// Wraps a closure as a surface.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Point) -> Real + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Evaluates the surface at `p`.
    pub fn sample(&self, p: Point) -> Real {
        (self.f)(p)
    }

    /// Evaluates the surface at `(x, y)`.
    pub fn sample_xy(&self, x: Real, y: Real) -> Real {
        self.sample(Point::new(x, y))
    }

    /// See [`translate`].
    pub fn translate(self, offset: Point) -> Self {
        translate(self, offset)
    }

    /// See [`scale`].
    pub fn scale(self, factor: Point) -> Result<Self> {
        scale(self, factor)
    }

    /// See [`invert`].
    pub fn invert(self) -> Self {
        invert(self)
    }

    /// See [`flip`].
    pub fn flip(self) -> Self {
        flip(self)
    }

    /// See [`rotate`].
    pub fn rotate(self, degrees: Real) -> Self {
        rotate(self, degrees)
    }

    /// See [`mul`](transform::mul).
    pub fn mul(self, c: Real) -> Self {
        transform::mul(self, c)
    }

    /// See [`add`](transform::add).
    pub fn add(self, c: Real) -> Self {
        transform::add(self, c)
    }

    /// See [`map`].
    pub fn map<G>(self, g: G) -> Self
    where
        G: Fn(Real) -> Real + Send + Sync + 'static,
    {
        map(self, g)
    }
}

impl Field for Surface {
    fn sample(&self, p: Point) -> Real {
        Surface::sample(self, p)
    }
}

impl ops::Mul<Real> for Surface {
    type Output = Surface;

    /// See [`mul`].
    fn mul(self, c: Real) -> Surface {
        transform::mul(self, c)
    }
}

impl ops::Add<Real> for Surface {
    type Output = Surface;

    /// See [`add`].
    fn add(self, c: Real) -> Surface {
        transform::add(self, c)
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn() {
        let s = Surface::from_fn(|p| p.x() + p.y());
        assert_eq!(s.sample(Point::new(1.0, 2.0)), 3.0);
        assert_eq!(s.sample_xy(-1.0, 2.0), 1.0);
    }

    #[test]
    fn test_new_from_field() {
        let s = Surface::new(Checker::default());
        assert_eq!(s.sample(Point::ORIGIN), 1.0);
    }

    #[test]
    fn test_closure_is_field() {
        let f = |p: Point| p.y();
        assert_eq!(Field::sample(&f, Point::new(0.0, 7.0)), 7.0);
    }

    #[test]
    fn test_outlives_temporaries() {
        let s = {
            let inner = slope() + 1.0;
            let offset = Point::new(2.0, 0.0);
            inner.translate(offset) * 3.0
        };
        // (x - 2 + 1) * 3 at x = 5
        assert_eq!(s.sample(Point::new(5.0, 0.0)), 12.0);
    }

    #[test]
    fn test_clone_shares_behaviour() {
        let a = stripes(0.5).flip();
        let b = a.clone();
        for i in -10..10 {
            let p = Point::new(i as Real * 0.3, 0.0);
            assert_eq!(a.sample(p), b.sample(p));
        }
    }

    #[test]
    fn test_deterministic() {
        let s = rings(0.7).rotate(33.0).translate(Point::new(0.1, -0.4));
        let p = Point::new(1.3, -2.9);
        assert_eq!(s.sample(p), s.sample(p));
    }

    #[test]
    fn test_value_builder_methods() {
        let s = slope().mul(2.0).add(1.0);
        assert_eq!(s.sample(Point::new(4.0, 0.0)), 9.0);
        let ops = slope() * 2.0 + 1.0;
        assert_eq!(ops.sample(Point::new(4.0, 0.0)), s.sample(Point::new(4.0, 0.0)));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Surface>();
        assert_send_sync::<ScalarFn>();
    }

    #[test]
    fn test_concurrent_sampling() {
        let s = checker(0.5).rotate(30.0);
        let expected: Vec<Real> = (0..64)
            .map(|i| s.sample(Point::new(i as Real * 0.1, 0.3)))
            .collect();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let s = s.clone();
                let expected = &expected;
                scope.spawn(move || {
                    for (i, want) in expected.iter().enumerate() {
                        assert_eq!(s.sample(Point::new(i as Real * 0.1, 0.3)), *want);
                    }
                });
            }
        });
    }
}
