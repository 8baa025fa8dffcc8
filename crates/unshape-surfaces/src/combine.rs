//! N-ary combinators.
//!
//! [`evaluate`] blends several surfaces through one scalar function, and
//! [`compose`] chains scalar functions in pipeline order.

use std::fmt;
use std::sync::Arc;

use crate::log::{debug, warn};
use crate::{Real, Result, Surface, SurfaceError};

/// A shareable scalar function `Real -> Real`.
pub type ScalarFn = Arc<dyn Fn(Real) -> Real + Send + Sync>;

/// Wraps a closure as a [`ScalarFn`].
pub fn scalar<F>(f: F) -> ScalarFn
where
    F: Fn(Real) -> Real + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A fixed-size group of surfaces that can be blended by a function of
/// matching arity.
///
/// Implemented for tuples of one to eight [`Surface`]s. A blend function with
/// the wrong number of parameters does not satisfy the bound, so arity errors
/// surface at compile time.
pub trait Surfaces<G> {
    /// Number of surfaces in the group.
    const ARITY: usize;

    /// Builds the surface `p -> g(s1(p), ..., sn(p))`.
    fn blend(self, g: G) -> Surface;
}

macro_rules! impl_surfaces {
    (@surface $s:ident) => { Surface };
    (@real $s:ident) => { Real };
    ($n:expr; $($s:ident),+) => {
        impl<G> Surfaces<G> for ($(impl_surfaces!(@surface $s),)+)
        where
            G: Fn($(impl_surfaces!(@real $s)),+) -> Real + Send + Sync + 'static,
        {
            const ARITY: usize = $n;

            fn blend(self, g: G) -> Surface {
                let ($($s,)+) = self;
                Surface::from_fn(move |p| g($($s.sample(p)),+))
            }
        }
    };
}

impl_surfaces!(1; a);
impl_surfaces!(2; a, b);
impl_surfaces!(3; a, b, c);
impl_surfaces!(4; a, b, c, d);
impl_surfaces!(5; a, b, c, d, e);
impl_surfaces!(6; a, b, c, d, e, f);
impl_surfaces!(7; a, b, c, d, e, f, g2);
impl_surfaces!(8; a, b, c, d, e, f, g2, h);

/// Blends a tuple of surfaces through `g`.
///
/// The result at `p` is `g(s1(p), s2(p), ..., sn(p))`.
///
/// # Example
/// ```
/// use unshape_surfaces::{Point, Real, evaluate, slope, sqr};
///
/// let s = evaluate(|a: Real, b: Real| a + b, (slope(), sqr()));
/// assert_eq!(s.sample(Point::new(2.0, 3.0)), 6.0);
/// ```
pub fn evaluate<G, S>(g: G, surfaces: S) -> Surface
where
    S: Surfaces<G>,
{
    debug!(arity = S::ARITY, "evaluate");
    surfaces.blend(g)
}

/// Blends a runtime-sized list of surfaces through `g`.
///
/// `g` receives the sampled values in the order the surfaces were given.
/// Fails with [`SurfaceError::ArityMismatch`] unless exactly `arity`
/// surfaces are supplied.
pub fn evaluate_slice<G, I>(arity: usize, g: G, surfaces: I) -> Result<Surface>
where
    G: Fn(&[Real]) -> Real + Send + Sync + 'static,
    I: IntoIterator<Item = Surface>,
{
    let surfaces: Vec<Surface> = surfaces.into_iter().collect();
    if surfaces.len() != arity {
        warn!(expected = arity, got = surfaces.len(), "arity mismatch");
        return Err(SurfaceError::ArityMismatch {
            expected: arity,
            got: surfaces.len(),
        });
    }
    debug!(arity, "evaluate_slice");
    Ok(Surface::from_fn(move |p| {
        let values: Vec<Real> = surfaces.iter().map(|s| s.sample(p)).collect();
        g(&values)
    }))
}

/// Chains scalar functions in pipeline order.
///
/// The first function is applied first: `compose([f1, f2])(x)` is
/// `f2(f1(x))`. An empty chain is the identity.
///
/// # Example
/// ```
/// use unshape_surfaces::{compose, scalar};
///
/// let f = compose([scalar(|x| x * 2.0), scalar(|x| x + 3.0)]);
/// assert_eq!(f(5.0), 13.0);
/// ```
pub fn compose<I>(stages: I) -> ScalarFn
where
    I: IntoIterator<Item = ScalarFn>,
{
    let stages: Vec<ScalarFn> = stages.into_iter().collect();
    Arc::new(move |x| stages.iter().fold(x, |acc, stage| stage(acc)))
}

/// Chains any number of closures in pipeline order.
///
/// ```
/// use unshape_surfaces::compose;
///
/// let f = compose![|x| x - 1.0, |x| x * x];
/// assert_eq!(f(4.0), 9.0);
/// assert_eq!(compose![](7.0), 7.0);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose(::std::vec::Vec::<$crate::ScalarFn>::new())
    };
    ($($f:expr),+ $(,)?) => {
        $crate::compose([$($crate::scalar($f)),+])
    };
}

/// Builder for scalar pipelines.
///
/// ```
/// use unshape_surfaces::Pipeline;
///
/// let f = Pipeline::new().then(|x| x * 2.0).then(|x| x + 3.0).build();
/// assert_eq!(f(1.0), 5.0);
/// ```
#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Vec<ScalarFn>,
}

impl Pipeline {
    /// An empty pipeline (the identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage applied after all previous ones.
    pub fn then<F>(mut self, f: F) -> Self
    where
        F: Fn(Real) -> Real + Send + Sync + 'static,
    {
        self.stages.push(scalar(f));
        self
    }

    /// Appends an existing scalar function.
    pub fn then_fn(mut self, f: ScalarFn) -> Self {
        self.stages.push(f);
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs the pipeline on one value.
    pub fn apply(&self, x: Real) -> Real {
        self.stages.iter().fold(x, |acc, stage| stage(acc))
    }

    /// Freezes the pipeline into a single scalar function.
    pub fn build(self) -> ScalarFn {
        compose(self.stages)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}
