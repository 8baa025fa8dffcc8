//! Sampling surfaces onto regular grids.

use crate::log::debug;
use crate::{Point, Real, Surface};

/// Grid layout for [`bake`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BakeConfig {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
    /// Corner sampled by the first pixel.
    pub min: Point,
    /// Opposite corner.
    pub max: Point,
    /// Samples per pixel, rounded up to a square count.
    pub samples: u32,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self::new(256, 256)
    }
}

impl BakeConfig {
    /// A `width` x `height` grid over `[-1, 1] x [-1, 1]`, one sample per pixel.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            min: Point::new(-1.0, -1.0),
            max: Point::new(1.0, 1.0),
            samples: 1,
        }
    }

    /// Sets the sampled rectangle.
    pub fn with_bounds(mut self, min: Point, max: Point) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Sets the number of anti-aliasing samples per pixel.
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples.max(1);
        self
    }

    /// Number of pixels in the grid.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the grid has no pixels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Samples `surface` over the grid described by `config`.
///
/// Values are returned row-major. Row 0 lies along `min.y` and column 0
/// along `min.x`. Each pixel is sampled at its centre, or averaged over a
/// regular sub-grid when `samples > 1`.
///
/// # Example
/// ```
/// use unshape_surfaces::{BakeConfig, bake, checker};
///
/// let config = BakeConfig::new(8, 8);
/// let pixels = bake(&checker(0.25), &config);
/// assert_eq!(pixels.len(), 64);
/// ```
pub fn bake(surface: &Surface, config: &BakeConfig) -> Vec<Real> {
    if config.is_empty() {
        return Vec::new();
    }

    let width = config.width as Real;
    let height = config.height as Real;
    let span_x = config.max.x() - config.min.x();
    let span_y = config.max.y() - config.min.y();
    let per_axis = (config.samples.max(1) as Real).sqrt().ceil() as u32;
    let count = (per_axis * per_axis) as Real;

    debug!(
        width = config.width,
        height = config.height,
        per_axis,
        "bake"
    );

    let at = |u: Real, v: Real| {
        surface.sample(Point::new(
            config.min.x() + u / width * span_x,
            config.min.y() + v / height * span_y,
        ))
    };

    let mut data = Vec::with_capacity(config.len());
    for y in 0..config.height {
        for x in 0..config.width {
            let value = if per_axis == 1 {
                at(x as Real + 0.5, y as Real + 0.5)
            } else {
                let mut sum = 0.0;
                for sy in 0..per_axis {
                    for sx in 0..per_axis {
                        let u = x as Real + (sx as Real + 0.5) / per_axis as Real;
                        let v = y as Real + (sy as Real + 0.5) / per_axis as Real;
                        sum += at(u, v);
                    }
                }
                sum / count
            };
            data.push(value);
        }
    }
    data
}
