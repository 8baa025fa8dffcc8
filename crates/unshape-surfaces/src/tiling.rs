//! Floor-division primitives for tiled patterns.
//!
//! Cell indices round toward negative infinity so that tilings stay symmetric
//! across the origin: with a cell size of 1, `x = -0.5` lies in cell `-1`.

use crate::Real;

/// Mathematical floor of `x / s`, as a real.
///
/// `s` must be strictly positive; callers validate it first.
pub fn floor_div(x: Real, s: Real) -> Real {
    (x / s).floor()
}

/// Whether the cell of size `s` containing `x` has an even index.
///
/// Parity is taken on the real quotient, so it stays exact past the range of
/// any integer type: every float at or above 2^53 is an even integer.
pub fn is_even_cell(x: Real, s: Real) -> bool {
    floor_div(x, s).rem_euclid(2.0) == 0.0
}

/// Whether a size parameter is usable (strictly positive and finite).
pub(crate) fn is_valid_size(s: Real) -> bool {
    s.is_finite() && s > 0.0
}
