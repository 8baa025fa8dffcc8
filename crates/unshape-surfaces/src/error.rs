//! Error types for surface construction.

use thiserror::Error;

use crate::Real;

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, SurfaceError>;

/// Errors raised while assembling a surface.
///
/// Evaluating a surface never fails. Every error is reported by the factory
/// that would otherwise have produced an ill-defined surface.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SurfaceError {
    /// A scale factor had a zero or non-finite component.
    #[error("invalid scale ({x}, {y}): both components must be finite and non-zero")]
    InvalidScale {
        /// Horizontal factor.
        x: Real,
        /// Vertical factor.
        y: Real,
    },

    /// The number of surfaces does not match the arity of the blend function.
    #[error("arity mismatch: blend function takes {expected} values, got {got} surfaces")]
    ArityMismatch {
        /// Arity of the blend function.
        expected: usize,
        /// Number of surfaces supplied.
        got: usize,
    },
}
