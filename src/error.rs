//! Error types.
//!
//! Every fallible operation in this crate returns [`Result`]. Nothing is
//! caught or recovered internally; failures propagate straight to the caller.

/// Errors produced by the analysis functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A denominator (`sigma`, or `usl - lsl`) was exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The input slice was empty where at least one value is required.
    #[error("must provide at least one value")]
    EmptyInput,

    /// Paired slices had different lengths.
    #[error("length mismatch: {values} values but {x} x-coordinates")]
    LengthMismatch { values: usize, x: usize },

    /// An input that must be finite was NaN or infinite.
    #[error("non-finite input")]
    NonFinite,

    /// The least-squares solver rejected the system.
    #[error("least-squares solve failed: {0}")]
    Solver(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Divides `numerator` by `denominator`, failing on an exact zero denominator.
///
/// Both `0.0` and `-0.0` are rejected. A NaN denominator is not zero and
/// passes through to the arithmetic.
pub(crate) fn checked_div(numerator: f64, denominator: f64) -> Result<f64> {
    if denominator == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(numerator / denominator)
}
