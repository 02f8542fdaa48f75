//! Error types for the milestone engine.

use thiserror::Error;

/// Result type for milestone computations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the engine boundary.
///
/// A vote count can never legitimately be negative, so bad input is reported
/// to the caller instead of being clamped to zero.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The vote count was negative, NaN or infinite.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
