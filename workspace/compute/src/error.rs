use rust_decimal::Decimal;
use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, PartialEq)]
pub enum ComputeError {
    /// The spending limit cannot be used as a divisor.
    #[error("spending limit must be positive, got {0}")]
    InvalidLimit(Decimal),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
