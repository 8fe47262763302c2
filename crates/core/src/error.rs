//! Error types for loadfit.

use thiserror::Error;

/// Result type alias for loadfit validation and I/O boundaries.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when rejecting input before it reaches a packer.
///
/// The packers themselves are total over their numeric domain and never
/// return these; they are produced by the `validate` entry points that a
/// calling layer runs first.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing, negative or non-finite dimensions.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Negative or non-finite weight, or a non-positive weight budget.
    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    /// A product that cannot take part in a combination.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Malformed textual input (e.g. a dimension string).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
