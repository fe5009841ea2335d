//! Error types for comparison and verification

use thiserror::Error;

/// Result type for comparison operations
pub type Result<T> = std::result::Result<T, CompareError>;

/// Errors raised while resolving comparers or comparing payloads
#[derive(Debug, Error)]
pub enum CompareError {
    /// A selected strategy has no real implementation
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Expected and actual errors differ in one field
    #[error("Error {field} mismatch: expected {expected:?}, actual {actual:?}")]
    ErrorMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    /// Normalized payload trees differ
    #[error("Payload mismatch ({format} format)\nexpected:\n{expected}\nactual:\n{actual}")]
    PayloadMismatch {
        format: payload_om::PayloadFormat,
        expected: String,
        actual: String,
    },

    #[error("No {contract} strategy registered under '{name}'")]
    UnknownStrategy {
        contract: &'static str,
        name: String,
    },

    #[error("{contract} strategy '{name}' is already registered")]
    DuplicateStrategy {
        contract: &'static str,
        name: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Object model errors
    #[error(transparent)]
    Payload(#[from] payload_om::Error),
}
