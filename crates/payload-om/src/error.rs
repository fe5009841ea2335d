//! Error types for the payload object model.
//!
//! Annotation lookups never fail (absence is an ordinary `None`), so the
//! variants here only cover kind validation and content-type negotiation.

use thiserror::Error;

use crate::format::{PayloadFormat, PayloadKind};
use crate::property_kind::PropertyKind;

/// Result type alias for payload object model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for payload object model operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid property kind `{kind}`: {reason}")]
    InvalidPropertyKind {
        kind: PropertyKind,
        reason: &'static str,
    },

    #[error("No default content type for {kind} payloads in {format} format")]
    UnsupportedContentType {
        kind: PayloadKind,
        format: PayloadFormat,
    },
}
