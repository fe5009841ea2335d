//! Wire formats and payload kinds.
//!
//! The object model does not read or write any format itself. Callers use
//! these enums to pick the normalization to run before comparing trees and to
//! compute default content types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadFormat {
    /// Unspecified; resolves to JSON for everything JSON can carry
    #[default]
    Default,
    Json,
    /// CSDL XML metadata documents
    Metadata,
    /// Multipart batch
    Batch,
    /// Raw `$value` bodies
    RawValue,
}

impl PayloadFormat {
    /// True if payloads in this format are written as JSON.
    pub fn is_json(self) -> bool {
        matches!(self, PayloadFormat::Default | PayloadFormat::Json)
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadFormat::Default => write!(f, "default"),
            PayloadFormat::Json => write!(f, "json"),
            PayloadFormat::Metadata => write!(f, "metadata"),
            PayloadFormat::Batch => write!(f, "batch"),
            PayloadFormat::RawValue => write!(f, "raw-value"),
        }
    }
}

/// What a payload represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadKind {
    Resource,
    ResourceSet,
    Property,
    Collection,
    EntityReferenceLink,
    EntityReferenceLinks,
    Value,
    BinaryValue,
    ServiceDocument,
    MetadataDocument,
    Error,
    Parameter,
    Batch,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayloadKind::Resource => "resource",
            PayloadKind::ResourceSet => "resource set",
            PayloadKind::Property => "property",
            PayloadKind::Collection => "collection",
            PayloadKind::EntityReferenceLink => "entity reference link",
            PayloadKind::EntityReferenceLinks => "entity reference links",
            PayloadKind::Value => "value",
            PayloadKind::BinaryValue => "binary value",
            PayloadKind::ServiceDocument => "service document",
            PayloadKind::MetadataDocument => "metadata document",
            PayloadKind::Error => "error",
            PayloadKind::Parameter => "parameter",
            PayloadKind::Batch => "batch",
        };
        f.write_str(name)
    }
}
