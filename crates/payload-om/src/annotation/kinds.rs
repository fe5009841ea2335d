//! Annotation kinds shipped with the object model.
//!
//! - `ExpandedNavigationItem`: inline content of an expanded navigation link
//! - `FeedEntryCapture`: reader-level feed/entry data the tree has no field for
//! - `CollectionItemCapture`: raw collection item as read from the wire
//! - `PropertyMetadata`: hints that override schema inference for a property

use serde_json::Value as JsonValue;

use super::store::Annotation;
use crate::payload::{PropertyValue, Resource, ResourceSet};
use crate::property_kind::PropertyKind;

/// Content of an expanded navigation link.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpandedContent {
    /// Expanded single-valued link whose target is null
    Null,
    /// Expanded single-valued link
    Resource(Box<Resource>),
    /// Expanded collection-valued link
    ResourceSet(ResourceSet),
}

/// Expansion captured for a navigation link.
///
/// Only expanded links carry this annotation; a deferred link has none. The
/// annotation owns the expanded subtree and the default traversal descends
/// into it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedNavigationItem {
    pub content: ExpandedContent,
}

impl ExpandedNavigationItem {
    pub fn null() -> Self {
        ExpandedNavigationItem {
            content: ExpandedContent::Null,
        }
    }

    pub fn resource(resource: Resource) -> Self {
        ExpandedNavigationItem {
            content: ExpandedContent::Resource(Box::new(resource)),
        }
    }

    pub fn resource_set(resource_set: ResourceSet) -> Self {
        ExpandedNavigationItem {
            content: ExpandedContent::ResourceSet(resource_set),
        }
    }
}

impl Annotation for ExpandedNavigationItem {
    fn label(&self) -> &'static str {
        "expanded_navigation_item"
    }
}

/// Feed or entry data captured from the reader.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEntryCapture {
    Feed {
        count: Option<i64>,
        next_link: Option<String>,
        delta_link: Option<String>,
    },
    Entry {
        etag: Option<String>,
        edit_link: Option<String>,
        read_link: Option<String>,
    },
}

impl FeedEntryCapture {
    pub fn feed() -> Self {
        FeedEntryCapture::Feed {
            count: None,
            next_link: None,
            delta_link: None,
        }
    }

    pub fn entry() -> Self {
        FeedEntryCapture::Entry {
            etag: None,
            edit_link: None,
            read_link: None,
        }
    }

    pub fn is_feed(&self) -> bool {
        matches!(self, FeedEntryCapture::Feed { .. })
    }
}

impl Annotation for FeedEntryCapture {
    fn label(&self) -> &'static str {
        match self {
            FeedEntryCapture::Feed { .. } => "feed_capture",
            FeedEntryCapture::Entry { .. } => "entry_capture",
        }
    }
}

/// A collection item exactly as it was read, before conversion into a node.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionItemCapture {
    /// Position of the item within its collection
    pub index: usize,
    pub raw: JsonValue,
}

impl CollectionItemCapture {
    pub fn new(index: usize, raw: JsonValue) -> Self {
        CollectionItemCapture { index, raw }
    }
}

impl Annotation for CollectionItemCapture {
    fn label(&self) -> &'static str {
        "collection_item_capture"
    }
}

/// Metadata hints for a property.
///
/// When present these take precedence over whatever would be inferred from
/// the property's node variant and value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyMetadata {
    /// The property is not declared in the static schema
    pub is_open: bool,

    /// Replaces the inferred property kind
    pub kind: Option<PropertyKind>,

    /// Stand-in used for type inference when the real value is a null primitive
    pub type_inference_value: Option<PropertyValue>,
}

impl PropertyMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata for an open (undeclared) property
    pub fn open() -> Self {
        PropertyMetadata {
            is_open: true,
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: PropertyKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_type_inference_value(mut self, value: impl Into<PropertyValue>) -> Self {
        self.type_inference_value = Some(value.into());
        self
    }
}

impl Annotation for PropertyMetadata {
    fn label(&self) -> &'static str {
        "property_metadata"
    }
}
