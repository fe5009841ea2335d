//! Payload test object model.
//!
//! An in-memory tree for expected and actual API payloads, typed out-of-band
//! annotations attached to any node, and a visitor traversal used to prepare
//! trees (for example by normalizing away format-specific type names) before
//! they are compared.

pub mod annotation;
pub mod content_type;
pub mod error;
pub mod format;
pub mod inference;
pub mod payload;
pub mod property_kind;
pub mod traversal;

pub use annotation::{
    Annotated, Annotation, AnnotationAny, Annotations, CollectionItemCapture, ExpandedContent,
    ExpandedNavigationItem, FeedEntryCapture, PropertyMetadata,
};
pub use error::{Error, Result};
pub use format::{PayloadFormat, PayloadKind};
pub use payload::{
    CollectionItem, CollectionValue, ComplexValue, NavigationLink, PayloadElement, PrimitiveData,
    PrimitiveValue, Property, PropertyValue, Resource, ResourceSet,
};
pub use property_kind::PropertyKind;
