//! Out-of-band annotations for payload nodes.
//!
//! Every node owns an [`Annotations`] store holding at most one value per
//! annotation kind. A kind is simply a Rust type implementing [`Annotation`],
//! so new kinds can be introduced without touching the node types.

pub mod kinds;
pub mod store;

pub use kinds::{
    CollectionItemCapture, ExpandedContent, ExpandedNavigationItem, FeedEntryCapture,
    PropertyMetadata,
};
pub use store::{Annotated, Annotation, AnnotationAny, Annotations};
