//! Payload node tree.
//!
//! The tree is strictly owned: no shared subtrees and no parent pointers.
//! Each node type carries its own [`Annotations`](crate::Annotations) store.
//!
//! - [`PrimitiveValue`]: raw value plus optional full type name
//! - [`ComplexValue`]: ordered named properties
//! - [`CollectionValue`]: ordered primitive or complex items
//! - [`Property`]: a name and a primitive, complex or collection value
//! - [`Resource`]: properties followed by navigation links (an entry)
//! - [`ResourceSet`]: ordered resources (a feed)
//! - [`NavigationLink`]: a link whose expansion, if any, lives in an annotation
//! - [`PayloadElement`]: the closed sum of all of the above, used as a tree root

pub mod element;
pub mod primitive;
pub mod property;
pub mod resource;
pub mod structured;

pub use element::PayloadElement;
pub use primitive::{PrimitiveData, PrimitiveValue};
pub use property::{Property, PropertyValue};
pub use resource::{NavigationLink, Resource, ResourceSet};
pub use structured::{CollectionItem, CollectionValue, ComplexValue};

/// Implements [`Annotated`](crate::Annotated) for node structs with an `annotations` field.
macro_rules! impl_annotated {
    ($($node:ty),* $(,)?) => {
        $(
            impl crate::annotation::Annotated for $node {
                fn annotations(&self) -> &crate::annotation::Annotations {
                    &self.annotations
                }

                fn annotations_mut(&mut self) -> &mut crate::annotation::Annotations {
                    &mut self.annotations
                }
            }
        )*
    };
}

impl_annotated!(
    PrimitiveValue,
    ComplexValue,
    CollectionValue,
    Property,
    Resource,
    ResourceSet,
    NavigationLink,
);
