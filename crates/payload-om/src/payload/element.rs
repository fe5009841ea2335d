//! Root element sum type.

use super::primitive::PrimitiveValue;
use super::property::{Property, PropertyValue};
use super::resource::{NavigationLink, Resource, ResourceSet};
use super::structured::{CollectionValue, ComplexValue};
use crate::annotation::{Annotated, Annotations};

/// Any payload node. Used as the root of a tree handed to a visitor.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadElement {
    Primitive(PrimitiveValue),
    Complex(ComplexValue),
    Collection(CollectionValue),
    Resource(Resource),
    ResourceSet(ResourceSet),
    NavigationLink(NavigationLink),
    Property(Property),
}

/// Annotations of the root node.
impl Annotated for PayloadElement {
    fn annotations(&self) -> &Annotations {
        match self {
            PayloadElement::Primitive(n) => &n.annotations,
            PayloadElement::Complex(n) => &n.annotations,
            PayloadElement::Collection(n) => &n.annotations,
            PayloadElement::Resource(n) => &n.annotations,
            PayloadElement::ResourceSet(n) => &n.annotations,
            PayloadElement::NavigationLink(n) => &n.annotations,
            PayloadElement::Property(n) => &n.annotations,
        }
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        match self {
            PayloadElement::Primitive(n) => &mut n.annotations,
            PayloadElement::Complex(n) => &mut n.annotations,
            PayloadElement::Collection(n) => &mut n.annotations,
            PayloadElement::Resource(n) => &mut n.annotations,
            PayloadElement::ResourceSet(n) => &mut n.annotations,
            PayloadElement::NavigationLink(n) => &mut n.annotations,
            PayloadElement::Property(n) => &mut n.annotations,
        }
    }
}

impl PayloadElement {
    /// Variant name, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            PayloadElement::Primitive(_) => "Primitive",
            PayloadElement::Complex(_) => "Complex",
            PayloadElement::Collection(_) => "Collection",
            PayloadElement::Resource(_) => "Resource",
            PayloadElement::ResourceSet(_) => "ResourceSet",
            PayloadElement::NavigationLink(_) => "NavigationLink",
            PayloadElement::Property(_) => "Property",
        }
    }
}

impl From<PrimitiveValue> for PayloadElement {
    fn from(node: PrimitiveValue) -> Self {
        PayloadElement::Primitive(node)
    }
}

impl From<ComplexValue> for PayloadElement {
    fn from(node: ComplexValue) -> Self {
        PayloadElement::Complex(node)
    }
}

impl From<CollectionValue> for PayloadElement {
    fn from(node: CollectionValue) -> Self {
        PayloadElement::Collection(node)
    }
}

impl From<Resource> for PayloadElement {
    fn from(node: Resource) -> Self {
        PayloadElement::Resource(node)
    }
}

impl From<ResourceSet> for PayloadElement {
    fn from(node: ResourceSet) -> Self {
        PayloadElement::ResourceSet(node)
    }
}

impl From<NavigationLink> for PayloadElement {
    fn from(node: NavigationLink) -> Self {
        PayloadElement::NavigationLink(node)
    }
}

impl From<Property> for PayloadElement {
    fn from(node: Property) -> Self {
        PayloadElement::Property(node)
    }
}

impl From<PropertyValue> for PayloadElement {
    fn from(value: PropertyValue) -> Self {
        match value {
            PropertyValue::Primitive(p) => PayloadElement::Primitive(p),
            PropertyValue::Complex(c) => PayloadElement::Complex(c),
            PropertyValue::Collection(c) => PayloadElement::Collection(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_name() {
        let element: PayloadElement = Resource::new().into();
        assert_eq!(element.kind_name(), "Resource");

        let element: PayloadElement = PropertyValue::from(CollectionValue::new()).into();
        assert_eq!(element.kind_name(), "Collection");
    }

    #[test]
    fn test_root_annotations() {
        let mut element: PayloadElement = ResourceSet::new().into();
        assert!(element.annotations().is_empty());

        element.set_annotation(crate::annotation::FeedEntryCapture::feed());
        assert!(element.has_annotation::<crate::annotation::FeedEntryCapture>());
        assert_eq!(element.annotations().len(), 1);
    }
}
