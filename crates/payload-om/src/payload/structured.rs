//! Complex and collection values.

use super::primitive::PrimitiveValue;
use super::property::Property;
use crate::annotation::Annotations;

/// A structured value made of named properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexValue {
    pub full_type_name: Option<String>,
    pub properties: Vec<Property>,
    pub annotations: Annotations,
}

impl ComplexValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typed(full_type_name: impl Into<String>) -> Self {
        ComplexValue {
            full_type_name: Some(full_type_name.into()),
            ..Self::default()
        }
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Find a property by name (first match in declaration order)
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// An item of a collection value.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionItem {
    Primitive(PrimitiveValue),
    Complex(ComplexValue),
}

impl CollectionItem {
    pub fn annotations(&self) -> &Annotations {
        match self {
            CollectionItem::Primitive(p) => &p.annotations,
            CollectionItem::Complex(c) => &c.annotations,
        }
    }
}

impl From<PrimitiveValue> for CollectionItem {
    fn from(value: PrimitiveValue) -> Self {
        CollectionItem::Primitive(value)
    }
}

impl From<ComplexValue> for CollectionItem {
    fn from(value: ComplexValue) -> Self {
        CollectionItem::Complex(value)
    }
}

/// An ordered collection of primitive or complex items.
///
/// `full_type_name` uses the `Collection(<item type>)` form when present.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionValue {
    pub full_type_name: Option<String>,
    pub items: Vec<CollectionItem>,
    pub annotations: Annotations,
}

impl CollectionValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typed(full_type_name: impl Into<String>) -> Self {
        CollectionValue {
            full_type_name: Some(full_type_name.into()),
            ..Self::default()
        }
    }

    pub fn with_item(mut self, item: impl Into<CollectionItem>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Item type name taken from a `Collection(...)` full type name.
    pub fn item_type_name(&self) -> Option<&str> {
        self.full_type_name
            .as_deref()
            .and_then(|name| name.strip_prefix("Collection("))
            .and_then(|rest| rest.strip_suffix(')'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_property_lookup() {
        let address = ComplexValue::typed("NS.Address")
            .with_property(Property::primitive("City", PrimitiveValue::new("Oslo")))
            .with_property(Property::primitive("Zip", PrimitiveValue::new("0150")));

        assert_eq!(address.properties.len(), 2);
        assert!(address.property("City").is_some());
        assert!(address.property("Street").is_none());
    }

    #[test]
    fn test_collection_item_type_name() {
        let tags = CollectionValue::typed("Collection(Edm.String)");
        assert_eq!(tags.item_type_name(), Some("Edm.String"));

        let untyped = CollectionValue::new();
        assert_eq!(untyped.item_type_name(), None);

        let malformed = CollectionValue::typed("Edm.String");
        assert_eq!(malformed.item_type_name(), None);
    }

    #[test]
    fn test_collection_keeps_item_order() {
        let numbers = CollectionValue::new()
            .with_item(PrimitiveValue::new(1))
            .with_item(PrimitiveValue::new(2))
            .with_item(ComplexValue::new());

        assert!(matches!(numbers.items[0], CollectionItem::Primitive(_)));
        assert!(matches!(numbers.items[2], CollectionItem::Complex(_)));
    }
}
