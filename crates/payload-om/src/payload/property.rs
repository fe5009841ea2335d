//! Named properties.

use super::primitive::PrimitiveValue;
use super::structured::{CollectionValue, ComplexValue};
use crate::annotation::{Annotations, PropertyMetadata};

/// The value held by a property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Primitive(PrimitiveValue),
    Complex(ComplexValue),
    Collection(CollectionValue),
}

impl PropertyValue {
    pub fn annotations(&self) -> &Annotations {
        match self {
            PropertyValue::Primitive(p) => &p.annotations,
            PropertyValue::Complex(c) => &c.annotations,
            PropertyValue::Collection(c) => &c.annotations,
        }
    }

    /// True only for a null primitive
    pub fn is_null_primitive(&self) -> bool {
        matches!(self, PropertyValue::Primitive(p) if p.is_null())
    }
}

impl From<PrimitiveValue> for PropertyValue {
    fn from(value: PrimitiveValue) -> Self {
        PropertyValue::Primitive(value)
    }
}

impl From<ComplexValue> for PropertyValue {
    fn from(value: ComplexValue) -> Self {
        PropertyValue::Complex(value)
    }
}

impl From<CollectionValue> for PropertyValue {
    fn from(value: CollectionValue) -> Self {
        PropertyValue::Collection(value)
    }
}

/// A named property of a resource or complex value.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
    pub annotations: Annotations,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Property {
            name: name.into(),
            value: value.into(),
            annotations: Annotations::new(),
        }
    }

    pub fn primitive(name: impl Into<String>, value: PrimitiveValue) -> Self {
        Property::new(name, value)
    }

    pub fn complex(name: impl Into<String>, value: ComplexValue) -> Self {
        Property::new(name, value)
    }

    pub fn collection(name: impl Into<String>, value: CollectionValue) -> Self {
        Property::new(name, value)
    }

    /// Attach property metadata hints
    pub fn with_metadata(mut self, metadata: PropertyMetadata) -> Self {
        self.annotations.set(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&PropertyMetadata> {
        self.annotations.get::<PropertyMetadata>()
    }

    /// The value to use for type inference.
    ///
    /// The metadata substitute is only consulted when the real value is a null
    /// primitive; any other value is returned as is.
    pub fn inference_value(&self) -> &PropertyValue {
        if self.value.is_null_primitive() {
            if let Some(substitute) = self
                .metadata()
                .and_then(|m| m.type_inference_value.as_ref())
            {
                return substitute;
            }
        }
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_value_uses_substitute_for_null() {
        let property = Property::primitive("Nickname", PrimitiveValue::null()).with_metadata(
            PropertyMetadata::new().with_type_inference_value(PrimitiveValue::new("x")),
        );

        match property.inference_value() {
            PropertyValue::Primitive(p) => assert_eq!(p.effective_type_name(), Some("Edm.String")),
            other => panic!("Expected primitive substitute, got {other:?}"),
        }
    }

    #[test]
    fn test_inference_value_ignores_substitute_for_non_null() {
        let property = Property::primitive("Age", PrimitiveValue::new(30)).with_metadata(
            PropertyMetadata::new().with_type_inference_value(PrimitiveValue::new("x")),
        );

        assert_eq!(property.inference_value(), &property.value);
    }

    #[test]
    fn test_inference_value_without_metadata() {
        let property = Property::primitive("Nickname", PrimitiveValue::null());
        assert!(property.inference_value().is_null_primitive());
    }
}
