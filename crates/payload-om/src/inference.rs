//! Inference hooks for schema building.
//!
//! A schema builder derives a property's kind and type from its node variant
//! and value. [`PropertyMetadata`](crate::PropertyMetadata) on the property
//! overrides that derivation: an explicit kind replaces the inferred one, and
//! the substitute value stands in for a null primitive when inferring the type.

use crate::error::{Error, Result};
use crate::payload::{
    CollectionItem, CollectionValue, NavigationLink, PayloadElement, Property, PropertyValue,
};
use crate::property_kind::PropertyKind;
use crate::traversal::{Cursor, Visitor, walker};

/// Property kind, taking an override from
/// [`PropertyMetadata`](crate::PropertyMetadata) when present.
///
/// Overrides are validated; inferred kinds are valid by construction.
pub fn infer_property_kind(property: &Property) -> Result<PropertyKind> {
    if let Some(kind) = property.metadata().and_then(|m| m.kind) {
        return kind.validate();
    }
    Ok(kind_of_value(property.inference_value()))
}

fn kind_of_value(value: &PropertyValue) -> PropertyKind {
    match value {
        PropertyValue::Primitive(_) => PropertyKind::PRIMITIVE,
        PropertyValue::Complex(_) => PropertyKind::COMPLEX_TYPE,
        PropertyValue::Collection(c) => PropertyKind::COLLECTION | collection_item_kind(c),
    }
}

/// Classify by the first item, or by the declared item type when empty.
/// Untyped empty collections are assumed to hold primitives.
fn collection_item_kind(collection: &CollectionValue) -> PropertyKind {
    match collection.items.first() {
        Some(CollectionItem::Primitive(_)) => PropertyKind::PRIMITIVE,
        Some(CollectionItem::Complex(_)) => PropertyKind::COMPLEX_TYPE,
        None => match collection.item_type_name() {
            Some(name) if !name.starts_with("Edm.") => PropertyKind::COMPLEX_TYPE,
            _ => PropertyKind::PRIMITIVE,
        },
    }
}

/// Kind of a navigation property.
pub fn infer_navigation_kind(link: &NavigationLink) -> PropertyKind {
    if link.is_collection {
        PropertyKind::ENTITY_SET_REFERENCE
    } else {
        PropertyKind::ENTITY_REFERENCE
    }
}

/// Full type name to record for a property, if one can be determined.
pub fn inferred_type_name(property: &Property) -> Option<String> {
    match property.inference_value() {
        PropertyValue::Primitive(p) => p.effective_type_name().map(str::to_string),
        PropertyValue::Complex(c) => c.full_type_name.clone(),
        PropertyValue::Collection(c) => c.full_type_name.clone().or_else(|| {
            let item_type = match c.items.first()? {
                CollectionItem::Primitive(p) => p.effective_type_name()?.to_string(),
                CollectionItem::Complex(complex) => complex.full_type_name.clone()?,
            };
            Some(format!("Collection({item_type})"))
        }),
    }
}

/// What a schema builder needs to know about one property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyHint {
    /// Cursor path of the property, e.g. `[0]/Address/City`
    pub path: String,
    pub kind: PropertyKind,
    pub is_open: bool,
    pub type_name: Option<String>,
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<PropertyHint>,
    error: Option<Error>,
}

impl Visitor for HintCollector {
    fn visit_property(&mut self, cursor: &mut Cursor, property: &Property) {
        if self.error.is_some() {
            return;
        }
        match infer_property_kind(property) {
            Ok(kind) => self.hints.push(PropertyHint {
                path: cursor.path(),
                kind,
                is_open: property.metadata().is_some_and(|m| m.is_open),
                type_name: inferred_type_name(property),
            }),
            Err(err) => {
                self.error = Some(err);
                return;
            }
        }
        walker::walk_property(self, cursor, property);
    }

    fn visit_navigation_link(&mut self, cursor: &mut Cursor, link: &NavigationLink) {
        if self.error.is_some() {
            return;
        }
        self.hints.push(PropertyHint {
            path: cursor.path(),
            kind: infer_navigation_kind(link),
            is_open: false,
            type_name: None,
        });
        walker::walk_navigation_link(self, cursor, link);
    }
}

/// Collect a hint for every property and navigation link in the tree, in
/// traversal order. Fails on the first invalid kind override.
pub fn collect_property_hints(element: &PayloadElement) -> Result<Vec<PropertyHint>> {
    let mut collector = HintCollector::default();
    collector.traverse(element);
    match collector.error {
        Some(err) => Err(err),
        None => Ok(collector.hints),
    }
}
