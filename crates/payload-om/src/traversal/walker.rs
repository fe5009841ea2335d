use super::cursor::Cursor;
use super::visitor::Visitor;
use crate::annotation::{ExpandedContent, ExpandedNavigationItem};
use crate::payload::*;

pub fn walk_element<V: Visitor>(visitor: &mut V, cursor: &mut Cursor, element: &PayloadElement) {
    match element {
        PayloadElement::Primitive(p) => visitor.visit_primitive(cursor, p),
        PayloadElement::Complex(c) => visitor.visit_complex(cursor, c),
        PayloadElement::Collection(c) => visitor.visit_collection(cursor, c),
        PayloadElement::Resource(r) => visitor.visit_resource(cursor, r),
        PayloadElement::ResourceSet(s) => visitor.visit_resource_set(cursor, s),
        PayloadElement::NavigationLink(l) => visitor.visit_navigation_link(cursor, l),
        PayloadElement::Property(p) => visitor.visit_property(cursor, p),
    }
}

pub fn walk_properties<V: Visitor>(visitor: &mut V, cursor: &mut Cursor, properties: &[Property]) {
    for property in properties {
        cursor.enter(&property.name);
        visitor.visit_property(cursor, property);
        cursor.exit();
    }
}

pub fn walk_complex<V: Visitor>(visitor: &mut V, cursor: &mut Cursor, complex: &ComplexValue) {
    walk_properties(visitor, cursor, &complex.properties);
}

pub fn walk_collection<V: Visitor>(
    visitor: &mut V,
    cursor: &mut Cursor,
    collection: &CollectionValue,
) {
    for (index, item) in collection.items.iter().enumerate() {
        cursor.enter_index(index);
        visitor.visit_collection_item(cursor, item);
        cursor.exit();
    }
}

pub fn walk_collection_item<V: Visitor>(
    visitor: &mut V,
    cursor: &mut Cursor,
    item: &CollectionItem,
) {
    match item {
        CollectionItem::Primitive(p) => visitor.visit_primitive(cursor, p),
        CollectionItem::Complex(c) => visitor.visit_complex(cursor, c),
    }
}

pub fn walk_property<V: Visitor>(visitor: &mut V, cursor: &mut Cursor, property: &Property) {
    match &property.value {
        PropertyValue::Primitive(p) => visitor.visit_primitive(cursor, p),
        PropertyValue::Complex(c) => visitor.visit_complex(cursor, c),
        PropertyValue::Collection(c) => visitor.visit_collection(cursor, c),
    }
}

pub fn walk_resource<V: Visitor>(visitor: &mut V, cursor: &mut Cursor, resource: &Resource) {
    walk_properties(visitor, cursor, &resource.properties);
    for link in &resource.navigation_links {
        cursor.enter(&link.name);
        visitor.visit_navigation_link(cursor, link);
        cursor.exit();
    }
}

pub fn walk_resource_set<V: Visitor>(
    visitor: &mut V,
    cursor: &mut Cursor,
    resource_set: &ResourceSet,
) {
    for (index, resource) in resource_set.resources.iter().enumerate() {
        cursor.enter_index(index);
        visitor.visit_resource(cursor, resource);
        cursor.exit();
    }
}

/// Descends into the expansion content, if the link carries any.
pub fn walk_navigation_link<V: Visitor>(
    visitor: &mut V,
    cursor: &mut Cursor,
    link: &NavigationLink,
) {
    let Some(expansion) = link.annotations.get::<ExpandedNavigationItem>() else {
        return;
    };
    match &expansion.content {
        ExpandedContent::Null => {}
        ExpandedContent::Resource(r) => visitor.visit_resource(cursor, r),
        ExpandedContent::ResourceSet(s) => visitor.visit_resource_set(cursor, s),
    }
}
