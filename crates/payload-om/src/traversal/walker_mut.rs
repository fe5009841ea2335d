use super::cursor::Cursor;
use super::visitor_mut::VisitorMut;
use crate::annotation::{ExpandedContent, ExpandedNavigationItem};
use crate::payload::*;

pub fn walk_element_mut<V: VisitorMut>(
    visitor: &mut V,
    cursor: &mut Cursor,
    element: &mut PayloadElement,
) {
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

pub fn walk_properties_mut<V: VisitorMut>(
    visitor: &mut V,
    cursor: &mut Cursor,
    properties: &mut [Property],
) {
    for property in properties {
        cursor.enter(&property.name);
        visitor.visit_property(cursor, property);
        cursor.exit();
    }
}

pub fn walk_complex_mut<V: VisitorMut>(
    visitor: &mut V,
    cursor: &mut Cursor,
    complex: &mut ComplexValue,
) {
    walk_properties_mut(visitor, cursor, &mut complex.properties);
}

pub fn walk_collection_mut<V: VisitorMut>(
    visitor: &mut V,
    cursor: &mut Cursor,
    collection: &mut CollectionValue,
) {
    for (index, item) in collection.items.iter_mut().enumerate() {
        cursor.enter_index(index);
        visitor.visit_collection_item(cursor, item);
        cursor.exit();
    }
}

pub fn walk_collection_item_mut<V: VisitorMut>(
    visitor: &mut V,
    cursor: &mut Cursor,
    item: &mut CollectionItem,
) {
    match item {
        CollectionItem::Primitive(p) => visitor.visit_primitive(cursor, p),
        CollectionItem::Complex(c) => visitor.visit_complex(cursor, c),
    }
}

pub fn walk_property_mut<V: VisitorMut>(
    visitor: &mut V,
    cursor: &mut Cursor,
    property: &mut Property,
) {
    match &mut property.value {
        PropertyValue::Primitive(p) => visitor.visit_primitive(cursor, p),
        PropertyValue::Complex(c) => visitor.visit_complex(cursor, c),
        PropertyValue::Collection(c) => visitor.visit_collection(cursor, c),
    }
}

pub fn walk_resource_mut<V: VisitorMut>(
    visitor: &mut V,
    cursor: &mut Cursor,
    resource: &mut Resource,
) {
    walk_properties_mut(visitor, cursor, &mut resource.properties);
    for link in &mut resource.navigation_links {
        cursor.enter(&link.name);
        visitor.visit_navigation_link(cursor, link);
        cursor.exit();
    }
}

pub fn walk_resource_set_mut<V: VisitorMut>(
    visitor: &mut V,
    cursor: &mut Cursor,
    resource_set: &mut ResourceSet,
) {
    for (index, resource) in resource_set.resources.iter_mut().enumerate() {
        cursor.enter_index(index);
        visitor.visit_resource(cursor, resource);
        cursor.exit();
    }
}

pub fn walk_navigation_link_mut<V: VisitorMut>(
    visitor: &mut V,
    cursor: &mut Cursor,
    link: &mut NavigationLink,
) {
    let Some(expansion) = link.annotations.get_mut::<ExpandedNavigationItem>() else {
        return;
    };
    match &mut expansion.content {
        ExpandedContent::Null => {}
        ExpandedContent::Resource(r) => visitor.visit_resource(cursor, r),
        ExpandedContent::ResourceSet(s) => visitor.visit_resource_set(cursor, s),
    }
}
