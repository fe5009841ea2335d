use super::cursor::Cursor;
use super::walker;
use crate::payload::*;

/// A read-only visitor over a payload tree.
///
/// Every method defaults to the matching `walker::walk_*` function, which
/// recurses into the node's children. Override a method to act on that
/// variant, calling the walker before, after, or not at all.
pub trait Visitor: Sized {
    /// Entry point for traversal - automatically initializes a Cursor.
    fn traverse(&mut self, element: &PayloadElement) {
        let mut cursor = Cursor::new();
        self.visit_element(&mut cursor, element);
    }

    fn visit_element(&mut self, cursor: &mut Cursor, element: &PayloadElement) {
        walker::walk_element(self, cursor, element);
    }

    fn visit_primitive(&mut self, _cursor: &mut Cursor, _primitive: &PrimitiveValue) {
        // No children
    }

    fn visit_complex(&mut self, cursor: &mut Cursor, complex: &ComplexValue) {
        walker::walk_complex(self, cursor, complex);
    }

    fn visit_collection(&mut self, cursor: &mut Cursor, collection: &CollectionValue) {
        walker::walk_collection(self, cursor, collection);
    }

    fn visit_collection_item(&mut self, cursor: &mut Cursor, item: &CollectionItem) {
        walker::walk_collection_item(self, cursor, item);
    }

    fn visit_property(&mut self, cursor: &mut Cursor, property: &Property) {
        walker::walk_property(self, cursor, property);
    }

    fn visit_resource(&mut self, cursor: &mut Cursor, resource: &Resource) {
        walker::walk_resource(self, cursor, resource);
    }

    fn visit_resource_set(&mut self, cursor: &mut Cursor, resource_set: &ResourceSet) {
        walker::walk_resource_set(self, cursor, resource_set);
    }

    fn visit_navigation_link(&mut self, cursor: &mut Cursor, link: &NavigationLink) {
        walker::walk_navigation_link(self, cursor, link);
    }
}
