use super::cursor::Cursor;
use super::walker_mut;
use crate::payload::*;

/// A visitor that may change fields of the node it is visiting.
///
/// Same shape as [`Visitor`](super::Visitor) but over `&mut` nodes, so a run
/// needs exclusive access to the tree. Only fields may change; children are
/// handed out one at a time and cannot be inserted or removed while the walk
/// is iterating over them.
pub trait VisitorMut: Sized {
    /// Entry point for traversal - automatically initializes a Cursor.
    fn traverse_mut(&mut self, element: &mut PayloadElement) {
        let mut cursor = Cursor::new();
        self.visit_element(&mut cursor, element);
    }

    fn visit_element(&mut self, cursor: &mut Cursor, element: &mut PayloadElement) {
        walker_mut::walk_element_mut(self, cursor, element);
    }

    fn visit_primitive(&mut self, _cursor: &mut Cursor, _primitive: &mut PrimitiveValue) {
        // No children
    }

    fn visit_complex(&mut self, cursor: &mut Cursor, complex: &mut ComplexValue) {
        walker_mut::walk_complex_mut(self, cursor, complex);
    }

    fn visit_collection(&mut self, cursor: &mut Cursor, collection: &mut CollectionValue) {
        walker_mut::walk_collection_mut(self, cursor, collection);
    }

    fn visit_collection_item(&mut self, cursor: &mut Cursor, item: &mut CollectionItem) {
        walker_mut::walk_collection_item_mut(self, cursor, item);
    }

    fn visit_property(&mut self, cursor: &mut Cursor, property: &mut Property) {
        walker_mut::walk_property_mut(self, cursor, property);
    }

    fn visit_resource(&mut self, cursor: &mut Cursor, resource: &mut Resource) {
        walker_mut::walk_resource_mut(self, cursor, resource);
    }

    fn visit_resource_set(&mut self, cursor: &mut Cursor, resource_set: &mut ResourceSet) {
        walker_mut::walk_resource_set_mut(self, cursor, resource_set);
    }

    fn visit_navigation_link(&mut self, cursor: &mut Cursor, link: &mut NavigationLink) {
        walker_mut::walk_navigation_link_mut(self, cursor, link);
    }
}
