//! Normalizations applied before comparing trees across formats.
//!
//! Each normalizer covers one gap between formats. Further gaps get their
//! own visitor rather than extra branches here.

use tracing::{debug, trace};

use super::cursor::Cursor;
use super::visitor_mut::VisitorMut;
use super::walker_mut;
use crate::annotation::ExpandedNavigationItem;
use crate::format::PayloadFormat;
use crate::payload::*;

/// Clears the full type name of every primitive.
///
/// JSON with minimal metadata leaves most primitive type names implicit, so a
/// tree built with explicit names must drop them before it can be compared
/// with one read from such a payload. Nothing other than
/// `PrimitiveValue::full_type_name` is touched.
#[derive(Debug, Default)]
pub struct PrimitiveTypeNameNormalizer {
    cleared: usize,
}

impl PrimitiveTypeNameNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of type names cleared so far
    pub fn cleared(&self) -> usize {
        self.cleared
    }
}

impl VisitorMut for PrimitiveTypeNameNormalizer {
    fn visit_primitive(&mut self, cursor: &mut Cursor, primitive: &mut PrimitiveValue) {
        if let Some(type_name) = primitive.full_type_name.take() {
            trace!(path = %cursor.path(), %type_name, "cleared primitive type name");
            self.cleared += 1;
        }
    }
}

/// Run the normalizations that `format` calls for. Returns the number of
/// fields changed.
///
/// `Default` resolves to JSON and is normalized the same way; formats that
/// carry no resource payloads need nothing.
pub fn normalize_for_format(element: &mut PayloadElement, format: PayloadFormat) -> usize {
    if !format.is_json() {
        return 0;
    }
    let mut normalizer = PrimitiveTypeNameNormalizer::new();
    normalizer.traverse_mut(element);
    debug!(
        %format,
        root = element.kind_name(),
        cleared = normalizer.cleared(),
        "normalized payload"
    );
    normalizer.cleared()
}

/// Drops out-of-band annotations so that only payload structure is left.
///
/// Reader captures and authoring hints live on one side of a comparison only.
/// The expansion of a navigation link is payload content and is kept.
#[derive(Debug, Default)]
pub struct AnnotationStripper {
    dropped: usize,
}

impl AnnotationStripper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of annotations dropped so far
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl VisitorMut for AnnotationStripper {
    fn visit_primitive(&mut self, _cursor: &mut Cursor, primitive: &mut PrimitiveValue) {
        self.dropped += primitive.annotations.clear();
    }

    fn visit_complex(&mut self, cursor: &mut Cursor, complex: &mut ComplexValue) {
        self.dropped += complex.annotations.clear();
        walker_mut::walk_complex_mut(self, cursor, complex);
    }

    fn visit_collection(&mut self, cursor: &mut Cursor, collection: &mut CollectionValue) {
        self.dropped += collection.annotations.clear();
        walker_mut::walk_collection_mut(self, cursor, collection);
    }

    fn visit_property(&mut self, cursor: &mut Cursor, property: &mut Property) {
        self.dropped += property.annotations.clear();
        walker_mut::walk_property_mut(self, cursor, property);
    }

    fn visit_resource(&mut self, cursor: &mut Cursor, resource: &mut Resource) {
        self.dropped += resource.annotations.clear();
        walker_mut::walk_resource_mut(self, cursor, resource);
    }

    fn visit_resource_set(&mut self, cursor: &mut Cursor, resource_set: &mut ResourceSet) {
        self.dropped += resource_set.annotations.clear();
        walker_mut::walk_resource_set_mut(self, cursor, resource_set);
    }

    fn visit_navigation_link(&mut self, cursor: &mut Cursor, link: &mut NavigationLink) {
        self.dropped += link.annotations.retain_only::<ExpandedNavigationItem>();
        walker_mut::walk_navigation_link_mut(self, cursor, link);
    }
}

/// Strip every annotation except link expansions. Returns the number dropped.
pub fn strip_annotations(element: &mut PayloadElement) -> usize {
    let mut stripper = AnnotationStripper::new();
    stripper.traverse_mut(element);
    trace!(root = element.kind_name(), dropped = stripper.dropped(), "stripped annotations");
    stripper.dropped()
}
