pub mod cursor;
pub mod normalize;
pub mod visitor;
pub mod visitor_mut;
pub mod walker;
pub mod walker_mut;

pub use cursor::Cursor;
pub use normalize::{
    AnnotationStripper, PrimitiveTypeNameNormalizer, normalize_for_format, strip_annotations,
};
pub use visitor::Visitor;
pub use visitor_mut::VisitorMut;
pub use walker::*;
pub use walker_mut::*;
