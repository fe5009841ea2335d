//! Type-keyed annotation slots.

use std::any::{Any, TypeId};
use std::fmt::{self, Debug};

use indexmap::IndexMap;

/// A kind of out-of-band metadata that can be attached to a payload node.
///
/// The implementing type is the kind token: a store keeps at most one value
/// per implementing type.
///
/// # Example
///
/// ```
/// use payload_om::{Annotated, Annotation, PrimitiveValue};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct DebugNote(String);
///
/// impl Annotation for DebugNote {
///     fn label(&self) -> &'static str { "debug_note" }
/// }
///
/// let mut value = PrimitiveValue::new("Alice");
/// value.set_annotation(DebugNote("from fixture".into()));
/// assert_eq!(value.get_annotation::<DebugNote>().map(|n| n.0.as_str()), Some("from fixture"));
/// ```
pub trait Annotation: Debug + Clone + PartialEq + Send + Sync + 'static {
    /// Short label used when rendering a store.
    fn label(&self) -> &'static str;
}

/// Object-safe wrapper trait for type-erased annotation storage.
///
/// Implemented automatically for every [`Annotation`].
pub trait AnnotationAny: Debug + Send + Sync {
    fn label(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn clone_box(&self) -> Box<dyn AnnotationAny>;

    /// Equality across the erased boundary; values of different kinds are never equal.
    fn eq_any(&self, other: &dyn AnnotationAny) -> bool;
}

impl<A: Annotation> AnnotationAny for A {
    fn label(&self) -> &'static str {
        Annotation::label(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn clone_box(&self) -> Box<dyn AnnotationAny> {
        Box::new(self.clone())
    }

    fn eq_any(&self, other: &dyn AnnotationAny) -> bool {
        other
            .as_any()
            .downcast_ref::<A>()
            .is_some_and(|other| other == self)
    }
}

/// Per-node annotation store: zero or one instance of each annotation kind.
///
/// Slots keep insertion order so that debug output is stable between runs.
#[derive(Default)]
pub struct Annotations {
    slots: IndexMap<TypeId, Box<dyn AnnotationAny>>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the annotation of kind `A`, if one is attached.
    pub fn get<A: Annotation>(&self) -> Option<&A> {
        self.slots
            .get(&TypeId::of::<A>())
            .and_then(|slot| slot.as_ref().as_any().downcast_ref::<A>())
    }

    /// Get a mutable reference to the annotation of kind `A`, if one is attached.
    pub fn get_mut<A: Annotation>(&mut self) -> Option<&mut A> {
        self.slots
            .get_mut(&TypeId::of::<A>())
            .and_then(|slot| slot.as_mut().as_any_mut().downcast_mut::<A>())
    }

    /// Attach `annotation`, replacing and returning any previous value of the same kind.
    pub fn set<A: Annotation>(&mut self, annotation: A) -> Option<A> {
        self.slots
            .insert(TypeId::of::<A>(), Box::new(annotation))
            .and_then(downcast_owned::<A>)
    }

    /// Detach and return the annotation of kind `A`.
    pub fn remove<A: Annotation>(&mut self) -> Option<A> {
        self.slots
            .shift_remove(&TypeId::of::<A>())
            .and_then(downcast_owned::<A>)
    }

    /// Detach every annotation except the one of kind `A`. Returns how many were dropped.
    pub fn retain_only<A: Annotation>(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|kind, _| *kind == TypeId::of::<A>());
        before - self.slots.len()
    }

    /// Detach every annotation. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.slots.len();
        self.slots.clear();
        dropped
    }

    pub fn contains<A: Annotation>(&self) -> bool {
        self.slots.contains_key(&TypeId::of::<A>())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Labels of the attached annotations in attachment order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.values().map(|slot| slot.label())
    }
}

fn downcast_owned<A: Annotation>(slot: Box<dyn AnnotationAny>) -> Option<A> {
    slot.into_any().downcast::<A>().ok().map(|boxed| *boxed)
}

impl Clone for Annotations {
    fn clone(&self) -> Self {
        Self {
            slots: self
                .slots
                .iter()
                .map(|(kind, slot)| (*kind, slot.clone_box()))
                .collect(),
        }
    }
}

impl PartialEq for Annotations {
    fn eq(&self, other: &Self) -> bool {
        self.slots.len() == other.slots.len()
            && self.slots.iter().all(|(kind, slot)| {
                other
                    .slots
                    .get(kind)
                    .is_some_and(|theirs| slot.eq_any(theirs.as_ref()))
            })
    }
}

impl Debug for Annotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.values().map(|slot| (slot.label(), slot)))
            .finish()
    }
}

/// Access to a node's annotation store.
///
/// The provided methods are the node-level annotation API. None of them fail:
/// asking for a kind that is not attached yields `None`.
pub trait Annotated {
    fn annotations(&self) -> &Annotations;

    fn annotations_mut(&mut self) -> &mut Annotations;

    fn get_annotation<A: Annotation>(&self) -> Option<&A> {
        self.annotations().get::<A>()
    }

    fn get_annotation_mut<A: Annotation>(&mut self) -> Option<&mut A> {
        self.annotations_mut().get_mut::<A>()
    }

    /// Attach an annotation, replacing any previous value of the same kind (last write wins).
    fn set_annotation<A: Annotation>(&mut self, annotation: A) -> Option<A> {
        self.annotations_mut().set(annotation)
    }

    fn remove_annotation<A: Annotation>(&mut self) -> Option<A> {
        self.annotations_mut().remove::<A>()
    }

    fn has_annotation<A: Annotation>(&self) -> bool {
        self.annotations().contains::<A>()
    }
}
