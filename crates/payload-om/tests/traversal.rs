//! Visitor traversal and normalization over a realistic payload tree.

use payload_om::traversal::{
    Cursor, PrimitiveTypeNameNormalizer, Visitor, VisitorMut, normalize_for_format, walker,
};
use payload_om::{
    Annotated, CollectionValue, ComplexValue, ExpandedNavigationItem, FeedEntryCapture,
    NavigationLink, PayloadElement, PayloadFormat, PrimitiveData, PrimitiveValue, Property,
    Resource, ResourceSet,
};

/// Records `(variant, path)` for every node it meets.
#[derive(Default)]
struct TraceVisitor {
    trace: Vec<(&'static str, String)>,
}

impl TraceVisitor {
    fn record(&mut self, variant: &'static str, cursor: &Cursor) {
        self.trace.push((variant, cursor.path()));
    }
}

impl Visitor for TraceVisitor {
    fn visit_primitive(&mut self, cursor: &mut Cursor, _primitive: &PrimitiveValue) {
        self.record("Primitive", cursor);
    }

    fn visit_complex(&mut self, cursor: &mut Cursor, complex: &ComplexValue) {
        self.record("Complex", cursor);
        walker::walk_complex(self, cursor, complex);
    }

    fn visit_collection(&mut self, cursor: &mut Cursor, collection: &CollectionValue) {
        self.record("Collection", cursor);
        walker::walk_collection(self, cursor, collection);
    }

    fn visit_property(&mut self, cursor: &mut Cursor, property: &Property) {
        self.record("Property", cursor);
        walker::walk_property(self, cursor, property);
    }

    fn visit_resource(&mut self, cursor: &mut Cursor, resource: &Resource) {
        self.record("Resource", cursor);
        walker::walk_resource(self, cursor, resource);
    }

    fn visit_resource_set(&mut self, cursor: &mut Cursor, resource_set: &ResourceSet) {
        self.record("ResourceSet", cursor);
        walker::walk_resource_set(self, cursor, resource_set);
    }

    fn visit_navigation_link(&mut self, cursor: &mut Cursor, link: &NavigationLink) {
        self.record("NavigationLink", cursor);
        walker::walk_navigation_link(self, cursor, link);
    }
}

fn trace_of(element: &PayloadElement) -> Vec<(&'static str, String)> {
    let mut visitor = TraceVisitor::default();
    visitor.traverse(element);
    visitor.trace
}

fn primitive(value: impl Into<PrimitiveData>, type_name: &str, typed: bool) -> PrimitiveValue {
    if typed {
        PrimitiveValue::typed(value, type_name)
    } else {
        PrimitiveValue::new(value)
    }
}

/// Two people; the first has a complex, a collection, an expanded and a
/// deferred link. `typed` controls whether primitives carry type names.
fn people(typed: bool) -> PayloadElement {
    let friend = Resource::typed("NS.Person")
        .with_property(Property::primitive("Name", primitive("Carol", "Edm.String", typed)));

    let alice = Resource::typed("NS.Person")
        .with_id("People(1)")
        .with_property(Property::primitive("Name", primitive("Alice", "Edm.String", typed)))
        .with_property(Property::primitive("Age", primitive(30, "Edm.Int32", typed)))
        .with_property(Property::complex(
            "Address",
            ComplexValue::typed("NS.Address")
                .with_property(Property::primitive("City", primitive("Oslo", "Edm.String", typed))),
        ))
        .with_property(Property::collection(
            "Tags",
            CollectionValue::typed("Collection(Edm.String)")
                .with_item(primitive("a", "Edm.String", typed))
                .with_item(primitive("b", "Edm.String", typed)),
        ))
        .with_navigation_link(
            NavigationLink::new("Friends", true)
                .expanded(ExpandedNavigationItem::resource_set(
                    ResourceSet::new().with_resource(friend),
                )),
        )
        .with_navigation_link(NavigationLink::new("Manager", false).with_url("People(1)/Manager"));

    let bob = Resource::typed("NS.Person")
        .with_id("People(2)")
        .with_property(Property::primitive("Name", primitive("Bob", "Edm.String", typed)));

    let mut set = ResourceSet::new().with_resource(alice).with_resource(bob);
    set.set_annotation(FeedEntryCapture::Feed {
        count: Some(2),
        next_link: None,
        delta_link: None,
    });
    set.into()
}

#[test]
fn test_default_traversal_order() {
    let expected: Vec<(&str, &str)> = vec![
        ("ResourceSet", ""),
        ("Resource", "[0]"),
        ("Property", "[0]/Name"),
        ("Primitive", "[0]/Name"),
        ("Property", "[0]/Age"),
        ("Primitive", "[0]/Age"),
        ("Property", "[0]/Address"),
        ("Complex", "[0]/Address"),
        ("Property", "[0]/Address/City"),
        ("Primitive", "[0]/Address/City"),
        ("Property", "[0]/Tags"),
        ("Collection", "[0]/Tags"),
        ("Primitive", "[0]/Tags/[0]"),
        ("Primitive", "[0]/Tags/[1]"),
        ("NavigationLink", "[0]/Friends"),
        ("ResourceSet", "[0]/Friends"),
        ("Resource", "[0]/Friends/[0]"),
        ("Property", "[0]/Friends/[0]/Name"),
        ("Primitive", "[0]/Friends/[0]/Name"),
        ("NavigationLink", "[0]/Manager"),
        ("Resource", "[1]"),
        ("Property", "[1]/Name"),
        ("Primitive", "[1]/Name"),
    ];

    let trace = trace_of(&people(true));
    let trace: Vec<(&str, &str)> = trace.iter().map(|(k, p)| (*k, p.as_str())).collect();
    assert_eq!(trace, expected);
}

#[test]
fn test_traversal_is_reproducible() {
    let tree = people(true);
    assert_eq!(trace_of(&tree), trace_of(&tree));
}

#[test]
fn test_deferred_link_has_no_expansion_children() {
    let link = NavigationLink::new("Manager", false);
    assert!(link.get_annotation::<ExpandedNavigationItem>().is_none());

    let trace = trace_of(&PayloadElement::NavigationLink(link));
    assert_eq!(trace, vec![("NavigationLink", String::new())]);
}

#[test]
fn test_null_expansion_has_no_children() {
    let link = NavigationLink::new("Manager", false).expanded(ExpandedNavigationItem::null());
    assert_eq!(trace_of(&link.into()).len(), 1);
}

#[test]
fn test_override_can_skip_recursion() {
    /// Counts resources but never looks inside them.
    #[derive(Default)]
    struct ShallowCounter {
        resources: usize,
        primitives: usize,
    }

    impl Visitor for ShallowCounter {
        fn visit_resource(&mut self, _cursor: &mut Cursor, _resource: &Resource) {
            self.resources += 1;
        }

        fn visit_primitive(&mut self, _cursor: &mut Cursor, _primitive: &PrimitiveValue) {
            self.primitives += 1;
        }
    }

    let mut counter = ShallowCounter::default();
    counter.traverse(&people(true));
    assert_eq!(counter.resources, 2);
    assert_eq!(counter.primitives, 0);
}

#[test]
fn test_scenario_name_and_age() {
    let mut element: PayloadElement = Resource::new()
        .with_property(Property::primitive("Name", PrimitiveValue::typed("Alice", "Edm.String")))
        .with_property(Property::primitive("Age", PrimitiveValue::typed(30, "Edm.Int32")))
        .into();

    let mut normalizer = PrimitiveTypeNameNormalizer::new();
    normalizer.traverse_mut(&mut element);
    assert_eq!(normalizer.cleared(), 2);

    let PayloadElement::Resource(resource) = &element else {
        panic!("Expected resource root");
    };
    let expected = [
        ("Name", PrimitiveData::from("Alice")),
        ("Age", PrimitiveData::from(30)),
    ];
    for (name, value) in expected {
        let property = resource.property(name).expect("property present");
        let payload_om::PropertyValue::Primitive(p) = &property.value else {
            panic!("Expected primitive {name}");
        };
        assert_eq!(p.full_type_name, None);
        assert_eq!(p.value, value);
    }
}

#[test]
fn test_normalizer_only_touches_primitive_type_names() {
    let mut actual = people(true);
    normalize_for_format(&mut actual, PayloadFormat::Json);

    // Resource, complex and collection type names, ids, links and
    // annotations survive; only primitive type names are gone.
    assert_eq!(actual, people(false));
}

#[test]
fn test_normalizer_is_idempotent() {
    let mut once = people(true);
    normalize_for_format(&mut once, PayloadFormat::Default);

    let mut twice = once.clone();
    let cleared = normalize_for_format(&mut twice, PayloadFormat::Default);

    assert_eq!(cleared, 0);
    assert_eq!(twice, once);
}

#[test]
fn test_normalizer_reaches_into_expansions() {
    let mut element = people(true);
    let cleared = normalize_for_format(&mut element, PayloadFormat::Json);
    // Name, Age, City, two tags, the expanded friend's name and Bob's name
    assert_eq!(cleared, 7);
}

#[test]
fn test_baseline_is_untouched_when_normalizing_a_copy() {
    let baseline = people(true);
    let mut working = baseline.clone();
    normalize_for_format(&mut working, PayloadFormat::Json);

    assert_ne!(working, baseline);
    assert_eq!(baseline, people(true));
}

#[test]
fn test_readers_on_separate_copies_agree() {
    let tree = people(true);
    let copies = [tree.clone(), tree.clone(), tree.clone()];

    let traces: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = copies
            .iter()
            .map(|copy| scope.spawn(move || trace_of(copy)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("reader thread panicked"))
            .collect()
    });

    assert!(traces.iter().all(|trace| *trace == trace_of(&tree)));
}
