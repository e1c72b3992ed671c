// tests/generation.rs
//! End-to-end generation over the sample catalog.

use std::collections::HashSet;
use std::sync::Arc;

use typefill::sample::{self, SENTINEL_PRICE, Types, shape_area, shape_perimeter};
use typefill::{
    ClassInfo, Constructor, GenerateError, Generator, GeneratorConfig, ImplementationIndex,
    InterfaceInfo, Object, ParamInfo, PrimitiveType, TypeCatalog, TypeInfo, Value,
};

fn setup() -> (Generator, Types) {
    let (catalog, types) = sample::catalog();
    let generator = Generator::from_config(Arc::new(catalog), &GeneratorConfig::default());
    (generator, types)
}

fn object(value: Result<Option<Value>, GenerateError>) -> Object {
    match value.expect("generation should not fail") {
        Some(Value::Object(obj)) => obj,
        other => panic!("expected an object, got {other:?}"),
    }
}

#[test]
fn every_marked_sample_type_generates() {
    let (mut g, t) = setup();
    for id in [
        t.example,
        t.product,
        t.cart,
        t.shape,
        t.triangle,
        t.rectangle,
        t.tree_node,
        t.person,
        t.address,
    ] {
        let name = g.catalog().name_of(id).to_string();
        assert!(g.generate_type(id).unwrap().is_some(), "{name} should generate");
    }
}

#[test]
fn unmarked_sample_type_is_empty() {
    let (mut g, t) = setup();
    for _ in 0..10 {
        assert_eq!(g.generate_type(t.unmarked).unwrap(), None);
    }
}

#[test]
fn example_fields_are_populated() {
    let (mut g, t) = setup();
    for _ in 0..10 {
        let example = object(g.generate_type(t.example));
        for (name, value) in example.fields() {
            assert!(value.is_some(), "Example.{name} should be present");
        }
        let id = example.field("id").and_then(Value::as_i32).unwrap();
        assert!((0..1000).contains(&id));
    }
}

#[test]
fn product_uses_two_argument_constructor() {
    let (mut g, t) = setup();
    for _ in 0..10 {
        let product = object(g.generate_type(t.product));
        assert!(product.field("name").and_then(Value::as_str).is_some());
        let price = product.field("price").and_then(Value::as_f64).unwrap();
        assert_ne!(price, SENTINEL_PRICE);
    }
}

#[test]
fn shape_resolves_to_both_implementations() {
    let (mut g, t) = setup();
    let mut seen = HashSet::new();
    for _ in 0..50 {
        let shape = object(g.generate_type(t.shape));
        assert!(shape.ty == t.triangle || shape.ty == t.rectangle);
        assert!(shape_area(&shape).unwrap() >= 0.0);
        assert!(shape_perimeter(&shape).unwrap() >= 0.0);
        seen.insert(shape.ty);
    }
    assert_eq!(seen.len(), 2, "both Triangle and Rectangle should appear");
}

#[test]
fn cart_lists_vary_in_length() {
    let (mut g, t) = setup();
    let (mut empty, mut non_empty) = (false, false);
    for _ in 0..50 {
        let cart = object(g.generate_type(t.cart));
        let items = cart.field("items").and_then(Value::as_list).unwrap();
        assert!(items.len() <= 5);
        for item in items {
            let product = item.as_object().unwrap();
            assert_eq!(product.ty, t.product);
            assert!(product.field("name").is_some());
        }
        empty |= items.is_empty();
        non_empty |= !items.is_empty();
    }
    assert!(empty, "an empty cart should appear in 50 draws");
    assert!(non_empty, "a non-empty cart should appear in 50 draws");
}

#[test]
fn person_address_cycle_is_broken() {
    let (mut g, t) = setup();
    for _ in 0..10 {
        let person = object(g.generate_type(t.person));
        assert!(person.field("name").is_some());
        let address = person.object("address").expect("Address should generate");
        assert!(address.field("street").is_some());
        assert!(address.is_absent("owner"));

        let address = object(g.generate_type(t.address));
        let owner = address.object("owner").expect("Person should generate");
        assert!(owner.is_absent("address"));
    }
}

#[test]
fn binary_tree_terminates_with_data() {
    let (mut g, t) = setup();
    for _ in 0..10 {
        let node = object(g.generate_type(t.tree_node));
        assert!(node.field("data").and_then(Value::as_i32).is_some());
        assert!(node.is_absent("left"));
        assert!(node.is_absent("right"));
    }
}

#[test]
fn strings_are_random() {
    let (mut g, _) = setup();
    let strings: HashSet<String> = (0..20)
        .map(|_| {
            let value = g.generate(&TypeInfo::String).unwrap().unwrap();
            value.as_str().unwrap().to_string()
        })
        .collect();
    assert!(strings.len() > 1);
}

#[test]
fn primitive_descriptors_generate_matching_values() {
    let (mut g, _) = setup();
    let int = g.generate(&PrimitiveType::I32.into()).unwrap();
    assert!(matches!(int, Some(Value::I32(_))));
    let double = g.generate(&PrimitiveType::F64.into()).unwrap();
    assert!(matches!(double, Some(Value::F64(v)) if (0.0..1000.0).contains(&v)));
}

#[test]
fn shallow_ceiling_surfaces_missing_argument() {
    // Triangle's sides sit past a ceiling of 0, so its constructor sees
    // absent arguments and refuses.
    let (catalog, t) = sample::catalog();
    let config = GeneratorConfig::default().with_max_depth(0);
    let mut g = Generator::from_config(Arc::new(catalog), &config);
    let err = g.generate_type(t.triangle).unwrap_err();
    assert_eq!(err.type_name(), "Triangle");

    let rect = object(g.generate_type(t.rectangle));
    assert!(rect.is_absent("width"));
}

#[test]
fn generators_share_index_across_threads() {
    let (catalog, types) = sample::catalog();
    let index = Arc::new(ImplementationIndex::new(Arc::new(catalog), "fixtures"));

    let handles: Vec<_> = (0..4)
        .map(|seed| {
            let index = Arc::clone(&index);
            std::thread::spawn(move || {
                let config = GeneratorConfig::default().with_seed(seed);
                let mut g = Generator::with_config(index, &config);
                (0..20)
                    .map(|_| g.generate_type(types.shape).map(|v| v.is_some()))
                    .collect::<Result<Vec<bool>, _>>()
            })
        })
        .collect();

    for handle in handles {
        let results = handle.join().unwrap().unwrap();
        assert!(results.into_iter().all(|generated| generated));
    }
    assert!(index.is_built());
    assert_eq!(index.implementations(types.shape).len(), 2);
}

#[test]
fn scan_covers_dotted_submodules() {
    let mut catalog = TypeCatalog::new();
    let root = catalog.add_module("fixtures");
    let nested = catalog.add_module("fixtures.shapes");
    let outside = catalog.add_module("other");
    let shape = catalog.add_interface(root, "Shape", InterfaceInfo::default());
    let marked = |ctor: Constructor| {
        ClassInfo::new()
            .generatable()
            .implements(shape)
            .constructor(ctor)
    };
    let circle = catalog.add_class(
        nested,
        "Circle",
        marked(Constructor::record(vec![ParamInfo::new("r", PrimitiveType::F64)])),
    );
    catalog.add_class(outside, "Blob", marked(Constructor::record(Vec::new())));

    let mut g = Generator::from_config(Arc::new(catalog), &GeneratorConfig::default());
    for _ in 0..20 {
        assert_eq!(object(g.generate_type(shape)).ty, circle);
    }
}
