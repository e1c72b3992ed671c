// src/sample.rs
//! A small fixture family in module `fixtures`, used by the `typefill`
//! binary and the integration tests.
//!
//! | type             | shape                                             |
//! |------------------|---------------------------------------------------|
//! | `Example`        | a handful of primitive and string fields          |
//! | `Product`        | `(name)` and `(name, price)` constructors          |
//! | `Cart`           | `List<Product>`                                   |
//! | `Shape`          | interface; `Triangle` and `Rectangle` implement it |
//! | `BinaryTreeNode` | `data` plus two child nodes                       |
//! | `Person`         | holds an `Address`, which holds a `Person`        |
//! | `Unmarked`       | not marked generatable                            |

use crate::catalog::{Args, ClassInfo, Constructor, InterfaceInfo, ParamInfo, TypeCatalog};
use crate::config::DEFAULT_SCAN_MODULE;
use crate::errors::ConstructError;
use crate::types::{PrimitiveType, TypeId, TypeInfo};
use crate::value::{Object, Value};

/// Price recorded by the one-argument `Product` constructor.
pub const SENTINEL_PRICE: f64 = f64::MIN_POSITIVE;

/// Ids of the sample types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Types {
    pub example: TypeId,
    pub product: TypeId,
    pub cart: TypeId,
    pub shape: TypeId,
    pub triangle: TypeId,
    pub rectangle: TypeId,
    pub tree_node: TypeId,
    pub person: TypeId,
    pub address: TypeId,
    pub unmarked: TypeId,
}

fn param(name: &str, ty: impl Into<TypeInfo>) -> ParamInfo {
    ParamInfo::new(name, ty)
}

fn f64_param(name: &str) -> ParamInfo {
    param(name, PrimitiveType::F64)
}

/// Build the sample catalog.
pub fn catalog() -> (TypeCatalog, Types) {
    let mut catalog = TypeCatalog::new();
    let m = catalog.add_module(DEFAULT_SCAN_MODULE);

    let example = catalog.add_class(
        m,
        "Example",
        ClassInfo::new().generatable().constructor(Constructor::record(vec![
            param("id", PrimitiveType::I32),
            param("label", TypeInfo::String),
            param("ratio", PrimitiveType::F64),
            param("active", PrimitiveType::Bool),
            param("initial", PrimitiveType::Char),
        ])),
    );

    let product = catalog.add_class(
        m,
        "Product",
        ClassInfo::new()
            .generatable()
            .constructor(Constructor::new(
                vec![param("name", TypeInfo::String)],
                |mut args| {
                    let name = args.take(0);
                    Ok(Value::Object(
                        args.object()
                            .with("name", name)
                            .with("price", Some(Value::F64(SENTINEL_PRICE))),
                    ))
                },
            ))
            .constructor(Constructor::record(vec![
                param("name", TypeInfo::String),
                f64_param("price"),
            ])),
    );

    let cart = catalog.add_class(
        m,
        "Cart",
        ClassInfo::new()
            .generatable()
            .constructor(Constructor::record(vec![param(
                "items",
                TypeInfo::list_of(product.into()),
            )])),
    );

    let shape = catalog.add_interface(m, "Shape", InterfaceInfo::default());
    let triangle = catalog.add_class(
        m,
        "Triangle",
        ClassInfo::new()
            .generatable()
            .implements(shape)
            .constructor(Constructor::new(
                vec![f64_param("a"), f64_param("b"), f64_param("c")],
                build_triangle,
            )),
    );
    let rectangle = catalog.add_class(
        m,
        "Rectangle",
        ClassInfo::new()
            .generatable()
            .implements(shape)
            .constructor(Constructor::record(vec![
                f64_param("width"),
                f64_param("height"),
            ])),
    );

    let tree_node = catalog.add_class(m, "BinaryTreeNode", ClassInfo::new().generatable());
    if let Some(node) = catalog.class_mut(tree_node) {
        node.constructors.push(Constructor::record(vec![
            param("data", PrimitiveType::I32),
            param("left", tree_node),
            param("right", tree_node),
        ]));
    }

    let person = catalog.add_class(m, "Person", ClassInfo::new().generatable());
    let address = catalog.add_class(
        m,
        "Address",
        ClassInfo::new().generatable().constructor(Constructor::record(vec![
            param("street", TypeInfo::String),
            param("owner", person),
        ])),
    );
    if let Some(info) = catalog.class_mut(person) {
        info.constructors.push(Constructor::record(vec![
            param("name", TypeInfo::String),
            param("address", address),
        ]));
    }

    let unmarked = catalog.add_class(
        m,
        "Unmarked",
        ClassInfo::new().constructor(Constructor::record(vec![param(
            "value",
            PrimitiveType::I32,
        )])),
    );

    let types = Types {
        example,
        product,
        cart,
        shape,
        triangle,
        rectangle,
        tree_node,
        person,
        address,
        unmarked,
    };
    (catalog, types)
}

fn build_triangle(args: Args) -> Result<Value, ConstructError> {
    let (a, b, c) = (args.f64(0)?, args.f64(1)?, args.f64(2)?);
    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        return Err(ConstructError::rejected(format!(
            "triangle sides must be positive, got {a}, {b}, {c}"
        )));
    }
    Ok(Value::Object(
        args.object()
            .with("a", Some(Value::F64(a)))
            .with("b", Some(Value::F64(b)))
            .with("c", Some(Value::F64(c))),
    ))
}

fn sides(shape: &Object, names: &[&str]) -> Option<Vec<f64>> {
    names
        .iter()
        .map(|n| shape.field(n).and_then(Value::as_f64))
        .collect()
}

/// Area of a generated `Triangle` or `Rectangle`.
///
/// Triangle sides are drawn independently, so they need not close; such a
/// triangle has area 0.
pub fn shape_area(shape: &Object) -> Option<f64> {
    match shape.type_name.as_str() {
        "Triangle" => {
            let s = sides(shape, &["a", "b", "c"])?;
            let half = (s[0] + s[1] + s[2]) / 2.0;
            let product = half * (half - s[0]) * (half - s[1]) * (half - s[2]);
            Some(product.max(0.0).sqrt())
        }
        "Rectangle" => {
            let s = sides(shape, &["width", "height"])?;
            Some(s[0] * s[1])
        }
        _ => None,
    }
}

/// Perimeter of a generated `Triangle` or `Rectangle`.
pub fn shape_perimeter(shape: &Object) -> Option<f64> {
    match shape.type_name.as_str() {
        "Triangle" => sides(shape, &["a", "b", "c"]).map(|s| s.iter().sum()),
        "Rectangle" => sides(shape, &["width", "height"]).map(|s| 2.0 * (s[0] + s[1])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeKind;

    fn shape(types: &Types, name: &str, fields: &[(&str, f64)]) -> Object {
        let ty = if name == "Triangle" { types.triangle } else { types.rectangle };
        fields.iter().fold(Object::new(ty, name), |obj, (n, v)| {
            obj.with(*n, Some(Value::F64(*v)))
        })
    }

    #[test]
    fn catalog_declares_every_type() {
        let (catalog, types) = catalog();
        assert_eq!(catalog.find("Product"), Some(types.product));
        assert_eq!(catalog.find("fixtures.Shape"), Some(types.shape));
        assert!(matches!(
            catalog.classify(&types.shape.into()),
            TypeKind::Interface(_)
        ));
        assert!(!catalog.class(types.unmarked).unwrap().generatable);
        assert_eq!(catalog.class(types.product).unwrap().constructors.len(), 2);
        assert_eq!(catalog.class(types.person).unwrap().constructors.len(), 1);
    }

    #[test]
    fn triangle_rejects_non_positive_sides() {
        let (catalog, types) = catalog();
        let class = catalog.class(types.triangle).unwrap();
        let args = Args::new(
            types.triangle,
            "Triangle",
            vec![Some(Value::F64(3.0)), Some(Value::F64(0.0)), Some(Value::F64(4.0))],
        );
        let err = class.constructors[0].invoke(args).unwrap_err();
        assert!(matches!(err, ConstructError::Rejected { .. }));
    }

    #[test]
    fn triangle_reports_missing_side() {
        let (catalog, types) = catalog();
        let class = catalog.class(types.triangle).unwrap();
        let args = Args::new(types.triangle, "Triangle", vec![Some(Value::F64(3.0)), None, None]);
        assert_eq!(
            class.constructors[0].invoke(args).unwrap_err(),
            ConstructError::MissingArgument { index: 1 }
        );
    }

    #[test]
    fn right_triangle_geometry() {
        let (_, types) = catalog();
        let t = shape(&types, "Triangle", &[("a", 3.0), ("b", 4.0), ("c", 5.0)]);
        assert!((shape_area(&t).unwrap() - 6.0).abs() < 1e-9);
        assert_eq!(shape_perimeter(&t), Some(12.0));
    }

    #[test]
    fn degenerate_triangle_has_zero_area() {
        let (_, types) = catalog();
        let t = shape(&types, "Triangle", &[("a", 1.0), ("b", 1.0), ("c", 10.0)]);
        assert_eq!(shape_area(&t), Some(0.0));
    }

    #[test]
    fn rectangle_geometry() {
        let (_, types) = catalog();
        let r = shape(&types, "Rectangle", &[("width", 2.0), ("height", 3.5)]);
        assert_eq!(shape_area(&r), Some(7.0));
        assert_eq!(shape_perimeter(&r), Some(11.0));
    }

    #[test]
    fn non_shapes_have_no_geometry() {
        let (_, types) = catalog();
        let p = Object::new(types.person, "Person");
        assert_eq!(shape_area(&p), None);
        assert_eq!(shape_perimeter(&p), None);
    }
}
