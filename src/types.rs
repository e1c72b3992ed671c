// src/types.rs
//! Type descriptors understood by the generator.
//!
//! A [`TypeInfo`] is the handle callers pass to the generator. Named types
//! point into a [`TypeCatalog`](crate::catalog::TypeCatalog), which the
//! engine consults to classify the handle into a [`TypeKind`] once per
//! request, so dispatch is a single `match`.

use std::fmt;

use crate::catalog::{ClassInfo, InterfaceInfo};

/// Unique identifier for a module within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub usize);

/// Unique identifier for a symbol within a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub usize);

/// Identity of a declared (named) type: the module it lives in plus its
/// symbol slot. Cycle detection tracks these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId {
    pub module: ModuleId,
    pub symbol: SymbolId,
}

impl TypeId {
    pub fn new(module: ModuleId, symbol: SymbolId) -> Self {
        Self { module, symbol }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.module.0, self.symbol.0)
    }
}

/// Primitive kinds with a fixed generation range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    I32,
    I64,
    F32,
    F64,
    Bool,
    Byte,
    I16,
    Char,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::I32,
        PrimitiveType::I64,
        PrimitiveType::F32,
        PrimitiveType::F64,
        PrimitiveType::Bool,
        PrimitiveType::Byte,
        PrimitiveType::I16,
        PrimitiveType::Char,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::I32 => "i32",
            PrimitiveType::I64 => "i64",
            PrimitiveType::F32 => "f32",
            PrimitiveType::F64 => "f64",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Byte => "byte",
            PrimitiveType::I16 => "i16",
            PrimitiveType::Char => "char",
        }
    }
}

/// A type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeInfo {
    /// A primitive with a fixed range.
    Primitive(PrimitiveType),
    /// A lowercase alphabetic string.
    String,
    /// A sequence type. `None` is the bare form with no element type.
    List(Option<Box<TypeInfo>>),
    /// A class or interface declared in the catalog.
    Named(TypeId),
}

impl TypeInfo {
    /// A sequence of `elem`.
    pub fn list_of(elem: TypeInfo) -> Self {
        TypeInfo::List(Some(Box::new(elem)))
    }

    /// The unparameterized sequence type.
    pub fn bare_list() -> Self {
        TypeInfo::List(None)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeInfo::Primitive(_))
    }

    /// Element type of a parameterized sequence.
    pub fn list_element(&self) -> Option<&TypeInfo> {
        match self {
            TypeInfo::List(Some(elem)) => Some(elem),
            _ => None,
        }
    }

    pub fn named_id(&self) -> Option<TypeId> {
        match self {
            TypeInfo::Named(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<PrimitiveType> for TypeInfo {
    fn from(prim: PrimitiveType) -> Self {
        TypeInfo::Primitive(prim)
    }
}

impl From<TypeId> for TypeInfo {
    fn from(id: TypeId) -> Self {
        TypeInfo::Named(id)
    }
}

/// Classification of a [`TypeInfo`] against a catalog.
#[derive(Debug, Clone, Copy)]
pub enum TypeKind<'a> {
    Primitive(PrimitiveType),
    Str,
    /// Sequence, with its element type when one is declared.
    Container(Option<&'a TypeInfo>),
    Interface(&'a InterfaceInfo),
    Object(&'a ClassInfo),
    /// A named id the catalog does not know.
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_type_as_str() {
        let names: Vec<&str> = PrimitiveType::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            names,
            ["i32", "i64", "f32", "f64", "bool", "byte", "i16", "char"]
        );
    }

    #[test]
    fn list_element_only_for_parameterized() {
        let list = TypeInfo::list_of(TypeInfo::String);
        assert_eq!(list.list_element(), Some(&TypeInfo::String));
        assert_eq!(TypeInfo::bare_list().list_element(), None);
        assert_eq!(TypeInfo::String.list_element(), None);
    }

    #[test]
    fn named_id_round_trips_through_from() {
        let id = TypeId::new(ModuleId(2), SymbolId(7));
        let ty: TypeInfo = id.into();
        assert_eq!(ty.named_id(), Some(id));
        assert_eq!(id.to_string(), "#2:7");
    }
}
