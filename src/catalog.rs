// src/catalog.rs
//! Type catalog: the declarations the generator can introspect.
//!
//! Callers describe their type family once (modules holding classes and
//! interfaces, each class with its constructors) and hand the catalog to a
//! [`Generator`](crate::generator::Generator). The catalog is immutable from
//! the generator's point of view.
//!
//! Forward references (A holds B, B holds A) are written by declaring both
//! symbols first and attaching constructors afterwards through
//! [`TypeCatalog::class_mut`].

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::errors::ConstructError;
use crate::types::{ModuleId, SymbolId, TypeId, TypeInfo, TypeKind};
use crate::value::{Object, Value};

/// Constructor body. Receives the generated arguments in declared order.
pub type ConstructFn = Arc<dyn Fn(Args) -> Result<Value, ConstructError> + Send + Sync>;

/// A constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamInfo {
    pub name: String,
    pub param_type: TypeInfo,
}

impl ParamInfo {
    pub fn new(name: impl Into<String>, param_type: impl Into<TypeInfo>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
        }
    }
}

/// A constructor signature plus the body that builds the instance.
#[derive(Clone)]
pub struct Constructor {
    pub params: Vec<ParamInfo>,
    body: ConstructFn,
}

impl Constructor {
    pub fn new<F>(params: Vec<ParamInfo>, body: F) -> Self
    where
        F: Fn(Args) -> Result<Value, ConstructError> + Send + Sync + 'static,
    {
        Self {
            params,
            body: Arc::new(body),
        }
    }

    /// Constructor that stores every parameter as a field of the same name.
    pub fn record(params: Vec<ParamInfo>) -> Self {
        let names: Vec<String> = params.iter().map(|p| p.name.clone()).collect();
        Self::new(params, move |mut args| {
            let mut obj = args.object();
            for (i, name) in names.iter().enumerate() {
                obj.set(name.clone(), args.take(i));
            }
            Ok(Value::Object(obj))
        })
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn invoke(&self, args: Args) -> Result<Value, ConstructError> {
        (self.body)(args)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Arguments handed to a constructor body.
///
/// Each slot is `None` when generation for that parameter came back empty
/// (cycle, depth cut-off, ineligible type).
#[derive(Debug, Clone)]
pub struct Args {
    ty: TypeId,
    type_name: String,
    values: Vec<Option<Value>>,
}

impl Args {
    pub fn new(ty: TypeId, type_name: impl Into<String>, values: Vec<Option<Value>>) -> Self {
        Self {
            ty,
            type_name: type_name.into(),
            values,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.ty
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// An empty instance of the type under construction.
    pub fn object(&self) -> Object {
        Object::new(self.ty, self.type_name.clone())
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index).and_then(Option::as_ref)
    }

    /// Move the argument out, leaving its slot empty.
    pub fn take(&mut self, index: usize) -> Option<Value> {
        self.values.get_mut(index).and_then(Option::take)
    }

    pub fn require(&self, index: usize) -> Result<&Value, ConstructError> {
        self.get(index)
            .ok_or(ConstructError::MissingArgument { index })
    }

    pub fn string(&self, index: usize) -> Result<String, ConstructError> {
        match self.require(index)? {
            Value::Str(s) => Ok(s.clone()),
            other => Err(mismatch(index, "string", other)),
        }
    }

    pub fn i32(&self, index: usize) -> Result<i32, ConstructError> {
        match self.require(index)? {
            Value::I32(v) => Ok(*v),
            other => Err(mismatch(index, "i32", other)),
        }
    }

    pub fn f64(&self, index: usize) -> Result<f64, ConstructError> {
        match self.require(index)? {
            Value::F64(v) => Ok(*v),
            other => Err(mismatch(index, "f64", other)),
        }
    }

    pub fn into_values(self) -> Vec<Option<Value>> {
        self.values
    }
}

fn mismatch(index: usize, expected: &'static str, found: &Value) -> ConstructError {
    ConstructError::TypeMismatch {
        index,
        expected,
        found: found.kind_name(),
    }
}

/// A concrete class declaration.
#[derive(Debug, Clone, Default)]
pub struct ClassInfo {
    /// The generation marker. Unmarked classes always yield empty.
    pub generatable: bool,
    /// Interfaces this class declares directly.
    pub implements: Vec<TypeId>,
    pub constructors: Vec<Constructor>,
}

impl ClassInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generatable(mut self) -> Self {
        self.generatable = true;
        self
    }

    pub fn implements(mut self, iface: TypeId) -> Self {
        self.implements.push(iface);
        self
    }

    pub fn constructor(mut self, ctor: Constructor) -> Self {
        self.constructors.push(ctor);
        self
    }
}

/// An interface declaration.
#[derive(Debug, Clone, Default)]
pub struct InterfaceInfo {
    /// Parent interfaces. Informational; resolution only follows direct
    /// `implements` declarations.
    pub extends: Vec<TypeId>,
}

#[derive(Debug, Clone)]
pub enum TypeDef {
    Class(ClassInfo),
    Interface(InterfaceInfo),
}

/// A named declaration in a module.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub id: TypeId,
    pub name: String,
    pub def: TypeDef,
}

/// Declarations within a single module.
#[derive(Debug, Clone)]
pub struct ModuleTypes {
    pub id: ModuleId,
    /// Dotted path, e.g. `fixtures.shapes`.
    pub name: String,
    symbols: Vec<Symbol>,
}

impl ModuleTypes {
    pub fn new(id: ModuleId, name: String) -> Self {
        Self {
            id,
            name,
            symbols: Vec::new(),
        }
    }

    pub fn add_symbol(&mut self, name: String, def: TypeDef) -> TypeId {
        let id = TypeId::new(self.id, SymbolId(self.symbols.len()));
        self.symbols.push(Symbol { id, name, def });
        id
    }

    pub fn get_symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.0)
    }

    pub fn get_symbol_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(id.0)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Classes in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = (&Symbol, &ClassInfo)> {
        self.symbols.iter().filter_map(|s| match &s.def {
            TypeDef::Class(info) => Some((s, info)),
            TypeDef::Interface(_) => None,
        })
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols
            .iter()
            .filter(|s| matches!(s.def, TypeDef::Interface(_)))
    }

    /// True for this module's own name and for any dotted submodule of it.
    pub fn is_within(&self, root: &str) -> bool {
        self.name == root
            || self
                .name
                .strip_prefix(root)
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

/// All modules and their declarations.
#[derive(Debug, Default)]
pub struct TypeCatalog {
    modules: Vec<ModuleTypes>,
    module_by_name: FxHashMap<String, ModuleId>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module, or return the existing one with the same name.
    pub fn add_module(&mut self, name: impl Into<String>) -> ModuleId {
        let name = name.into();
        if let Some(id) = self.module_by_name.get(&name) {
            return *id;
        }
        let id = ModuleId(self.modules.len());
        self.module_by_name.insert(name.clone(), id);
        self.modules.push(ModuleTypes::new(id, name));
        id
    }

    /// Declare a class in `module`.
    ///
    /// # Panics
    ///
    /// If `module` was not created by this catalog.
    pub fn add_class(&mut self, module: ModuleId, name: impl Into<String>, info: ClassInfo) -> TypeId {
        self.modules[module.0].add_symbol(name.into(), TypeDef::Class(info))
    }

    /// Declare an interface in `module`.
    ///
    /// # Panics
    ///
    /// If `module` was not created by this catalog.
    pub fn add_interface(
        &mut self,
        module: ModuleId,
        name: impl Into<String>,
        info: InterfaceInfo,
    ) -> TypeId {
        self.modules[module.0].add_symbol(name.into(), TypeDef::Interface(info))
    }

    pub fn get_module(&self, id: ModuleId) -> Option<&ModuleTypes> {
        self.modules.get(id.0)
    }

    pub fn get_module_by_name(&self, name: &str) -> Option<&ModuleTypes> {
        self.module_by_name
            .get(name)
            .and_then(|id| self.get_module(*id))
    }

    pub fn modules(&self) -> impl Iterator<Item = &ModuleTypes> {
        self.modules.iter()
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn get(&self, id: TypeId) -> Option<&Symbol> {
        self.get_module(id.module)?.get_symbol(id.symbol)
    }

    pub fn class(&self, id: TypeId) -> Option<&ClassInfo> {
        match &self.get(id)?.def {
            TypeDef::Class(info) => Some(info),
            TypeDef::Interface(_) => None,
        }
    }

    pub fn class_mut(&mut self, id: TypeId) -> Option<&mut ClassInfo> {
        let symbol = self.modules.get_mut(id.module.0)?.get_symbol_mut(id.symbol)?;
        match &mut symbol.def {
            TypeDef::Class(info) => Some(info),
            TypeDef::Interface(_) => None,
        }
    }

    pub fn interface(&self, id: TypeId) -> Option<&InterfaceInfo> {
        match &self.get(id)?.def {
            TypeDef::Interface(info) => Some(info),
            TypeDef::Class(_) => None,
        }
    }

    /// Simple name of a declared type, or `"<unknown>"`.
    pub fn name_of(&self, id: TypeId) -> &str {
        self.get(id).map_or("<unknown>", |s| s.name.as_str())
    }

    /// Find a type by simple name (`Product`) or qualified name
    /// (`fixtures.Product`). The first match in module order wins.
    pub fn find(&self, name: &str) -> Option<TypeId> {
        if let Some((module, simple)) = name.rsplit_once('.') {
            return self
                .get_module_by_name(module)?
                .symbols()
                .find(|s| s.name == simple)
                .map(|s| s.id);
        }
        self.modules
            .iter()
            .flat_map(|m| m.symbols())
            .find(|s| s.name == name)
            .map(|s| s.id)
    }

    /// Classify a descriptor for dispatch.
    pub fn classify<'a>(&'a self, ty: &'a TypeInfo) -> TypeKind<'a> {
        match ty {
            TypeInfo::Primitive(prim) => TypeKind::Primitive(*prim),
            TypeInfo::String => TypeKind::Str,
            TypeInfo::List(elem) => TypeKind::Container(elem.as_deref()),
            TypeInfo::Named(id) => match self.get(*id).map(|s| &s.def) {
                Some(TypeDef::Class(info)) => TypeKind::Object(info),
                Some(TypeDef::Interface(info)) => TypeKind::Interface(info),
                None => TypeKind::Unknown,
            },
        }
    }

    /// Human-readable type syntax, e.g. `List<Product>`.
    pub fn display(&self, ty: &TypeInfo) -> String {
        match ty {
            TypeInfo::Primitive(prim) => prim.as_str().to_string(),
            TypeInfo::String => "string".to_string(),
            TypeInfo::List(Some(elem)) => format!("List<{}>", self.display(elem)),
            TypeInfo::List(None) => "List".to_string(),
            TypeInfo::Named(id) => self.name_of(*id).to_string(),
        }
    }
}
