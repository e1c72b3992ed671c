// src/generator/mod.rs
//! Type-directed value generation.
//!
//! [`Generator`] owns the long-lived state (implementation index with its
//! catalog, random source). Each top-level [`Generator::generate`] call borrows it
//! into an [`Engine`], which carries a fresh [`GenerationPath`] and a depth
//! of 0 down the recursion.
//!
//! Dispatch order for one request, first match wins:
//!
//! 1. depth past the ceiling -> empty
//! 2. primitive -> random draw
//! 3. string -> random lowercase string
//! 4. sequence -> empty list when bare, generated elements otherwise
//! 5. type already on the path -> empty (cycle)
//! 6. interface -> a random registered implementation, dispatched again at
//!    the same depth so it enters the path; unmarked class -> empty; marked
//!    class -> construct via its widest constructor

mod container;
mod select;

use std::sync::Arc;

pub use select::select_constructor;

use crate::catalog::{Args, TypeCatalog};
use crate::config::GeneratorConfig;
use crate::errors::GenerateError;
use crate::path::GenerationPath;
use crate::random::RandomSource;
use crate::registry::ImplementationIndex;
use crate::types::{TypeId, TypeInfo, TypeKind};
use crate::value::Value;

/// `Ok(None)` is the empty result: a legitimate outcome, not a failure.
pub type GenerateResult = Result<Option<Value>, GenerateError>;

/// Fills type descriptors with random values.
///
/// A generator is single-threaded per call (`&mut self`). Several
/// generators may share one [`ImplementationIndex`], and with it one
/// catalog, across threads.
#[derive(Debug)]
pub struct Generator {
    index: Arc<ImplementationIndex>,
    random: RandomSource,
    max_depth: usize,
}

impl Generator {
    /// Generator with the default configuration.
    pub fn new(index: Arc<ImplementationIndex>) -> Self {
        Self::with_config(index, &GeneratorConfig::default())
    }

    /// Generator over `index` and its catalog. `config.scan_module` is not
    /// consulted; the index already names its root.
    pub fn with_config(index: Arc<ImplementationIndex>, config: &GeneratorConfig) -> Self {
        let random = config
            .seed
            .map_or_else(RandomSource::new, RandomSource::seeded);
        Self {
            index,
            random,
            max_depth: config.max_depth,
        }
    }

    /// Generator with its own index over `config.scan_module`.
    pub fn from_config(catalog: Arc<TypeCatalog>, config: &GeneratorConfig) -> Self {
        let index = Arc::new(ImplementationIndex::new(catalog, config.scan_module.clone()));
        Self::with_config(index, config)
    }

    pub fn catalog(&self) -> &TypeCatalog {
        self.index.catalog()
    }

    pub fn index(&self) -> &ImplementationIndex {
        &self.index
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Borrow the generator as an engine for explicit depth/path control.
    pub fn engine(&mut self) -> Engine<'_> {
        Engine {
            catalog: self.index.catalog(),
            index: &self.index,
            random: &mut self.random,
            max_depth: self.max_depth,
        }
    }

    /// Generate a value of `ty`.
    #[tracing::instrument(level = "debug", skip_all, fields(ty = %self.catalog().display(ty)))]
    pub fn generate(&mut self, ty: &TypeInfo) -> GenerateResult {
        let mut path = GenerationPath::new();
        let result = self.engine().generate(ty, 0, &mut path);
        debug_assert!(path.is_empty(), "generation path not unwound");
        result
    }

    /// Generate an instance of a declared type.
    pub fn generate_type(&mut self, id: TypeId) -> GenerateResult {
        self.generate(&TypeInfo::Named(id))
    }
}

/// Recursive generation over borrowed generator state.
pub struct Engine<'a> {
    catalog: &'a TypeCatalog,
    index: &'a ImplementationIndex,
    random: &'a mut RandomSource,
    max_depth: usize,
}

impl Engine<'_> {
    /// Generate a value of `ty` at `depth` along `path`.
    ///
    /// `path` holds the same entries on return as on entry.
    pub fn generate(
        &mut self,
        ty: &TypeInfo,
        depth: usize,
        path: &mut GenerationPath,
    ) -> GenerateResult {
        if depth > self.max_depth {
            tracing::trace!(depth, "depth ceiling reached");
            return Ok(None);
        }

        let catalog = self.catalog;
        let kind = catalog.classify(ty);
        let id = match kind {
            TypeKind::Primitive(prim) => return Ok(Some(self.random.primitive(prim))),
            TypeKind::Str => return Ok(Some(Value::Str(self.random.string()))),
            TypeKind::Container(None) => return Ok(Some(Value::List(Vec::new()))),
            TypeKind::Container(Some(elem)) => {
                let items = self.generate_container(elem, depth, path)?;
                return Ok(Some(Value::List(items)));
            }
            TypeKind::Unknown => {
                tracing::trace!(ty = ?ty, "unknown type");
                return Ok(None);
            }
            TypeKind::Interface(_) | TypeKind::Object(_) => match ty.named_id() {
                Some(id) => id,
                None => return Ok(None),
            },
        };

        let Some(mut path) = path.enter(id) else {
            tracing::trace!(ty = catalog.name_of(id), depth, "cycle, yielding empty");
            return Ok(None);
        };

        match kind {
            TypeKind::Interface(_) => self.resolve_interface(id, depth, &mut path),
            TypeKind::Object(class) if !class.generatable => {
                tracing::trace!(ty = catalog.name_of(id), "type not marked generatable");
                Ok(None)
            }
            _ => self.construct(id, depth, &mut path),
        }
    }

    /// Pick a registered implementation of `iface` at random and generate it
    /// at the same depth. The implementation goes through the cycle check
    /// like any other named type.
    pub fn resolve_interface(
        &mut self,
        iface: TypeId,
        depth: usize,
        path: &mut GenerationPath,
    ) -> GenerateResult {
        let (catalog, index) = (self.catalog, self.index);
        let implementations = index.implementations(iface);
        let Some(choice) = self.random.index(implementations.len()) else {
            tracing::trace!(iface = catalog.name_of(iface), "no implementations");
            return Ok(None);
        };
        let chosen = implementations[choice];
        tracing::trace!(
            iface = catalog.name_of(iface),
            chosen = catalog.name_of(chosen),
            "resolved interface"
        );
        self.generate(&TypeInfo::Named(chosen), depth, path)
    }

    /// Build an instance of `class` through its widest constructor,
    /// generating each argument one level deeper.
    pub fn construct(
        &mut self,
        class: TypeId,
        depth: usize,
        path: &mut GenerationPath,
    ) -> GenerateResult {
        let catalog = self.catalog;
        let type_name = catalog.name_of(class);
        let Some(info) = catalog.class(class) else {
            return Ok(None);
        };
        let Some(ctor) = select_constructor(info) else {
            tracing::trace!(ty = type_name, "no constructors");
            return Ok(None);
        };

        let mut values = Vec::with_capacity(ctor.arity());
        for param in &ctor.params {
            let value = match param.param_type.list_element() {
                Some(elem) => Some(Value::List(
                    self.generate_container(elem, depth + 1, path)?,
                )),
                None => self.generate(&param.param_type, depth + 1, path)?,
            };
            values.push(value);
        }

        ctor.invoke(Args::new(class, type_name, values))
            .map(Some)
            .map_err(|source| GenerateError::Construction {
                type_name: type_name.to_string(),
                source,
            })
    }
}
