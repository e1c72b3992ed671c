// src/lib.rs
//! Randomized, type-directed fixture generation.
//!
//! Describe types in a [`TypeCatalog`], then ask a [`Generator`] for
//! instances. Interfaces resolve to a random implementation discovered in
//! the configured scan module; recursion stops at cycles and at the depth
//! ceiling, leaving those fields absent.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod generator;
pub mod path;
pub mod random;
pub mod registry;
pub mod sample;
pub mod types;
pub mod value;

pub use catalog::{Args, ClassInfo, Constructor, InterfaceInfo, ParamInfo, TypeCatalog};
pub use config::GeneratorConfig;
pub use errors::{ConfigError, ConstructError, GenerateError};
pub use generator::{Engine, GenerateResult, Generator, select_constructor};
pub use registry::{ImplementationIndex, ImplementationRegistry};
pub use types::{ModuleId, PrimitiveType, SymbolId, TypeId, TypeInfo, TypeKind};
pub use value::{Object, Value};
