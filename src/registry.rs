// src/registry.rs
//! Interface -> implementation lookup, built by scanning one module tree.

use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;

use crate::catalog::TypeCatalog;
use crate::types::TypeId;

/// Concrete, generatable classes registered under each interface they
/// declare, in scan order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImplementationRegistry {
    implementations: FxHashMap<TypeId, Vec<TypeId>>,
}

impl ImplementationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `class` as an implementation of `iface`.
    pub fn register(&mut self, iface: TypeId, class: TypeId) {
        self.implementations.entry(iface).or_default().push(class);
    }

    /// Implementations of `iface`; empty when none are known.
    pub fn implementations(&self, iface: TypeId) -> &[TypeId] {
        self.implementations
            .get(&iface)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of interfaces with at least one implementation.
    pub fn interface_count(&self) -> usize {
        self.implementations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.implementations.is_empty()
    }
}

/// Lazily built [`ImplementationRegistry`] for one catalog and scan root.
///
/// The index owns a handle to the catalog it scans, so every generator
/// sharing the index resolves against the same type ids. The scan runs at
/// most once, on the first interface lookup, even when several threads race
/// to trigger it. A scan that cannot find its module leaves the registry
/// empty and is not retried.
#[derive(Debug)]
pub struct ImplementationIndex {
    catalog: Arc<TypeCatalog>,
    scan_module: String,
    registry: OnceLock<ImplementationRegistry>,
}

impl ImplementationIndex {
    /// Index over the module named `scan_module` and its dotted submodules.
    pub fn new(catalog: Arc<TypeCatalog>, scan_module: impl Into<String>) -> Self {
        Self {
            catalog,
            scan_module: scan_module.into(),
            registry: OnceLock::new(),
        }
    }

    /// The catalog this index scans.
    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn scan_module(&self) -> &str {
        &self.scan_module
    }

    /// True once the scan has run.
    pub fn is_built(&self) -> bool {
        self.registry.get().is_some()
    }

    /// The registry, scanning on first use.
    pub fn registry(&self) -> &ImplementationRegistry {
        self.registry
            .get_or_init(|| Self::scan(&self.catalog, &self.scan_module))
    }

    /// Implementations of `iface`, scanning on first use.
    pub fn implementations(&self, iface: TypeId) -> &[TypeId] {
        self.registry().implementations(iface)
    }

    /// Best-effort scan of `root` and its submodules. Partial or empty
    /// results are accepted.
    pub fn scan(catalog: &TypeCatalog, root: &str) -> ImplementationRegistry {
        let mut registry = ImplementationRegistry::new();

        let modules: Vec<_> = catalog.modules().filter(|m| m.is_within(root)).collect();
        if modules.is_empty() {
            tracing::warn!(root, "scan module not found, no implementations registered");
            return registry;
        }

        let mut candidates = 0usize;
        for module in modules {
            for (symbol, class) in module.classes() {
                if !class.generatable {
                    continue;
                }
                candidates += 1;
                for iface in &class.implements {
                    if catalog.interface(*iface).is_none() {
                        tracing::trace!(class = %symbol.name, %iface, "skipping non-interface supertype");
                        continue;
                    }
                    registry.register(*iface, symbol.id);
                }
            }
        }

        tracing::debug!(
            root,
            candidates,
            interfaces = registry.interface_count(),
            "implementation registry built"
        );
        registry
    }
}
