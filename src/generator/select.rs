// src/generator/select.rs
//! Constructor selection.

use crate::catalog::{ClassInfo, Constructor};

/// The constructor with the most parameters; the first declared wins ties.
///
/// Recomputed on every request, never cached.
pub fn select_constructor(class: &ClassInfo) -> Option<&Constructor> {
    class
        .constructors
        .iter()
        .fold(None, |best: Option<&Constructor>, ctor| match best {
            Some(current) if current.arity() >= ctor.arity() => Some(current),
            _ => Some(ctor),
        })
}
