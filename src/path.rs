// src/path.rs
//! Types currently under construction along one generation call stack.

use std::ops::{Deref, DerefMut};

use rustc_hash::FxHashSet;

use crate::types::TypeId;

/// In-progress set for one top-level `generate` call.
///
/// A type is entered right before its generation starts and leaves when the
/// returned [`PathGuard`] drops, so early returns, `?` and unwinding all
/// restore the set.
#[derive(Debug, Default)]
pub struct GenerationPath {
    active: FxHashSet<TypeId>,
}

impl GenerationPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, ty: TypeId) -> bool {
        self.active.contains(&ty)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Mark `ty` as under construction until the guard drops.
    ///
    /// Returns `None` when `ty` is already on the path (a cycle).
    pub fn enter(&mut self, ty: TypeId) -> Option<PathGuard<'_>> {
        if self.active.insert(ty) {
            Some(PathGuard { path: self, ty })
        } else {
            None
        }
    }
}

/// Scope of one type on the path. Derefs to the path so recursion can keep
/// using it.
#[derive(Debug)]
pub struct PathGuard<'p> {
    path: &'p mut GenerationPath,
    ty: TypeId,
}

impl Deref for PathGuard<'_> {
    type Target = GenerationPath;

    fn deref(&self) -> &GenerationPath {
        &*self.path
    }
}

impl DerefMut for PathGuard<'_> {
    fn deref_mut(&mut self) -> &mut GenerationPath {
        &mut *self.path
    }
}

impl Drop for PathGuard<'_> {
    fn drop(&mut self) {
        self.path.active.remove(&self.ty);
    }
}
