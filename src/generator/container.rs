// src/generator/container.rs
//! Sequence generation.

use crate::errors::GenerateError;
use crate::path::GenerationPath;
use crate::types::TypeInfo;
use crate::value::Value;

use super::Engine;

impl Engine<'_> {
    /// A sequence of `elem` with a drawn length in `[0, 5]`.
    ///
    /// Elements are generated at the container's own depth. Slots whose
    /// element comes back empty are dropped, so the result may be shorter
    /// than the drawn length.
    pub fn generate_container(
        &mut self,
        elem: &TypeInfo,
        depth: usize,
        path: &mut GenerationPath,
    ) -> Result<Vec<Value>, GenerateError> {
        let len = self.random.list_len();
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            if let Some(item) = self.generate(elem, depth, path)? {
                items.push(item);
            }
        }
        if items.len() < len {
            tracing::trace!(drawn = len, kept = items.len(), "dropped empty elements");
        }
        Ok(items)
    }
}
