//! In-memory hall collection
//!
//! The single source of truth for hall records a screen renders from. The
//! fetch layer hands over server-ordered pages; everything here is plain
//! ordered CRUD.

use crate::error::{Error, Result};
use crate::models::{Hall, HallPatch};

/// Ordered in-memory collection of halls.
///
/// Duplicate ids are permitted on `add`; `update` and `delete` assume ids are
/// unique in practice.
#[derive(Debug, Default)]
pub struct HallStore {
    halls: Vec<Hall>,
}

impl HallStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a hall. No uniqueness check.
    pub fn add(&mut self, hall: Hall) {
        self.halls.insert(0, hall);
    }

    /// Replace the contents with `halls` reversed.
    ///
    /// The fetch boundary supplies newest-first pages and display wants
    /// oldest-first, so the reversal is unconditional. Callers must always
    /// pass a fresh server-ordered list, never an already-reversed one.
    pub fn set(&mut self, mut halls: Vec<Hall>) {
        halls.reverse();
        self.halls = halls;
    }

    /// Shallow-merge `patch` over the first hall with `id`, in place.
    ///
    /// The entry keeps its position; other entries are untouched.
    pub fn update(&mut self, id: i64, patch: &HallPatch) -> Result<()> {
        let hall = self
            .halls
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| Error::NotFound(format!("hall {id}")))?;
        patch.apply(hall);
        Ok(())
    }

    /// Remove every hall with `id`, preserving the order of the rest.
    pub fn delete(&mut self, id: i64) {
        self.halls.retain(|h| h.id != id);
    }

    pub fn get(&self, id: i64) -> Option<&Hall> {
        self.halls.iter().find(|h| h.id == id)
    }

    pub fn halls(&self) -> &[Hall] {
        &self.halls
    }

    pub fn len(&self) -> usize {
        self.halls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.halls.is_empty()
    }

    pub fn clear(&mut self) {
        self.halls.clear();
    }
}
