//! Named collection of registries, one per physical count.
//!
//! # Responsibility
//! - Manage registry lifecycle: explicit create, remove, rename.
//! - Delegate per-file flattening for export.
//!
//! # Invariants
//! - File names are unique, non-empty after trimming, and keep insertion
//!   order.
//! - A removed name re-created later starts from an empty registry.

use crate::model::article::Record;
use crate::model::registry::Registry;
use indexmap::IndexMap;

/// The process-lifetime set of inventory files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrySet {
    files: IndexMap<String, Registry>,
}

impl RegistrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry under `name`.
    ///
    /// Returns `false` when the name is blank or already present.
    pub fn create(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.trim().is_empty() || self.files.contains_key(&name) {
            return false;
        }
        self.files.insert(name, Registry::new());
        true
    }

    /// Removes a registry and everything recorded in it.
    pub fn remove(&mut self, name: &str) -> bool {
        self.files.shift_remove(name).is_some()
    }

    /// Re-keys a registry under a new name, keeping its contents.
    ///
    /// Returns `false` when `old` is absent, `new` is blank, or `new` is
    /// already taken. The renamed entry moves to the end of the name order.
    pub fn rename(&mut self, old: &str, new: impl Into<String>) -> bool {
        let new = new.into();
        if new.trim().is_empty() || self.files.contains_key(&new) || !self.files.contains_key(old) {
            return false;
        }
        match self.files.shift_remove(old) {
            Some(registry) => {
                self.files.insert(new, registry);
                true
            }
            None => false,
        }
    }

    /// File names in insertion order.
    pub fn list_names(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    /// Flattens one file to records; empty when the name is absent.
    pub fn export(&self, name: &str) -> Vec<Record> {
        self.files
            .get(name)
            .map(Registry::export)
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn registry(&self, name: &str) -> Option<&Registry> {
        self.files.get(name)
    }

    pub fn registry_mut(&mut self, name: &str) -> Option<&mut Registry> {
        self.files.get_mut(name)
    }

    /// Inserts or replaces a registry wholesale.
    ///
    /// Snapshot restore and merge paths use this; interactive creation goes
    /// through [`RegistrySet::create`].
    pub fn insert_registry(&mut self, name: impl Into<String>, registry: Registry) {
        self.files.insert(name.into(), registry);
    }

    /// Overlays another set onto this one, replacing files with the same
    /// name and appending new ones.
    pub fn merge(&mut self, other: RegistrySet) {
        for (name, registry) in other.files {
            self.files.insert(name, registry);
        }
    }

    /// Iterates `(name, registry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Registry)> {
        self.files
            .iter()
            .map(|(name, registry)| (name.as_str(), registry))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
