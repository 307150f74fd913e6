// src/catalog/store.rs

//! Catalog storage
//!
//! [`CatalogStore`] is the plain collection of entries keyed by unique name.
//! [`Cookbook`] wraps it behind a reader/writer lock so that a summary never
//! observes a catalog half-way through an insertion, and so that validation
//! and insertion of one candidate happen under the same write lock.

use crate::catalog::entry::Entry;
use crate::catalog::summary::{Summary, SummaryResolver, DEFAULT_MAX_DEPTH};
use crate::catalog::validate::validate_entry;
use crate::error::{Error, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// In-memory collection of cookbook entries in insertion order
#[derive(Debug, Default)]
pub struct CatalogStore {
    entries: Vec<Entry>,
    /// Name -> position in `entries`
    index: HashMap<String, usize>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    ///
    /// Names share one namespace across ingredients and recipes. An existing
    /// entry is never overwritten.
    pub fn insert(&mut self, entry: Entry) -> Result<()> {
        if self.index.contains_key(entry.name()) {
            return Err(Error::DuplicateName(entry.name().to_string()));
        }
        self.index.insert(entry.name().to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Exact-match lookup by name
    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

/// Shared, lock-protected cookbook
#[derive(Debug)]
pub struct Cookbook {
    store: RwLock<CatalogStore>,
    max_depth: usize,
}

impl Default for Cookbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Cookbook {
    /// Create an empty cookbook
    pub fn new() -> Self {
        Self {
            store: RwLock::new(CatalogStore::new()),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the recipe nesting bound used by summaries
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Validate an untyped candidate and admit it on success
    pub fn add_entry(&self, candidate: &serde_json::Value) -> Result<()> {
        let mut store = self.store.write();
        let entry = validate_entry(candidate, &store)?;
        debug!("Admitting {} '{}'", entry.kind(), entry.name());
        store.insert(entry)
    }

    /// Admit candidates in order, stopping at the first rejection
    ///
    /// Returns the number of admitted entries. Entries before the rejected
    /// one stay admitted.
    pub fn add_entries(&self, candidates: &[serde_json::Value]) -> Result<usize> {
        for (index, candidate) in candidates.iter().enumerate() {
            self.add_entry(candidate).map_err(|e| Error::Seed {
                index,
                source: Box::new(e),
            })?;
        }
        Ok(candidates.len())
    }

    /// Load a JSON array of candidate entries from a file
    pub fn load_seed(&self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let candidates: Vec<serde_json::Value> = serde_json::from_str(&content)?;
        let count = self.add_entries(&candidates)?;
        info!("Loaded {} entries from {}", count, path.display());
        Ok(count)
    }

    /// Check whether `name` is a recipe in the cookbook
    pub fn is_recipe(&self, name: &str) -> bool {
        self.store.read().find(name).is_some_and(Entry::is_recipe)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.read().exists(name)
    }

    /// Summarize a recipe against a consistent snapshot of the cookbook
    pub fn summarize(&self, name: &str) -> Result<Summary> {
        let store = self.store.read();
        SummaryResolver::new(&store)
            .with_max_depth(self.max_depth)
            .summarize(name)
    }

    /// Look up an entry by name, returning a copy
    pub fn get(&self, name: &str) -> Option<Entry> {
        self.store.read().find(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }
}
