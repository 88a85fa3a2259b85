use crate::CatalogEntry;
use serde::{Deserialize, Serialize};

/// The in-memory restaurant table, indexed by row position.
///
/// Row `i` corresponds to row `i` of the vector index built in the same
/// ingestion run. The store is read-only for the lifetime of a running
/// pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
}

impl CatalogStore {
    #[must_use]
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry at `position`; out-of-range positions return `None`.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&CatalogEntry> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}
