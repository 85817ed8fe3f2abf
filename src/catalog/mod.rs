//! Compiled-in catalog of model reproductions.
//!
//! The table is generated from `catalog/models.md` by the build script, which
//! enforces every catalog rule: key charset, unique keys, required fields,
//! one existing default. [`Catalog::new`] only re-checks the structural rules
//! (non-empty, unique keys, default present) for tables built at runtime.

#[cfg(test)]
mod source;

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// One selectable entry: display text plus a verbatim code sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
    /// Stable lookup key (for example, `resnet`).
    pub key: &'static str,
    /// Display label.
    pub name: &'static str,
    /// Short status descriptor.
    pub status: &'static str,
    /// Citation for the paper the entry reproduces.
    pub paper: &'static str,
    /// Source code shown verbatim in the detail card.
    pub code: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/catalog.rs"));

/// Errors raised when building or querying a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The table has no entries.
    #[error("catalog has no entries")]
    Empty,
    /// Two entries share a key.
    #[error("duplicate catalog key `{0}`")]
    DuplicateKey(String),
    /// The designated default key is not in the table.
    #[error("default key `{0}` is not in the catalog")]
    MissingDefault(String),
    /// A key supplied from outside the catalog did not match any entry.
    #[error("unknown model `{key}` (available: {known})")]
    UnknownKey {
        /// The key that was requested.
        key: String,
        /// Comma-separated list of valid keys.
        known: String,
    },
}

/// Ordered, read-only mapping from key to [`ModelEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<ModelEntry>,
    default_index: usize,
}

impl Catalog {
    /// Build a catalog from `entries`, with `default_key` selected at startup.
    ///
    /// # Errors
    ///
    /// Returns an error if `entries` is empty, contains duplicate keys, or does
    /// not contain `default_key`.
    pub fn new(entries: Vec<ModelEntry>, default_key: &str) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.key) {
                return Err(CatalogError::DuplicateKey(entry.key.to_string()));
            }
        }

        let default_index = entries
            .iter()
            .position(|entry| entry.key == default_key)
            .ok_or_else(|| CatalogError::MissingDefault(default_key.to_string()))?;

        Ok(Self {
            entries,
            default_index,
        })
    }

    /// The catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        // Contract already enforced by build.rs.
        let default_index = BUILTIN_ENTRIES
            .iter()
            .position(|entry| entry.key == BUILTIN_DEFAULT_KEY)
            .unwrap_or(0);
        Self {
            entries: BUILTIN_ENTRIES.to_vec(),
            default_index,
        }
    }

    /// All entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[ModelEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog; provided for API symmetry.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.key)
    }

    /// Look up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ModelEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Position of `key` in display order.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    /// Entry at a display position.
    #[must_use]
    pub fn entry_at(&self, idx: usize) -> Option<&ModelEntry> {
        self.entries.get(idx)
    }

    /// Position of the default entry.
    #[must_use]
    pub const fn default_index(&self) -> usize {
        self.default_index
    }

    /// Key selected at startup.
    #[must_use]
    pub fn default_key(&self) -> &'static str {
        self.default_entry().key
    }

    /// Entry selected at startup.
    #[must_use]
    pub fn default_entry(&self) -> &ModelEntry {
        &self.entries[self.default_index]
    }

    /// Look up a key that came from outside the catalog (CLI, config).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownKey`] listing the valid keys.
    pub fn lookup(&self, key: &str) -> Result<&ModelEntry, CatalogError> {
        self.get(key).ok_or_else(|| CatalogError::UnknownKey {
            key: key.to_string(),
            known: self.keys().collect::<Vec<_>>().join(", "),
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
