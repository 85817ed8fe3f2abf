//! The single piece of view state: which catalog entry is displayed.

use crate::catalog::{Catalog, CatalogError, ModelEntry};
use tracing::debug;

/// Tracks the selected catalog entry by display position.
///
/// Positions are only ever taken from the catalog the selection was created
/// with, so the selected key is always a valid catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    /// Start at the catalog's default entry.
    #[must_use]
    pub const fn new(catalog: &Catalog) -> Self {
        Self {
            index: catalog.default_index(),
            len: catalog.len(),
        }
    }

    /// Position of the selected entry.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Key of the selected entry.
    #[must_use]
    pub fn selected_key(self, catalog: &Catalog) -> &'static str {
        self.selected_entry(catalog).key
    }

    /// The selected entry.
    #[must_use]
    pub fn selected_entry(self, catalog: &Catalog) -> &ModelEntry {
        catalog
            .entry_at(self.index)
            .unwrap_or_else(|| catalog.default_entry())
    }

    /// Whether `key` is the selected entry.
    #[must_use]
    pub fn is_selected(self, catalog: &Catalog, key: &str) -> bool {
        self.selected_key(catalog) == key
    }

    /// Select by key. Returns whether the selection changed.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownKey`] if `key` is not in the catalog; the
    /// selection is left untouched.
    pub fn select(&mut self, catalog: &Catalog, key: &str) -> Result<bool, CatalogError> {
        catalog.lookup(key)?;
        let idx = catalog.index_of(key).unwrap_or(self.index);
        Ok(self.select_index(idx))
    }

    /// Select by display position. Out-of-range positions are ignored.
    /// Returns whether the selection changed.
    pub fn select_index(&mut self, idx: usize) -> bool {
        if idx >= self.len || idx == self.index {
            return false;
        }
        debug!(from = self.index, to = idx, "Selection changed");
        self.index = idx;
        true
    }

    /// Move forward by `step` positions, wrapping at the end.
    pub fn select_next_by(&mut self, step: usize) -> bool {
        if self.len == 0 {
            return false;
        }
        let idx = (self.index + step % self.len) % self.len;
        self.select_index(idx)
    }

    /// Move backward by `step` positions, wrapping at the start.
    pub fn select_prev_by(&mut self, step: usize) -> bool {
        if self.len == 0 {
            return false;
        }
        let idx = (self.index + self.len - step % self.len) % self.len;
        self.select_index(idx)
    }

    /// Move to the next entry (wrapping).
    pub fn select_next(&mut self) -> bool {
        self.select_next_by(1)
    }

    /// Move to the previous entry (wrapping).
    pub fn select_prev(&mut self) -> bool {
        self.select_prev_by(1)
    }
}
