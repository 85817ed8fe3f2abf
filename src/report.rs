//! Plain-text and JSON output for the non-interactive subcommands

use crate::catalog::{Catalog, ModelEntry};
use anyhow::{Context, Result};
use serde::Serialize;

/// Catalog as serialized by `list --json`
#[derive(Debug, Serialize)]
struct CatalogListing<'a> {
    default: &'static str,
    models: &'a [ModelEntry],
}

/// One row per entry; the default entry is marked with `*`.
#[must_use]
pub fn catalog_table(catalog: &Catalog) -> String {
    let key_width = catalog.keys().map(str::len).max().unwrap_or(0);
    let name_width = catalog
        .entries()
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);

    catalog
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let marker = if idx == catalog.default_index() { '*' } else { ' ' };
            format!(
                "{marker} {:<key_width$}  {:<name_width$}  {}\n",
                entry.key, entry.name, entry.status
            )
        })
        .collect()
}

/// Full text report for one entry
#[must_use]
pub fn entry_report(entry: &ModelEntry) -> String {
    let newline = if entry.code.ends_with('\n') { "" } else { "\n" };
    format!(
        "{} [{}]\nstatus: {}\npaper:  {}\n\n{}{newline}",
        entry.name, entry.key, entry.status, entry.paper, entry.code
    )
}

/// Whole catalog as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn catalog_json(catalog: &Catalog) -> Result<String> {
    serde_json::to_string_pretty(&CatalogListing {
        default: catalog.default_key(),
        models: catalog.entries(),
    })
    .context("Failed to serialize catalog")
}

/// One entry as pretty JSON, code included
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn entry_json(entry: &ModelEntry) -> Result<String> {
    serde_json::to_string_pretty(entry)
        .with_context(|| format!("Failed to serialize model {}", entry.key))
}
