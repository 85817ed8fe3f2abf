//! dlrepro - Terminal browser for classic deep learning paper reproductions
//!
//! A fixed catalog of model entries is compiled into the binary. The TUI shows
//! one selector control per entry and a detail card with the paper citation
//! and a complete `PyTorch` implementation for the selected entry.

pub mod app;
pub mod catalog;
pub mod config;
pub mod paths;
pub mod report;
pub mod tui;

pub use app::App;
pub use catalog::{Catalog, CatalogError, ModelEntry};
pub use config::Config;
