//! Build script for dlrepro.
//!
//! Generates the compile-time model catalog from `catalog/models.md` so the
//! application never parses markdown at runtime. The parser and the catalog
//! rules live in `src/catalog/source.rs`; any violation fails the build.

#[path = "src/catalog/source.rs"]
mod source;

use source::{CatalogEntry, parse_catalog, validate_catalog};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CATALOG_SOURCE: &str = "catalog/models.md";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={CATALOG_SOURCE}");
    println!("cargo:rerun-if-changed=src/catalog/source.rs");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    let catalog_path = manifest_dir.join(CATALOG_SOURCE);
    let markdown = fs::read_to_string(&catalog_path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to read {}: {e}", catalog_path.display()),
        )
    })?;

    let parsed = parse_catalog(&markdown).map_err(|message| invalid(&catalog_path, &message))?;
    let default_key =
        validate_catalog(&parsed).map_err(|message| invalid(&catalog_path, &message))?;

    let out_path = out_dir.join("catalog.rs");
    let contents = generate_catalog_rs(&parsed.entries, default_key)?;
    fs::write(&out_path, contents).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to write {}: {e}", out_path.display()),
        )
    })?;

    Ok(())
}

fn invalid(path: &Path, message: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("{message} in {}", path.display()),
    )
}

fn generate_catalog_rs(entries: &[CatalogEntry], default_key: &str) -> io::Result<String> {
    use std::fmt::Write as _;

    let mut out = String::new();
    writeln!(&mut out, "// @generated").map_err(io::Error::other)?;
    writeln!(&mut out, "//").map_err(io::Error::other)?;
    writeln!(&mut out, "// Generated from {CATALOG_SOURCE} by build.rs.")
        .map_err(io::Error::other)?;
    writeln!(&mut out).map_err(io::Error::other)?;
    writeln!(
        &mut out,
        "const BUILTIN_DEFAULT_KEY: &str = {};",
        raw_string_literal(default_key)?
    )
    .map_err(io::Error::other)?;
    writeln!(&mut out).map_err(io::Error::other)?;
    writeln!(&mut out, "const BUILTIN_ENTRIES: &[ModelEntry] = &[").map_err(io::Error::other)?;
    for entry in entries {
        let fields = [
            ("key", entry.key.as_str()),
            ("name", entry.name.as_str()),
            ("status", entry.status.as_deref().unwrap_or_default()),
            ("paper", entry.paper.as_deref().unwrap_or_default()),
            ("code", entry.code.as_deref().unwrap_or_default()),
        ];
        writeln!(&mut out, "    ModelEntry {{").map_err(io::Error::other)?;
        for (field, value) in fields {
            let literal = raw_string_literal(value)?;
            writeln!(&mut out, "        {field}: {literal},").map_err(io::Error::other)?;
        }
        writeln!(&mut out, "    }},").map_err(io::Error::other)?;
    }
    writeln!(&mut out, "];").map_err(io::Error::other)?;
    Ok(out)
}

fn raw_string_literal(value: &str) -> io::Result<String> {
    for hashes in 0..=10 {
        let hash_str = "#".repeat(hashes);
        let closing = format!("\"{hash_str}");
        if !value.contains(&closing) {
            return Ok(format!("r{hash_str}\"{value}\"{hash_str}"));
        }
    }

    Err(io::Error::new(
        io::ErrorKind::InvalidData,
        "Failed to generate raw string literal",
    ))
}
