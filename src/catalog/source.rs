//! Parser and validator for `catalog/models.md`.
//!
//! Compiled into the build script with `#[path]`, and into the library only
//! for tests, so both see the same rules.

use std::collections::HashSet;

const DEFAULT_MARKER_PREFIX: &str = "<!-- default:";
const FENCE: &str = "```";

/// One `## [key] Name` section as written in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: String,
    pub name: String,
    pub status: Option<String>,
    pub paper: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedCatalog {
    pub default_key: Option<String>,
    pub entries: Vec<CatalogEntry>,
}

pub fn parse_catalog(source: &str) -> Result<ParsedCatalog, String> {
    let mut parsed = ParsedCatalog::default();
    let mut current: Option<CatalogEntry> = None;
    let mut code_lines: Option<Vec<&str>> = None;

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;

        if let Some(lines) = code_lines.as_mut() {
            if line.trim_end() == FENCE {
                let body = lines.join("\n");
                let Some(entry) = current.as_mut() else {
                    return Err(format!("Code block outside of an entry at line {line_no}"));
                };
                if entry.code.is_some() {
                    return Err(format!(
                        "Entry [{}] has more than one code block (line {line_no})",
                        entry.key
                    ));
                }
                entry.code = Some(body);
                code_lines = None;
            } else {
                lines.push(line);
            }
            continue;
        }

        if let Some(key) = parse_default_marker(line) {
            if parsed.default_key.is_some() {
                return Err(format!("Duplicate default marker at line {line_no}"));
            }
            parsed.default_key = Some(key);
            continue;
        }

        if let Some((key, name)) = parse_entry_heading(line) {
            if let Some(done) = current.take() {
                parsed.entries.push(done);
            }
            current = Some(CatalogEntry {
                key,
                name,
                ..CatalogEntry::default()
            });
            continue;
        }

        let trimmed = line.trim();
        let Some(entry) = current.as_mut() else {
            // Free-form prose before the first entry.
            continue;
        };

        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with(FENCE) {
            code_lines = Some(Vec::new());
            continue;
        }
        if let Some(value) = trimmed.strip_prefix("status:") {
            set_field(&mut entry.status, value, "status", &entry.key, line_no)?;
            continue;
        }
        if let Some(value) = trimmed.strip_prefix("paper:") {
            set_field(&mut entry.paper, value, "paper", &entry.key, line_no)?;
            continue;
        }

        return Err(format!(
            "Unexpected line {line_no} in entry [{}]: {trimmed}",
            entry.key
        ));
    }

    if code_lines.is_some() {
        return Err("Unterminated code block".to_string());
    }
    if let Some(done) = current.take() {
        parsed.entries.push(done);
    }

    Ok(parsed)
}

fn set_field(
    slot: &mut Option<String>,
    value: &str,
    field: &str,
    key: &str,
    line_no: usize,
) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!(
            "Entry [{key}] sets `{field}` twice (line {line_no})"
        ));
    }
    *slot = Some(value.trim().to_string());
    Ok(())
}

fn parse_default_marker(line: &str) -> Option<String> {
    let rest = line.trim().strip_prefix(DEFAULT_MARKER_PREFIX)?;
    let key = rest.strip_suffix("-->")?.trim();
    Some(key.to_string())
}

fn parse_entry_heading(line: &str) -> Option<(String, String)> {
    let rest = line.trim_end().strip_prefix("## [")?;
    let end_bracket = rest.find(']')?;
    let key = rest[..end_bracket].trim();
    let name = rest[end_bracket + 1..].trim();
    Some((key.to_string(), name.to_string()))
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
}

/// Check the catalog rules and return the default key.
pub fn validate_catalog(parsed: &ParsedCatalog) -> Result<&str, String> {
    if parsed.entries.is_empty() {
        return Err("Catalog has no entries".to_string());
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for entry in &parsed.entries {
        if !is_valid_key(&entry.key) {
            return Err(format!(
                "Invalid catalog key [{}] (expected [a-z0-9_-]+)",
                entry.key
            ));
        }
        if !seen.insert(entry.key.as_str()) {
            return Err(format!("Duplicate catalog key [{}]", entry.key));
        }
        if entry.name.is_empty() {
            return Err(format!("Entry [{}] has an empty name", entry.key));
        }
        for (field, value) in [
            ("status", &entry.status),
            ("paper", &entry.paper),
            ("code", &entry.code),
        ] {
            if value.as_deref().is_none_or(str::is_empty) {
                return Err(format!("Entry [{}] is missing `{field}`", entry.key));
            }
        }
    }

    let Some(default_key) = parsed.default_key.as_deref() else {
        return Err("Missing `<!-- default: key -->` marker".to_string());
    };
    if !seen.contains(default_key) {
        return Err(format!(
            "Default key [{default_key}] is not a catalog entry"
        ));
    }

    Ok(default_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VALID: &str = "\
# Catalog

<!-- default: beta -->

## [alpha] Alpha
status: done
paper: Paper A

```python
def f():
\treturn 1
```

## [beta] Beta-2
status: done
paper: Paper B
```
x = 1
```
";

    fn check(source: &str) -> Result<String, String> {
        let parsed = parse_catalog(source)?;
        validate_catalog(&parsed).map(str::to_string)
    }

    fn assert_rejected(source: &str, needle: &str) {
        let result = check(source);
        assert!(
            result.as_ref().is_err_and(|msg| msg.contains(needle)),
            "{result:?} lacks {needle:?}"
        );
    }

    #[test]
    fn test_parses_entries_in_order() -> Result<(), String> {
        let parsed = parse_catalog(VALID)?;
        assert_eq!(parsed.default_key.as_deref(), Some("beta"));
        assert_eq!(
            parsed.entries[0],
            CatalogEntry {
                key: "alpha".to_string(),
                name: "Alpha".to_string(),
                status: Some("done".to_string()),
                paper: Some("Paper A".to_string()),
                code: Some("def f():\n\treturn 1".to_string()),
            }
        );
        assert_eq!(parsed.entries[1].name, "Beta-2");
        assert_eq!(validate_catalog(&parsed)?, "beta");
        Ok(())
    }

    #[test]
    fn test_shipped_catalog_is_valid() -> Result<(), String> {
        let parsed = parse_catalog(include_str!("../../catalog/models.md"))?;
        assert_eq!(validate_catalog(&parsed)?, "resnet");
        assert_eq!(parsed.entries.len(), 8);
        Ok(())
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert_rejected("<!-- default: a -->\n", "no entries");
    }

    #[test]
    fn test_rejects_invalid_key_charset() {
        assert_rejected(
            &VALID.replace("[alpha]", "[Alpha Net]"),
            "Invalid catalog key [Alpha Net]",
        );
    }

    #[test]
    fn test_rejects_duplicate_key() {
        assert_rejected(&VALID.replace("[beta]", "[alpha]"), "Duplicate catalog key");
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert_rejected(
            &VALID.replace("status: done\npaper: Paper A", "paper: Paper A"),
            "[alpha] is missing `status`",
        );
        assert_rejected(
            &VALID.replace("paper: Paper B\n", ""),
            "[beta] is missing `paper`",
        );
        assert_rejected(
            &VALID.replace("```\nx = 1\n```\n", ""),
            "[beta] is missing `code`",
        );
        assert_rejected(
            &VALID.replace("status: done\npaper: Paper A", "status:\npaper: Paper A"),
            "[alpha] is missing `status`",
        );
    }

    #[test]
    fn test_rejects_duplicate_default_marker() {
        assert_rejected(
            &VALID.replace(
                "<!-- default: beta -->",
                "<!-- default: beta -->\n<!-- default: alpha -->",
            ),
            "Duplicate default marker",
        );
    }

    #[test]
    fn test_rejects_missing_or_unknown_default() {
        assert_rejected(&VALID.replace("<!-- default: beta -->", ""), "Missing");
        assert_rejected(
            &VALID.replace("<!-- default: beta -->", "<!-- default: gamma -->"),
            "Default key [gamma] is not a catalog entry",
        );
    }

    #[test]
    fn test_rejects_second_code_block() {
        assert_rejected(
            &VALID.replace("x = 1\n```\n", "x = 1\n```\n```\ny = 2\n```\n"),
            "more than one code block",
        );
    }

    #[test]
    fn test_rejects_unterminated_fence() {
        assert_rejected(&VALID.replace("x = 1\n```\n", "x = 1\n"), "Unterminated");
    }

    #[test]
    fn test_rejects_repeated_field() {
        assert_rejected(
            &VALID.replace("paper: Paper B", "paper: Paper B\npaper: Again"),
            "sets `paper` twice",
        );
    }

    #[test]
    fn test_rejects_stray_text_inside_entry() {
        assert_rejected(&VALID.replace("paper: Paper B", "papr: Paper B"), "Unexpected line");
    }
}
