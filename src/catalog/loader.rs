// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{Catalog, CatalogEntry};
use crate::errors::CatalogError;
use crate::observability::messages::catalog::CatalogLoaded;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name reported for catalogs parsed from in-memory strings.
const INLINE_SOURCE: &str = "<inline>";
/// Name reported for the bundled catalog.
const BUILTIN_SOURCE: &str = "<builtin>";

const BUILTIN_CATALOG: &str = include_str!("../../catalogs/builtin.yaml");

/// On-disk representation of a catalog source.
///
/// YAML catalogs are a top-level sequence of entries:
///
/// ```yaml
/// - id: SRV001
///   severity: INFO
///   text: "Server started on port {port}"
/// ```
///
/// TOML catalogs use an array of `message` tables:
///
/// ```toml
/// [[message]]
/// id = "SRV001"
/// severity = "INFO"
/// text = "Server started on port {port}"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Toml,
}

impl SourceFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            "toml" => Some(SourceFormat::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    message: Vec<CatalogEntry>,
}

impl Catalog {
    /// Load a catalog from a YAML or TOML file.
    ///
    /// The whole file must be valid: any unreadable source, syntax error,
    /// schema violation, empty id or repeated id fails the load and no
    /// partial catalog is returned.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = parse(&content, format, path)?;
        CatalogLoaded {
            source: &path.display().to_string(),
            entry_count: catalog.len(),
        }
        .log();
        Ok(catalog)
    }

    /// Parse a YAML catalog held in memory.
    pub fn from_yaml_str(content: &str) -> Result<Catalog, CatalogError> {
        parse(content, SourceFormat::Yaml, Path::new(INLINE_SOURCE))
    }

    /// Parse a TOML catalog held in memory.
    pub fn from_toml_str(content: &str) -> Result<Catalog, CatalogError> {
        parse(content, SourceFormat::Toml, Path::new(INLINE_SOURCE))
    }

    /// The catalog bundled with the crate (`catalogs/builtin.yaml`).
    pub fn builtin() -> Result<Catalog, CatalogError> {
        let catalog = parse(BUILTIN_CATALOG, SourceFormat::Yaml, Path::new(BUILTIN_SOURCE))?;
        CatalogLoaded {
            source: BUILTIN_SOURCE,
            entry_count: catalog.len(),
        }
        .log();
        Ok(catalog)
    }
}

fn parse(content: &str, format: SourceFormat, path: &Path) -> Result<Catalog, CatalogError> {
    let parse_error = |reason: String| CatalogError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    let entries: Vec<CatalogEntry> = match format {
        // An empty YAML document is an empty catalog, not an error
        SourceFormat::Yaml if content.trim().is_empty() => Vec::new(),
        SourceFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
        SourceFormat::Toml => {
            let doc: TomlCatalog = toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            doc.message
        }
    };

    build(entries, path)
}

fn build(entries: Vec<CatalogEntry>, path: &Path) -> Result<Catalog, CatalogError> {
    let mut map = BTreeMap::new();
    for (index, entry) in entries.into_iter().enumerate() {
        if entry.id.trim().is_empty() {
            return Err(CatalogError::EmptyId {
                path: PathBuf::from(path),
                index,
            });
        }
        if map.contains_key(&entry.id) {
            return Err(CatalogError::DuplicateId {
                path: PathBuf::from(path),
                id: entry.id,
            });
        }
        map.insert(entry.id.clone(), entry);
    }
    Ok(Catalog { entries: map })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Severity;
    use std::io::Write;

    #[test]
    fn parse_basic_catalog() {
        let yaml = r#"
- id: SRV001
  severity: INFO
  text: "Server started on port {port}"
- id: SRV002
  severity: ERROR
  text: "Failed to bind to port {port}: {error}"
  help: "Cause: the port is taken."
  replies: [retry, abort]
"#;

        let catalog = Catalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.len(), 2);

        let srv002 = catalog.get("SRV002").unwrap();
        assert_eq!(srv002.severity, Severity::Error);
        assert_eq!(srv002.help.as_deref(), Some("Cause: the port is taken."));
        assert_eq!(srv002.replies, vec!["retry", "abort"]);

        let srv001 = catalog.get("SRV001").unwrap();
        assert_eq!(srv001.help, None);
        assert!(srv001.replies.is_empty());
    }

    #[test]
    fn test_unknown_severity_is_rejected() {
        let yaml = r#"
- id: SRV001
  severity: LOUD
  text: "nope"
"#;
        let err = Catalog::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.is_load_error());
        assert!(err.to_string().contains("LOUD"));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let yaml = r#"
- severity: INFO
  text: "no id"
"#;
        let err = Catalog::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let yaml = r#"
- id: SRV001
  severity: INFO
  text: "ok"
- id: "  "
  severity: INFO
  text: "blank"
"#;
        let err = Catalog::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId { index: 1, .. }));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let yaml = r#"
- id: SRV001
  severity: INFO
  text: "first"
- id: SRV001
  severity: WARN
  text: "second"
"#;
        let err = Catalog::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { ref id, .. } if id == "SRV001"));
    }

    #[test]
    fn test_top_level_mapping_is_rejected() {
        let err = Catalog::from_yaml_str("id: SRV001\nseverity: INFO\ntext: x\n").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_empty_yaml_is_empty_catalog() {
        let catalog = Catalog::from_yaml_str("\n").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_toml_catalog() {
        let toml = r#"
[[message]]
id = "NET002"
severity = "ERROR"
text = "Connection to {host}:{port} timed out"
help = "Check connectivity."

[[message]]
id = "APP001"
severity = "INFO"
text = "Application initialized successfully"
replies = ["ok"]
"#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("NET002").unwrap().severity, Severity::Error);
        assert_eq!(catalog.get("APP001").unwrap().replies, vec!["ok"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "- id: TMP001\n  severity: WARN\n  text: \"temp {{x}}\"").unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.get("TMP001").unwrap().text, "temp {x}");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.yaml"));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_source_format_from_path() {
        assert_eq!(SourceFormat::from_path(Path::new("a.yml")), Some(SourceFormat::Yaml));
        assert_eq!(SourceFormat::from_path(Path::new("a.YAML")), Some(SourceFormat::Yaml));
        assert_eq!(SourceFormat::from_path(Path::new("a.toml")), Some(SourceFormat::Toml));
        assert_eq!(SourceFormat::from_path(Path::new("catalog")), None);
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.contains("SRV001"));
        assert!(!catalog.is_empty());
    }
}
