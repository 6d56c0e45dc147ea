// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use crate::catalog::Catalog;
    use crate::message::{Context, Severity};

    fn ctx(pairs: &[(&str, &str)]) -> Context {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// The file on disk and the bundled copy are the same catalog
    #[test]
    fn test_builtin_file_matches_bundled_catalog() {
        let from_file = Catalog::load("catalogs/builtin.yaml").unwrap();
        let bundled = Catalog::builtin().unwrap();

        assert_eq!(from_file, bundled);
    }

    /// Custom entries are added and overrides replace builtin text
    #[test]
    fn test_merge_builtin_with_custom_yaml() {
        let builtin = Catalog::load("catalogs/builtin.yaml").unwrap();
        let custom = Catalog::load("catalogs/custom.yaml").unwrap();

        let merged = Catalog::merge([&builtin, &custom]);

        assert!(merged.contains("TODO001"));
        assert!(merged.contains("NET002"));
        assert_eq!(
            merged.get("SRV001").unwrap().text,
            "Todo server listening on port {port}"
        );
        assert_eq!(
            builtin.get("SRV001").unwrap().text,
            "Server started on port {port}"
        );
        assert_eq!(merged.len(), builtin.len() + 2);
    }

    #[test]
    fn test_toml_and_yaml_catalogs_merge() {
        let builtin = Catalog::builtin().unwrap();
        let jobs = Catalog::load("catalogs/custom.toml").unwrap();

        let merged = Catalog::merge([&builtin, &jobs]);

        let msg = merged
            .new_message("JOB002", ctx(&[("job_id", "nightly-42")]))
            .unwrap();
        assert_eq!(msg.text, "Job nightly-42 exceeded its deadline");
        assert_eq!(msg.severity, Severity::Error);
        assert_eq!(msg.replies, vec!["retry", "cancel"]);
    }

    #[test]
    fn test_builtin_server_started_scenario() {
        let catalog = Catalog::builtin().unwrap();

        let msg = catalog
            .new_message("SRV001", ctx(&[("port", "8080")]))
            .unwrap();

        assert_eq!(msg.text, "Server started on port 8080");
        assert_eq!(msg.severity, Severity::Info);
        assert!(msg.help.is_none());
    }

    #[test]
    fn test_builtin_critical_entries() {
        let catalog = Catalog::builtin().unwrap();
        let critical: Vec<&str> = catalog
            .iter()
            .filter(|e| e.severity.is_critical())
            .map(|e| e.id.as_str())
            .collect();

        assert_eq!(critical, vec!["DEP002", "SRV003"]);
    }
}
