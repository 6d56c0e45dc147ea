// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use crate::config::{load_config, FormatterStyle};
    use crate::dispatcher::formatters::{build_formatter, Formatter};
    use crate::dispatcher::{message_entry, Level};
    use crate::message::Context;

    /// The sample configuration loads and names the custom catalogs
    #[test]
    fn test_sample_config_loading() {
        let config = load_config("configs/opsmsg.yaml").unwrap();

        assert!(config.get_include_builtin());
        assert_eq!(config.get_min_level(), Level::Info);
        assert_eq!(config.formatter.get_style(), FormatterStyle::Box);
        assert_eq!(config.formatter.get_width(), 80);
        assert_eq!(config.catalogs.len(), 2);
    }

    /// Catalogs listed in the config override the builtin ones in order
    #[test]
    fn test_sample_config_catalog_merge() {
        let config = load_config("configs/opsmsg.yaml").unwrap();
        let catalog = config.load_catalog().unwrap();

        assert!(catalog.contains("APP001"));
        assert!(catalog.contains("TODO001"));
        assert!(catalog.contains("JOB002"));
        assert_eq!(
            catalog.get("SRV001").unwrap().text,
            "Todo server listening on port {port}"
        );
    }

    /// A message from a configured catalog renders through the configured formatter
    #[test]
    fn test_config_to_rendered_box() {
        let mut config = load_config("configs/opsmsg.yaml").unwrap();
        config.formatter.disable_colors = true;
        let catalog = config.load_catalog().unwrap();

        let context = Context::from([("port".to_string(), "3000".to_string())]);
        let msg = catalog.new_message("SRV001", context).unwrap();
        let output = build_formatter(&config.formatter).format(&message_entry(&msg));

        assert!(output.contains("Todo server listening on port 3000"));
        for line in output.lines() {
            assert_eq!(line.chars().count(), 80);
        }
    }
}
