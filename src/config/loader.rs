// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::Catalog;
use crate::config::consts::{
    DEFAULT_MIN_LEVEL, DEFAULT_TIMESTAMP_FORMAT, DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH,
};
use crate::dispatcher::Level;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration.
///
/// Every field is optional. Missing values fall back to the constants in
/// [`crate::config::consts`].
///
/// # Fields
/// * `catalogs` - Extra catalog files merged after the builtin catalog, in order
/// * `include_builtin` - Whether the bundled catalog is loaded first (defaults to true)
/// * `min_level` - Entries below this level are not written
/// * `formatter` - Rendering options
///
/// # Example
/// ```yaml
/// catalogs: [catalogs/custom.yaml]
/// include_builtin: true
/// min_level: info
/// formatter:
///   style: box
///   width: 80
///   disable_colors: false
///   timestamp_format: "%Y-%m-%dT%H:%M:%SZ"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalogs: Vec<PathBuf>,
    pub include_builtin: Option<bool>,
    pub min_level: Option<Level>,
    #[serde(default)]
    pub formatter: FormatterOptions,
}

impl Config {
    pub fn get_include_builtin(&self) -> bool {
        self.include_builtin.unwrap_or(true)
    }

    pub fn get_min_level(&self) -> Level {
        self.min_level.unwrap_or(DEFAULT_MIN_LEVEL)
    }

    /// Load and merge every configured catalog.
    ///
    /// The builtin catalog comes first unless disabled, then each listed
    /// file. Later catalogs override earlier ones. Any catalog that fails to
    /// load fails the whole call.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let mut catalogs = Vec::with_capacity(self.catalogs.len() + 1);
        if self.get_include_builtin() {
            catalogs.push(Catalog::builtin()?);
        }
        for path in &self.catalogs {
            catalogs.push(Catalog::load(path)?);
        }
        Ok(Catalog::merge(&catalogs))
    }
}

/// Output style of a rendered message.
///
/// # Variants
/// * `Box` - Framed multi-line block with colors
/// * `Simple` - One header line plus indented detail lines
/// * `Json` - One JSON object per line
#[derive(Debug, Default, Deserialize, PartialEq, Eq, Clone, Copy, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FormatterStyle {
    #[default]
    Box,
    Simple,
    Json,
}

/// Rendering options shared by the formatters.
///
/// # Example
/// ```
/// use opsmsg::config::FormatterOptions;
///
/// let options = FormatterOptions { width: Some(4), ..FormatterOptions::default() };
/// assert_eq!(options.get_width(), 20); // Clamped to the minimum
/// ```
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct FormatterOptions {
    pub style: Option<FormatterStyle>,
    pub width: Option<usize>,
    #[serde(default)]
    pub disable_colors: bool,
    pub timestamp_format: Option<String>,
}

impl FormatterOptions {
    pub fn get_style(&self) -> FormatterStyle {
        self.style.unwrap_or_default()
    }

    /// Box width in columns. Unset or zero means the default; anything else
    /// is clamped to [`MIN_WIDTH`, `MAX_WIDTH`].
    pub fn get_width(&self) -> usize {
        match self.width {
            None | Some(0) => DEFAULT_WIDTH,
            Some(width) => width.clamp(MIN_WIDTH, MAX_WIDTH),
        }
    }

    pub fn get_timestamp_format(&self) -> &str {
        self.timestamp_format
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_TIMESTAMP_FORMAT)
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty file is an all-defaults config
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
