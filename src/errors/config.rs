// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::CatalogError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A catalog named by the configuration failed to load
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
