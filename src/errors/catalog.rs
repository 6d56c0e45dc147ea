// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for catalog loading and message lookup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog or instantiating a message
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source could not be read
    #[error("failed to read catalog '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not a valid catalog document (syntax or schema violation)
    #[error("invalid catalog '{}': {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// The file extension does not name a supported catalog format
    #[error("unsupported catalog format for '{}' (expected .yaml, .yml or .toml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// An entry has an empty `id`
    #[error("invalid catalog '{}': entry #{index} has an empty id", path.display())]
    EmptyId { path: PathBuf, index: usize },

    /// The same id appears twice within a single source
    #[error("invalid catalog '{}': duplicate message id '{id}'", path.display())]
    DuplicateId { path: PathBuf, id: String },

    /// A message was requested for an id the catalog does not define
    #[error("unknown message id '{id}'")]
    UnknownMessageId { id: String },
}

impl CatalogError {
    /// Whether this error happened while loading (the catalog is unusable),
    /// as opposed to a failed lookup in a good catalog.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, CatalogError::UnknownMessageId { .. })
    }
}
