// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for catalog events.
//!
//! This module contains message types for logging events related to:
//! * Catalog loading from files and bundled sources
//! * Catalog merging and id overrides
//! * Message lookup and template substitution

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Catalog loaded successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use opsmsg::observability::messages::catalog::CatalogLoaded;
///
/// let msg = CatalogLoaded {
///     source: "catalogs/custom.yaml",
///     entry_count: 4,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct CatalogLoaded<'a> {
    pub source: &'a str,
    pub entry_count: usize,
}

impl Display for CatalogLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded catalog '{}' with {} messages",
            self.source, self.entry_count
        )
    }
}

impl StructuredLog for CatalogLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            entry_count = self.entry_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "catalog_loaded",
            span_name = name,
            source = self.source,
            entry_count = self.entry_count,
        )
    }
}

/// Several catalogs merged into one.
///
/// # Log Level
/// `debug!` - Diagnostic detail
///
/// # Example
/// ```
/// use opsmsg::observability::messages::catalog::CatalogsMerged;
///
/// let msg = CatalogsMerged {
///     source_count: 2,
///     entry_count: 14,
///     overridden_count: 1,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct CatalogsMerged {
    pub source_count: usize,
    pub entry_count: usize,
    pub overridden_count: usize,
}

impl Display for CatalogsMerged {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Merged {} catalogs into {} messages ({} overridden)",
            self.source_count, self.entry_count, self.overridden_count
        )
    }
}

impl StructuredLog for CatalogsMerged {
    fn log(&self) {
        tracing::debug!(
            source_count = self.source_count,
            entry_count = self.entry_count,
            overridden_count = self.overridden_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "catalogs_merged",
            span_name = name,
            source_count = self.source_count,
            entry_count = self.entry_count,
            overridden_count = self.overridden_count,
        )
    }
}

/// A later catalog replaced an entry defined by an earlier one.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct EntryOverridden<'a> {
    pub id: &'a str,
}

impl Display for EntryOverridden<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Message '{}' overridden by a later catalog", self.id)
    }
}

impl StructuredLog for EntryOverridden<'_> {
    fn log(&self) {
        tracing::debug!(id = self.id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("entry_overridden", span_name = name, id = self.id)
    }
}

/// A message was requested for an id the catalog does not define.
///
/// # Log Level
/// `warn!` - Caller bug or stale catalog
///
/// # Example
/// ```
/// use opsmsg::observability::messages::catalog::UnknownMessageRequested;
///
/// let msg = UnknownMessageRequested {
///     id: "SRV999",
///     known_count: 12,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct UnknownMessageRequested<'a> {
    pub id: &'a str,
    pub known_count: usize,
}

impl Display for UnknownMessageRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unknown message id '{}' requested ({} ids in catalog)",
            self.id, self.known_count
        )
    }
}

impl StructuredLog for UnknownMessageRequested<'_> {
    fn log(&self) {
        tracing::warn!(
            id = self.id,
            known_count = self.known_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "unknown_message_requested",
            span_name = name,
            id = self.id,
            known_count = self.known_count,
        )
    }
}

/// A template placeholder had no matching context value.
///
/// # Log Level
/// `debug!` - The placeholder is kept verbatim in the rendered text
pub struct UnresolvedPlaceholder<'a> {
    pub id: &'a str,
    pub placeholder: &'a str,
}

impl Display for UnresolvedPlaceholder<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Message '{}' has no context value for placeholder '{{{}}}'",
            self.id, self.placeholder
        )
    }
}

impl StructuredLog for UnresolvedPlaceholder<'_> {
    fn log(&self) {
        tracing::debug!(
            id = self.id,
            placeholder = self.placeholder,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "unresolved_placeholder",
            span_name = name,
            id = self.id,
            placeholder = self.placeholder,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        let loaded = CatalogLoaded {
            source: "builtin",
            entry_count: 3,
        };
        assert_eq!(loaded.to_string(), "Loaded catalog 'builtin' with 3 messages");

        let unresolved = UnresolvedPlaceholder {
            id: "API002",
            placeholder: "limit",
        };
        assert_eq!(
            unresolved.to_string(),
            "Message 'API002' has no context value for placeholder '{limit}'"
        );
    }
}
