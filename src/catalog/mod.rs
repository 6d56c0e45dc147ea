// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message catalogs.
//!
//! A [`Catalog`] maps message ids to [`CatalogEntry`] templates. Catalogs are
//! built once (see [`Catalog::load`]) and never mutated afterwards; combining
//! a builtin catalog with application-specific ones is done with
//! [`Catalog::merge`], which returns a new catalog.
//!
//! ```
//! use opsmsg::catalog::Catalog;
//! use opsmsg::message::{Context, Severity};
//!
//! let catalog = Catalog::from_yaml_str(r#"
//! - id: SRV001
//!   severity: INFO
//!   text: "Server started on port {port}"
//! "#).unwrap();
//!
//! let context = Context::from([("port".to_string(), "8080".to_string())]);
//! let msg = catalog.new_message("SRV001", context).unwrap();
//! assert_eq!(msg.text, "Server started on port 8080");
//! assert_eq!(msg.severity, Severity::Info);
//! ```

mod loader;

#[cfg(test)]
mod integration_tests;

use crate::errors::CatalogError;
use crate::message::{substitute, Context, Message, Severity};
use crate::observability::messages::catalog::{
    CatalogsMerged, EntryOverridden, UnknownMessageRequested, UnresolvedPlaceholder,
};
use crate::observability::messages::StructuredLog;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A message template as declared in a catalog source.
///
/// # Example
/// ```yaml
/// - id: SRV002
///   severity: ERROR
///   text: "Failed to bind to port {port}: {error}"
///   help: "Cause: The port is in use. Recovery: Stop the other process or pick another port."
///   replies: ["retry", "abort"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub severity: Severity,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<String>,
}

/// Registry of message templates keyed by id.
///
/// Entries are kept sorted by id, so iteration order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Message ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Instantiate the template `id` with `context`.
    ///
    /// Severity, help and replies are copied from the entry; `{name}`
    /// placeholders in the text are replaced with context values and the
    /// message is stamped with the current UTC time. Placeholders without a
    /// value are kept as written.
    ///
    /// # Errors
    /// [`CatalogError::UnknownMessageId`] if the catalog has no entry `id`.
    pub fn new_message(&self, id: &str, context: Context) -> Result<Message, CatalogError> {
        let entry = self.entries.get(id).ok_or_else(|| {
            UnknownMessageRequested {
                id,
                known_count: self.entries.len(),
            }
            .log();
            CatalogError::UnknownMessageId { id: id.to_string() }
        })?;

        let filled = substitute(&entry.text, &context);
        for placeholder in &filled.unresolved {
            UnresolvedPlaceholder { id, placeholder }.log();
        }

        Ok(Message {
            id: entry.id.clone(),
            severity: entry.severity,
            text: filled.text,
            context,
            timestamp: Utc::now(),
            help: entry.help.clone(),
            replies: entry.replies.clone(),
        })
    }

    /// Combine catalogs into a new one; on an id collision the entry from the
    /// later catalog wins. Inputs are left untouched.
    pub fn merge<'a, I>(catalogs: I) -> Catalog
    where
        I: IntoIterator<Item = &'a Catalog>,
    {
        let mut merged = BTreeMap::new();
        let mut source_count = 0;
        let mut overridden_count = 0;

        for catalog in catalogs {
            source_count += 1;
            for (id, entry) in &catalog.entries {
                if merged.insert(id.clone(), entry.clone()).is_some() {
                    overridden_count += 1;
                    EntryOverridden { id }.log();
                }
            }
        }

        CatalogsMerged {
            source_count,
            entry_count: merged.len(),
            overridden_count,
        }
        .log();

        Catalog { entries: merged }
    }
}

/// Shorthand for [`Catalog::merge`].
pub fn merge<'a, I>(catalogs: I) -> Catalog
where
    I: IntoIterator<Item = &'a Catalog>,
{
    Catalog::merge(catalogs)
}

/// Later entries replace earlier ones with the same id.
impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogEntry>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|entry| (entry.id.clone(), entry))
            .collect();
        Catalog { entries }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::collections::btree_map::Values<'a, String, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
