// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured diagnostic logging.
//!
//! * `catalog` - catalog loading, merging and lookup events
//! * `dispatch` - message dispatch and sink events
//!
//! # Usage Pattern
//!
//! ```rust
//! use opsmsg::observability::messages::catalog::CatalogLoaded;
//!
//! let msg = CatalogLoaded {
//!     source: "catalogs/builtin.yaml",
//!     entry_count: 12,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod catalog;
pub mod dispatch;

/// A diagnostic event that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the event through `tracing` at its documented level.
    fn log(&self);

    /// A span carrying the same fields, for wrapping follow-up work.
    fn span(&self, name: &str) -> Span;
}
