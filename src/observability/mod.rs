// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for the crate's own diagnostic logging.
//!
//! Catalog and dispatcher code never build log strings inline. Every
//! diagnostic event is a small struct with a `Display` implementation and a
//! [`StructuredLog`](messages::StructuredLog) implementation that emits a
//! `tracing` event carrying the same data as structured fields.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::catalog` - catalog loading, merging and lookup events
//! * `messages::dispatch` - message dispatch and sink events
//!
//! # Usage
//!
//! ```rust
//! use opsmsg::observability::messages::{catalog::UnknownMessageRequested, StructuredLog};
//!
//! let msg = UnknownMessageRequested {
//!     id: "SRV999",
//!     known_count: 12,
//! };
//!
//! msg.log();
//! ```
//!
//! These diagnostics are separate from the operational messages the crate
//! renders: they go wherever the host application's `tracing` subscriber
//! sends them.

pub mod messages;
