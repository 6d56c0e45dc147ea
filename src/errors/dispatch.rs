// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors returned when a sink rejects a dispatched message
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Writing the formatted entry to the sink failed
    #[error("failed to write message '{id}' to sink: {source}")]
    Write {
        id: String,
        #[source]
        source: std::io::Error,
    },
}
