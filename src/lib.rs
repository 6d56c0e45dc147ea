// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod catalog;    // message definitions by id
pub mod config;     // config + formatter options
pub mod dispatcher; // entries, sinks and formatters
pub mod errors;     // error handling
pub mod message;    // runtime message + placeholder substitution
pub mod observability;

#[cfg(test)]
mod test_support;  // shared writers and log capture for tests
