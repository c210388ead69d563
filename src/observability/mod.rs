// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured logging for textsmith.
//!
//! Every diagnostic event is a small message struct that implements `Display`
//! for the human-readable line and [`messages::StructuredLog`] for the
//! `tracing` event and span carrying the same fields. Keeping the wording in
//! one place avoids format strings scattered across processors.
//!
//! Messages are grouped by subsystem:
//! * `messages::config` - configuration loading
//! * `messages::pipeline` - pipeline runs
//! * `messages::processor` - individual processor executions
//! * `messages::rate_limit` - admission decisions and bucket eviction
//!
//! # Usage
//!
//! ```rust
//! use textsmith::observability::messages::{processor::ProcessorExecutionFailed, StructuredLog};
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! ProcessorExecutionFailed {
//!     processor_id: "text_cleaner",
//!     error: &error,
//! }
//! .log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global `tracing` subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
