// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use thiserror::Error;

/// How the pipeline reacts when a processor reports an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    /// Abort on the first failing processor.
    #[default]
    FailFast,
    /// Record the failure and keep the last good payload.
    ContinueOnError,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// The caller exhausted its token bucket. Maps to HTTP 429 at the edge.
    #[error("Rate limit exceeded for '{key}': retry after {retry_after_ms} ms")]
    RateLimited { key: String, retry_after_ms: u64 },

    #[error("Processor '{processor_id}' failed with code {code}: {message}")]
    ProcessorFailed {
        processor_id: String,
        code: i32,
        message: String,
    },

    #[error("Processor '{processor_id}' returned no outcome")]
    NoOutcome { processor_id: String },
}
