// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline runs.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Pipeline run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use textsmith::observability::messages::pipeline::PipelineStarted;
///
/// let msg = PipelineStarted {
///     client_key: "203.0.113.7",
///     processor_count: 3,
///     input_size: 42,
/// };
///
/// assert!(msg.to_string().contains("3 processors"));
/// ```
pub struct PipelineStarted<'a> {
    pub client_key: &'a str,
    pub processor_count: usize,
    pub input_size: usize,
}

impl Display for PipelineStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline for '{}': {} processors, input_size={} bytes",
            self.client_key, self.processor_count, self.input_size
        )
    }
}

impl StructuredLog for PipelineStarted<'_> {
    fn log(&self) {
        tracing::info!(
            client_key = self.client_key,
            processor_count = self.processor_count,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline",
            span_name = name,
            client_key = self.client_key,
            processor_count = self.processor_count,
        )
    }
}

/// Pipeline run completed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineCompleted {
    pub processor_count: usize,
    pub failed_count: usize,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for PipelineCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline completed: {} processors ({} failed), output_size={} bytes in {:?}",
            self.processor_count, self.failed_count, self.output_size, self.duration
        )
    }
}

impl StructuredLog for PipelineCompleted {
    fn log(&self) {
        tracing::info!(
            processor_count = self.processor_count,
            failed_count = self.failed_count,
            output_size = self.output_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_completed",
            span_name = name,
            processor_count = self.processor_count,
            duration = ?self.duration,
        )
    }
}

/// A failing processor was skipped under `continue_on_error`.
///
/// # Log Level
/// `warn!` - Degraded behavior
pub struct ProcessorSkipped<'a> {
    pub processor_id: &'a str,
    pub reason: &'a str,
}

impl Display for ProcessorSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Skipping failed processor '{}', keeping previous payload: {}",
            self.processor_id, self.reason
        )
    }
}

impl StructuredLog for ProcessorSkipped<'_> {
    fn log(&self) {
        tracing::warn!(
            processor_id = self.processor_id,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "processor_skipped",
            span_name = name,
            processor_id = self.processor_id,
        )
    }
}
