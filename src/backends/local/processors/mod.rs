// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod change_text_case;
pub mod dedup_lines;
pub mod identifier_case;
pub mod text_cleaner;
pub mod text_stats;

pub use change_text_case::*;
pub use dedup_lines::*;
pub use identifier_case::*;
pub use text_cleaner::*;
pub use text_stats::*;

use std::time::Instant;

use crate::observability::messages::{processor::*, StructuredLog};
use crate::pipeline::{PipelineMetadata, ProcessorResponse};

/// Decode the payload, run `f` over it and wrap the result, logging the
/// execution lifecycle under `processor_id`.
///
/// Invalid UTF-8 yields an error outcome with code 400.
pub(crate) fn run_text_processor<F>(processor_id: &'static str, payload: Vec<u8>, f: F) -> ProcessorResponse
where
    F: FnOnce(&str) -> (String, Option<PipelineMetadata>),
{
    let start_msg = ProcessorExecutionStarted {
        processor_id,
        input_size: payload.len(),
    };
    let span = start_msg.span("processor_execution");
    let _guard = span.enter();
    start_msg.log();

    let start_time = Instant::now();

    let input = match String::from_utf8(payload) {
        Ok(text) => text,
        Err(e) => {
            ProcessorExecutionFailed {
                processor_id,
                error: &e,
            }
            .log();
            return ProcessorResponse::error(400, format!("Invalid UTF-8 input: {}", e));
        }
    };

    let (output, metadata) = f(&input);
    let output_bytes = output.into_bytes();

    ProcessorExecutionCompleted {
        processor_id,
        input_size: start_msg.input_size,
        output_size: output_bytes.len(),
        duration: start_time.elapsed(),
    }
    .log();

    ProcessorResponse::payload(output_bytes, metadata)
}

/// Publish `pairs` as metadata under `processor_name`.
pub(crate) fn metadata_for(processor_name: &str, pairs: &[(&str, usize)]) -> PipelineMetadata {
    let mut metadata = PipelineMetadata::new();
    for (key, value) in pairs {
        metadata.add_metadata(processor_name, key, &value.to_string());
    }
    metadata
}
