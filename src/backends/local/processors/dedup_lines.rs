// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{metadata_for, run_text_processor};
use crate::pipeline::{ProcessorRequest, ProcessorResponse};
use crate::text::{remove_duplicates, RemoveOptions};
use crate::traits::{Processor, ProcessorIntent};

/// Remove Duplicate Lines processor - collapses the payload to unique lines
pub struct RemoveDuplicateLinesProcessor {
    options: RemoveOptions,
}

impl RemoveDuplicateLinesProcessor {
    pub fn new(options: RemoveOptions) -> Self {
        Self { options }
    }
}

impl Default for RemoveDuplicateLinesProcessor {
    fn default() -> Self {
        Self::new(RemoveOptions::default())
    }
}

#[async_trait]
impl Processor for RemoveDuplicateLinesProcessor {
    async fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        run_text_processor(self.name(), req.payload, |input| {
            let result = remove_duplicates(input, &self.options);
            let metadata = metadata_for(
                self.name(),
                &[
                    ("total_lines", result.total_lines),
                    ("unique_lines", result.unique_lines),
                    ("removed_duplicates", result.removed_duplicates),
                ],
            );
            (result.output, Some(metadata))
        })
    }

    fn name(&self) -> &'static str {
        "remove_duplicate_lines"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}
