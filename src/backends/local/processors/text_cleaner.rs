// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{metadata_for, run_text_processor};
use crate::pipeline::{ProcessorRequest, ProcessorResponse};
use crate::text::{clean_text, TextCleanerOptions};
use crate::traits::{Processor, ProcessorIntent};

/// Text Cleaner processor - one-click cleanup of spacing, blanks, duplicates and order
pub struct TextCleanerProcessor {
    options: TextCleanerOptions,
}

impl TextCleanerProcessor {
    pub fn new(options: TextCleanerOptions) -> Self {
        Self { options }
    }
}

impl Default for TextCleanerProcessor {
    fn default() -> Self {
        Self::new(TextCleanerOptions::default())
    }
}

#[async_trait]
impl Processor for TextCleanerProcessor {
    async fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        run_text_processor(self.name(), req.payload, |input| {
            let result = clean_text(input, &self.options);
            let metadata = metadata_for(
                self.name(),
                &[
                    ("total_lines", result.total_lines),
                    ("output_lines", result.output_lines),
                    ("removed_duplicates", result.removed_duplicates),
                ],
            );
            (result.output, Some(metadata))
        })
    }

    fn name(&self) -> &'static str {
        "text_cleaner"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}
