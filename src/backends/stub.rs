// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::pipeline::{ProcessorRequest, ProcessorResponse};
use crate::traits::Processor;

/// A processor that always fails for testing failure scenarios
#[derive(Default)]
pub struct FailingProcessor;

impl FailingProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Processor for FailingProcessor {
    async fn process(&self, _req: ProcessorRequest) -> ProcessorResponse {
        ProcessorResponse::error(500, "Simulated processor failure")
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// A processor that answers without an outcome
pub struct NoOutcomeProcessor;

#[async_trait::async_trait]
impl Processor for NoOutcomeProcessor {
    async fn process(&self, _req: ProcessorRequest) -> ProcessorResponse {
        ProcessorResponse {
            outcome: None,
            metadata: None,
        }
    }

    fn name(&self) -> &'static str {
        "no_outcome"
    }
}
