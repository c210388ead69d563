// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::pipeline::{ProcessorRequest, ProcessorResponse};

/// What a processor does with the payload it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorIntent {
    /// Produces a new payload for the next processor.
    Transform,
    /// Leaves the payload alone and only contributes metadata.
    Analyze,
}

#[async_trait]
pub trait Processor: Send + Sync {
    async fn process(&self, req: ProcessorRequest) -> ProcessorResponse;

    fn name(&self) -> &'static str;

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}
