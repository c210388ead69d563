// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::run_text_processor;
use crate::pipeline::{ProcessorRequest, ProcessorResponse};
use crate::text::{convert_identifier, IdentifierCase};
use crate::traits::{Processor, ProcessorIntent};

/// Identifier Case processor - rewrites each line as camelCase, snake_case, ...
pub struct IdentifierCaseProcessor {
    case: IdentifierCase,
}

impl IdentifierCaseProcessor {
    pub fn new(case: IdentifierCase) -> Self {
        Self { case }
    }

    pub fn case(&self) -> IdentifierCase {
        self.case
    }
}

#[async_trait]
impl Processor for IdentifierCaseProcessor {
    async fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        run_text_processor(self.name(), req.payload, |input| {
            (convert_identifier(input, self.case), None)
        })
    }

    fn name(&self) -> &'static str {
        "identifier_case"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}
