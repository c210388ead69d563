// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::run_text_processor;
use crate::pipeline::{ProcessorRequest, ProcessorResponse};
use crate::text::{change_case, TextCase};
use crate::traits::{Processor, ProcessorIntent};

/// Change Text Case processor - converts text to different cases
pub struct ChangeTextCaseProcessor {
    case: TextCase,
}

impl ChangeTextCaseProcessor {
    pub fn new(case: TextCase) -> Self {
        Self { case }
    }

    pub fn upper() -> Self {
        Self::new(TextCase::Upper)
    }

    pub fn lower() -> Self {
        Self::new(TextCase::Lower)
    }

    pub fn title() -> Self {
        Self::new(TextCase::Title)
    }

    pub fn case(&self) -> TextCase {
        self.case
    }
}

#[async_trait]
impl Processor for ChangeTextCaseProcessor {
    async fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        run_text_processor(self.name(), req.payload, |input| {
            (change_case(input, self.case), None)
        })
    }

    fn name(&self) -> &'static str {
        "change_text_case"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_each_case() {
        let cases = vec![
            (TextCase::Upper, "hello", "HELLO"),
            (TextCase::Lower, "HELLO", "hello"),
            (TextCase::Proper, "hello world", "Hello World"),
            (TextCase::Title, "the quick brown fox", "The Quick Brown Fox"),
            (TextCase::Sentence, "one. two", "One. Two"),
            (TextCase::Inverse, "aB", "Ab"),
        ];

        for (case, input, expected) in cases {
            let response = ChangeTextCaseProcessor::new(case)
                .process(ProcessorRequest::from_text(input))
                .await;
            assert_eq!(response.text().as_deref(), Some(expected), "Failed for case: {:?}", case);
            assert!(response.metadata.is_none());
        }
    }
}
