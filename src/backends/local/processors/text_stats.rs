// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{metadata_for, run_text_processor};
use crate::pipeline::{ProcessorRequest, ProcessorResponse};
use crate::text::count_text_stats;
use crate::traits::{Processor, ProcessorIntent};

/// Text Stats processor - counts words, characters, sentences and paragraphs
///
/// The payload it returns is the stats as JSON; inside a pipeline only the
/// metadata is kept since this is an analyze processor.
#[derive(Default)]
pub struct TextStatsProcessor;

impl TextStatsProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Processor for TextStatsProcessor {
    async fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        run_text_processor(self.name(), req.payload, |input| {
            let stats = count_text_stats(input);
            let metadata = metadata_for(
                self.name(),
                &[
                    ("words", stats.words),
                    ("characters", stats.characters),
                    ("characters_no_spaces", stats.characters_no_spaces),
                    ("sentences", stats.sentences),
                    ("paragraphs", stats.paragraphs),
                    ("lines", stats.lines),
                    ("reading_time_minutes", stats.reading_time_minutes),
                    ("speaking_time_minutes", stats.speaking_time_minutes),
                ],
            );
            // Plain integers and field names only, serialization cannot fail.
            let json = serde_json::to_string(&stats).unwrap_or_default();
            (json, Some(metadata))
        })
    }

    fn name(&self) -> &'static str {
        "text_stats"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Analyze
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reports_counts_as_json_and_metadata() {
        let response = TextStatsProcessor::new()
            .process(ProcessorRequest::from_text("Hello world"))
            .await;

        let json: serde_json::Value = serde_json::from_str(&response.text().unwrap()).unwrap();
        assert_eq!(json["words"], 2);
        assert_eq!(json["characters"], 11);
        assert_eq!(json["characters_no_spaces"], 10);

        let metadata = response.metadata.unwrap();
        assert_eq!(metadata.get_metadata_value("text_stats", "words"), Some("2"));
        assert_eq!(metadata.get_metadata_value("text_stats", "characters"), Some("11"));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let response = TextStatsProcessor::new().process(ProcessorRequest::from_text("")).await;
        let metadata = response.metadata.unwrap();
        assert_eq!(metadata.get_metadata_value("text_stats", "words"), Some("0"));
        assert_eq!(metadata.get_metadata_value("text_stats", "characters"), Some("0"));
    }
}
