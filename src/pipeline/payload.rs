// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request/response envelopes passed between processors.

use serde::Serialize;
use std::collections::BTreeMap;

/// Stage entry naming the processor that produced it.
pub const PROCESSOR_KEY: &str = "processor";

/// Key/value pairs published by one processor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessorMetadata {
    pub metadata: BTreeMap<String, String>,
}

/// Metadata accumulated across a pipeline.
///
/// Processors publish under their own name; a [`Pipeline`](super::Pipeline)
/// re-files each stage's entries under the stage id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineMetadata {
    pub metadata: BTreeMap<String, ProcessorMetadata>,
}

impl PipelineMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_metadata(&mut self, processor_name: &str, key: &str, value: &str) {
        self.metadata
            .entry(processor_name.to_string())
            .or_default()
            .metadata
            .insert(key.to_string(), value.to_string());
    }

    pub fn merge(&mut self, other: &PipelineMetadata) {
        for (processor_name, processor_metadata) in &other.metadata {
            for (key, value) in &processor_metadata.metadata {
                self.add_metadata(processor_name, key, value);
            }
        }
    }

    /// Fold every entry of `other` into one bucket named `stage_id`, and
    /// record the producing processor under [`PROCESSOR_KEY`].
    pub fn merge_for_stage(&mut self, stage_id: &str, processor_name: &str, other: &PipelineMetadata) {
        for processor_metadata in other.metadata.values() {
            for (key, value) in &processor_metadata.metadata {
                self.add_metadata(stage_id, key, value);
            }
        }
        self.add_metadata(stage_id, PROCESSOR_KEY, processor_name);
    }

    pub fn get_metadata_value(&self, processor_name: &str, key: &str) -> Option<&str> {
        self.metadata.get(processor_name)?.metadata.get(key).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessorRequest {
    pub payload: Vec<u8>,
    pub metadata: PipelineMetadata,
}

impl ProcessorRequest {
    pub fn from_text(text: &str) -> Self {
        Self {
            payload: text.as_bytes().to_vec(),
            metadata: PipelineMetadata::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NextPayload(Vec<u8>),
    Error(ErrorDetail),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessorResponse {
    pub outcome: Option<Outcome>,
    pub metadata: Option<PipelineMetadata>,
}

impl ProcessorResponse {
    pub fn payload(bytes: Vec<u8>, metadata: Option<PipelineMetadata>) -> Self {
        Self {
            outcome: Some(Outcome::NextPayload(bytes)),
            metadata,
        }
    }

    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            outcome: Some(Outcome::Error(ErrorDetail {
                code,
                message: message.into(),
            })),
            metadata: None,
        }
    }

    /// Payload as UTF-8 text, if the outcome is a payload.
    pub fn text(&self) -> Option<String> {
        match &self.outcome {
            Some(Outcome::NextPayload(bytes)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_for_stage_keeps_stages_apart() {
        let mut strict = PipelineMetadata::new();
        strict.add_metadata("remove_duplicate_lines", "removed_duplicates", "1");
        let mut loose = PipelineMetadata::new();
        loose.add_metadata("remove_duplicate_lines", "removed_duplicates", "2");

        let mut merged = PipelineMetadata::new();
        merged.merge_for_stage("strict", "remove_duplicate_lines", &strict);
        merged.merge_for_stage("loose", "remove_duplicate_lines", &loose);

        assert_eq!(merged.get_metadata_value("strict", "removed_duplicates"), Some("1"));
        assert_eq!(merged.get_metadata_value("loose", "removed_duplicates"), Some("2"));
        assert_eq!(merged.get_metadata_value("loose", PROCESSOR_KEY), Some("remove_duplicate_lines"));
        assert!(merged.metadata.get("remove_duplicate_lines").is_none());
    }

    #[test]
    fn test_merge_overwrites_per_key() {
        let mut base = PipelineMetadata::new();
        base.add_metadata("stats", "words", "1");
        base.add_metadata("dedup", "removed", "0");

        let mut update = PipelineMetadata::new();
        update.add_metadata("stats", "words", "2");
        update.add_metadata("stats", "lines", "1");

        base.merge(&update);
        assert_eq!(base.get_metadata_value("stats", "words"), Some("2"));
        assert_eq!(base.get_metadata_value("stats", "lines"), Some("1"));
        assert_eq!(base.get_metadata_value("dedup", "removed"), Some("0"));
        assert_eq!(base.get_metadata_value("missing", "x"), None);
    }

    #[test]
    fn test_response_text() {
        assert_eq!(ProcessorResponse::payload(b"hi".to_vec(), None).text().as_deref(), Some("hi"));
        assert_eq!(ProcessorResponse::error(400, "nope").text(), None);
    }
}
