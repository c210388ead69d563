// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::processors::*;
use crate::config::ProcessorConfig;
use crate::errors::FactoryError;
use crate::text::{IdentifierCase, RemoveOptions, TextCase, TextCleanerOptions};
use crate::traits::Processor;

const CHANGE_TEXT_CASE_PREFIX: &str = "change_text_case_";
const IDENTIFIER_CASE_PREFIX: &str = "identifier_case_";

/// Factory for creating local (in-process) processor instances
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create a processor instance from configuration
    ///
    /// The `impl` field in the config determines which processor to create:
    /// - "remove_duplicate_lines" -> RemoveDuplicateLinesProcessor (options: RemoveOptions)
    /// - "text_cleaner" -> TextCleanerProcessor (options: TextCleanerOptions)
    /// - "change_text_case_<case>" -> ChangeTextCaseProcessor, e.g. "change_text_case_title"
    /// - "identifier_case_<case>" -> IdentifierCaseProcessor, e.g. "identifier_case_snake"
    /// - "text_stats" -> TextStatsProcessor
    pub fn create_processor(config: &ProcessorConfig) -> Result<Arc<dyn Processor>, FactoryError> {
        let impl_name = config.impl_.as_str();

        match impl_name {
            "remove_duplicate_lines" => {
                let options: RemoveOptions = parse_options(impl_name, &config.options)?;
                Ok(Arc::new(RemoveDuplicateLinesProcessor::new(options)))
            }
            "text_cleaner" => {
                let options: TextCleanerOptions = parse_options(impl_name, &config.options)?;
                Ok(Arc::new(TextCleanerProcessor::new(options)))
            }
            "text_stats" => Ok(Arc::new(TextStatsProcessor::new())),
            _ => {
                if let Some(case) = impl_name.strip_prefix(CHANGE_TEXT_CASE_PREFIX) {
                    let case: TextCase = case
                        .parse()
                        .map_err(|_| FactoryError::UnknownImplementation(impl_name.to_string()))?;
                    return Ok(Arc::new(ChangeTextCaseProcessor::new(case)));
                }
                if let Some(case) = impl_name.strip_prefix(IDENTIFIER_CASE_PREFIX) {
                    let case: IdentifierCase = case
                        .parse()
                        .map_err(|_| FactoryError::UnknownImplementation(impl_name.to_string()))?;
                    return Ok(Arc::new(IdentifierCaseProcessor::new(case)));
                }
                Err(FactoryError::UnknownImplementation(impl_name.to_string()))
            }
        }
    }

    /// List all available local processor implementations
    pub fn list_available_implementations() -> Vec<String> {
        let mut names = vec![
            "remove_duplicate_lines".to_string(),
            "text_cleaner".to_string(),
            "text_stats".to_string(),
        ];
        names.extend(
            TextCase::ALL
                .iter()
                .map(|case| format!("{}{}", CHANGE_TEXT_CASE_PREFIX, case.as_str())),
        );
        names.extend(
            IdentifierCase::ALL
                .iter()
                .map(|case| format!("{}{}", IDENTIFIER_CASE_PREFIX, case.as_str())),
        );
        names
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(impl_name: &str) -> bool {
        Self::list_available_implementations()
            .iter()
            .any(|name| name == impl_name)
    }
}

/// Missing or `null` options fall back to the type's defaults.
fn parse_options<T>(impl_name: &str, options: &serde_yaml::Value) -> Result<T, FactoryError>
where
    T: DeserializeOwned + Default,
{
    if options.is_null() {
        return Ok(T::default());
    }
    serde_yaml::from_value(options.clone()).map_err(|e| FactoryError::InvalidOptions {
        implementation: impl_name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ProcessorRequest;
    use crate::traits::ProcessorIntent;

    fn create_test_config(id: &str, impl_name: &str) -> ProcessorConfig {
        ProcessorConfig {
            id: id.to_string(),
            impl_: impl_name.to_string(),
            options: serde_yaml::Value::Null,
        }
    }

    fn with_options(impl_name: &str, yaml: &str) -> ProcessorConfig {
        ProcessorConfig {
            options: serde_yaml::from_str(yaml).unwrap(),
            ..create_test_config("test", impl_name)
        }
    }

    #[tokio::test]
    async fn test_create_change_text_case_processors() {
        let test_cases = vec![
            ("change_text_case_upper", "hello", "HELLO"),
            ("change_text_case_lower", "HELLO", "hello"),
            ("change_text_case_proper", "hello world", "Hello World"),
            ("change_text_case_title", "the quick brown fox", "The Quick Brown Fox"),
        ];

        for (impl_name, input, expected) in test_cases {
            let config = create_test_config("test", impl_name);
            let processor = LocalProcessorFactory::create_processor(&config)
                .unwrap_or_else(|e| panic!("Failed to create processor {}: {}", impl_name, e));

            let response = processor.process(ProcessorRequest::from_text(input)).await;
            assert_eq!(response.text().as_deref(), Some(expected), "Failed for implementation: {}", impl_name);
        }
    }

    #[tokio::test]
    async fn test_create_identifier_case_processor() {
        let processor =
            LocalProcessorFactory::create_processor(&create_test_config("test", "identifier_case_constant")).unwrap();
        let response = processor.process(ProcessorRequest::from_text("max retries")).await;
        assert_eq!(response.text().as_deref(), Some("MAX_RETRIES"));
    }

    #[tokio::test]
    async fn test_dedup_options_are_applied() {
        let config = with_options("remove_duplicate_lines", "case_sensitive: false");
        let processor = LocalProcessorFactory::create_processor(&config).unwrap();
        let response = processor.process(ProcessorRequest::from_text("a\nA\nb")).await;
        assert_eq!(response.text().as_deref(), Some("a\nb"));
    }

    #[tokio::test]
    async fn test_cleaner_options_are_applied() {
        let config = with_options("text_cleaner", "{ sort_lines: true, remove_duplicate_lines: false }");
        let processor = LocalProcessorFactory::create_processor(&config).unwrap();
        let response = processor.process(ProcessorRequest::from_text("b\na\nb")).await;
        assert_eq!(response.text().as_deref(), Some("a\nb\nb"));
    }

    #[test]
    fn test_text_stats_is_analyze() {
        let processor = LocalProcessorFactory::create_processor(&create_test_config("test", "text_stats")).unwrap();
        assert_eq!(processor.declared_intent(), ProcessorIntent::Analyze);
        assert_eq!(processor.name(), "text_stats");
    }

    #[test]
    fn test_invalid_options_rejected() {
        let config = with_options("text_cleaner", "sort_lines: maybe");
        match LocalProcessorFactory::create_processor(&config) {
            Err(FactoryError::InvalidOptions { implementation, .. }) => assert_eq!(implementation, "text_cleaner"),
            Err(other) => panic!("Unexpected error: {}", other),
            Ok(_) => panic!("Expected invalid options error"),
        }
    }

    #[test]
    fn test_create_processor_unknown_impl() {
        for name in ["unknown_processor", "change_text_case_shouty", "identifier_case_"] {
            let result = LocalProcessorFactory::create_processor(&create_test_config("test", name));
            let error_msg = result.err().map(|e| e.to_string()).unwrap_or_default();
            assert!(error_msg.contains("Unknown local processor implementation"), "{}", name);
        }
    }

    #[test]
    fn test_list_available_implementations() {
        let implementations = LocalProcessorFactory::list_available_implementations();
        assert!(implementations.contains(&"change_text_case_upper".to_string()));
        assert!(implementations.contains(&"identifier_case_camel".to_string()));
        assert!(implementations.contains(&"remove_duplicate_lines".to_string()));
        assert_eq!(implementations.len(), 3 + TextCase::ALL.len() + IdentifierCase::ALL.len());
    }

    #[test]
    fn test_is_implementation_available() {
        assert!(LocalProcessorFactory::is_implementation_available("text_cleaner"));
        assert!(LocalProcessorFactory::is_implementation_available("identifier_case_train"));
        assert!(!LocalProcessorFactory::is_implementation_available("nonexistent_processor"));
    }
}
