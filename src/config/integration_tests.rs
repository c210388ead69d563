// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use crate::config::load_and_validate_config;
    use crate::errors::{ConfigError, FailureStrategy, PipelineError};
    use crate::pipeline::{Pipeline, ProcessorRequest};
    use crate::rate_limit::RateLimitConfig;
    use std::io::Write;

    /// Test that the YAML sample configuration loads and validates
    #[test]
    fn test_clean_and_count_yaml_loading() {
        let config = load_and_validate_config("configs/clean-and-count.yaml").unwrap();

        assert_eq!(config.failure_strategy, FailureStrategy::FailFast);
        assert_eq!(
            config.rate_limit,
            Some(RateLimitConfig::new(3.0, 0.5).with_sweep_interval(1000))
        );
        assert_eq!(config.processors.len(), 2);
        assert_eq!(config.processors[0].id, "clean");
        assert_eq!(config.processors[1].impl_, "text_stats");
    }

    /// Test that the TOML sample configuration loads and validates
    #[test]
    fn test_unique_lines_toml_loading() {
        let config = load_and_validate_config("configs/unique-lines.toml").unwrap();

        assert_eq!(config.failure_strategy, FailureStrategy::ContinueOnError);
        assert!(config.rate_limit.is_none());
        assert_eq!(config.processors[0].impl_, "remove_duplicate_lines");
        assert_eq!(config.processors[1].impl_, "identifier_case_snake");
    }

    /// Clean, then analyze, from the YAML sample
    #[tokio::test]
    async fn test_clean_and_count_end_to_end() {
        let config = load_and_validate_config("configs/clean-and-count.yaml").unwrap();
        let pipeline = Pipeline::from_config(&config).unwrap();
        assert_eq!(pipeline.stages().len(), 2);

        let output = pipeline
            .run_at("client-a", 0, ProcessorRequest::from_text("b  x\n\nB x\nfoo"))
            .await
            .unwrap();

        assert_eq!(output.text(), "b x\nfoo");
        assert_eq!(output.metadata.get_metadata_value("clean", "removed_duplicates"), Some("1"));
        assert_eq!(output.metadata.get_metadata_value("clean", "total_lines"), Some("4"));
        assert_eq!(output.metadata.get_metadata_value("stats", "words"), Some("3"));
        assert_eq!(output.metadata.get_metadata_value("stats", "lines"), Some("2"));
        assert_eq!(output.admission.map(|a| a.remaining), Some(2));
    }

    /// The configured bucket rejects the fourth burst request
    #[tokio::test]
    async fn test_rate_limit_from_config() {
        let config = load_and_validate_config("configs/clean-and-count.yaml").unwrap();
        let pipeline = Pipeline::from_config(&config).unwrap();

        for _ in 0..3 {
            assert!(pipeline.run_at("burst", 0, ProcessorRequest::from_text("x")).await.is_ok());
        }
        let denied = pipeline.run_at("burst", 0, ProcessorRequest::from_text("x")).await;
        assert_eq!(
            denied,
            Err(PipelineError::RateLimited {
                key: "burst".to_string(),
                retry_after_ms: 2000,
            })
        );

        // Half a token per second: one token back after two seconds.
        assert!(pipeline.run_at("burst", 2000, ProcessorRequest::from_text("x")).await.is_ok());
    }

    /// Case-insensitive keep-last dedupe feeding identifier conversion
    #[tokio::test]
    async fn test_unique_lines_end_to_end() {
        let config = load_and_validate_config("configs/unique-lines.toml").unwrap();
        let pipeline = Pipeline::from_config(&config).unwrap();
        assert!(pipeline.rate_limiter().is_none());

        let output = pipeline
            .run("cli", ProcessorRequest::from_text("Hello World\nfoo bar\nhello world"))
            .await
            .unwrap();

        assert_eq!(output.text(), "foo_bar\nhello_world");
        assert_eq!(
            output.metadata.get_metadata_value("dedupe", "removed_duplicates"),
            Some("1")
        );
        assert!(output.failures.is_empty());
    }

    /// Invalid UTF-8 fails every stage; continue_on_error passes the input through
    #[tokio::test]
    async fn test_continue_on_error_with_undecodable_input() {
        let config = load_and_validate_config("configs/unique-lines.toml").unwrap();
        let pipeline = Pipeline::from_config(&config).unwrap();

        let request = ProcessorRequest {
            payload: vec![0xff, 0xfe],
            ..ProcessorRequest::default()
        };
        let output = pipeline.run("cli", request).await.unwrap();

        assert_eq!(output.payload, vec![0xff, 0xfe]);
        assert_eq!(output.failures.len(), 2);
        assert!(matches!(
            &output.failures[0],
            PipelineError::ProcessorFailed { processor_id, code: 400, .. } if processor_id == "dedupe"
        ));
    }

    /// Two stages with the same implementation report their own counts
    #[tokio::test]
    async fn test_repeated_implementation_keeps_metadata_per_stage() {
        let yaml = r#"
processors:
  - id: dedupe_strict
    impl: remove_duplicate_lines
  - id: dedupe_loose
    impl: remove_duplicate_lines
    options:
      case_sensitive: false
"#;
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = load_and_validate_config(file.path()).unwrap();
        let pipeline = Pipeline::from_validated_config(&config).unwrap();
        let output = pipeline.run("cli", ProcessorRequest::from_text("a\na\nA\nb")).await.unwrap();

        assert_eq!(output.text(), "a\nb");
        let metadata = &output.metadata;
        assert_eq!(metadata.get_metadata_value("dedupe_strict", "total_lines"), Some("4"));
        assert_eq!(metadata.get_metadata_value("dedupe_strict", "removed_duplicates"), Some("1"));
        assert_eq!(metadata.get_metadata_value("dedupe_loose", "total_lines"), Some("3"));
        assert_eq!(metadata.get_metadata_value("dedupe_loose", "removed_duplicates"), Some("1"));
        assert_eq!(metadata.get_metadata_value("dedupe_loose", "processor"), Some("remove_duplicate_lines"));
        assert_eq!(metadata.metadata.len(), 2);
    }

    #[test]
    fn test_unknown_implementation_rejected() {
        let yaml = r#"
processors:
  - id: mystery
    impl: reverse_everything
"#;
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        match load_and_validate_config(file.path()) {
            Err(ConfigError::InvalidProcessor { processor_id, .. }) => assert_eq!(processor_id, "mystery"),
            other => panic!("Expected invalid processor error, got {:?}", other.map(|c| c.processors.len())),
        }
    }

    #[test]
    fn test_invalid_rate_limit_rejected() {
        let toml = r#"
[rate_limit]
capacity = 0
refill_per_second = 1

[[processors]]
id = "stats"
impl = "text_stats"
"#;
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        assert!(matches!(
            load_and_validate_config(file.path()),
            Err(ConfigError::RateLimit(_))
        ));
    }
}
