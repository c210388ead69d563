// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::{FactoryError, RateLimitError};

/// Errors raised while loading or validating a pipeline configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config declares no processors at all.
    #[error("Configuration must declare at least one processor")]
    NoProcessors,

    #[error("Duplicate processor ID: '{processor_id}'")]
    DuplicateProcessorId { processor_id: String },

    #[error("Processor '{processor_id}' is invalid: {source}")]
    InvalidProcessor {
        processor_id: String,
        #[source]
        source: FactoryError,
    },

    #[error("Invalid rate limit configuration: {0}")]
    RateLimit(#[from] RateLimitError),
}
