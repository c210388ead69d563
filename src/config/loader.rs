// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::validate_config;
use crate::errors::{ConfigError, FailureStrategy};
use crate::observability::messages::{config::ConfigLoaded, StructuredLog};
use crate::rate_limit::RateLimitConfig;

/// Main configuration structure for a text pipeline.
///
/// # Fields
/// * `failure_strategy` - How to handle processor failures (optional, defaults to FailFast)
/// * `rate_limit` - Token bucket admission control per client key (optional)
/// * `processors` - Processors to run, in order
///
/// # Example
/// ```yaml
/// failure_strategy: continue_on_error
/// rate_limit:
///   capacity: 10
///   refill_per_second: 0.5
/// processors:
///   - id: clean
///     impl: text_cleaner
///     options:
///       sort_lines: true
///   - id: stats
///     impl: text_stats
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
    #[serde(default)]
    pub rate_limit: Option<RateLimitConfig>,
    pub processors: Vec<ProcessorConfig>,
}

/// Configuration for a single processor in the pipeline.
///
/// # Fields
/// * `id` - Unique identifier for this processor
/// * `impl_` - Implementation name (`impl` in the file), see
///   [`LocalProcessorFactory`](crate::backends::local::LocalProcessorFactory)
/// * `options` - Processor-specific options; omitted means defaults
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessorConfig {
    pub id: String,
    #[serde(rename = "impl")]
    pub impl_: String,
    #[serde(default)]
    pub options: serde_yaml::Value,
}

/// On-disk configuration syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    parse_config(&content, ConfigFormat::from_path(path))
}

/// Load and validate a config file
///
/// Validation checks processor ids, implementation names, processor options
/// and the rate limit parameters.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let cfg = load_config(path)?;
    validate_config(&cfg)?;

    ConfigLoaded {
        path: &path.display().to_string(),
        processor_count: cfg.processors.len(),
        rate_limited: cfg.rate_limit.is_some(),
    }
    .log();

    Ok(cfg)
}
