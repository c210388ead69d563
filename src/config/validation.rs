// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use crate::backends::local::LocalProcessorFactory;
use crate::config::Config;
use crate::errors::ConfigError;

/// Check a parsed config before anything is built from it.
///
/// Every processor is instantiated once so unknown implementation names and
/// malformed `options` blocks are caught here rather than at run time.
pub fn validate_config(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.processors.is_empty() {
        return Err(ConfigError::NoProcessors);
    }

    let mut ids = HashSet::new();
    for processor in &cfg.processors {
        if !ids.insert(processor.id.as_str()) {
            return Err(ConfigError::DuplicateProcessorId {
                processor_id: processor.id.clone(),
            });
        }
        LocalProcessorFactory::create_processor(processor).map_err(|source| ConfigError::InvalidProcessor {
            processor_id: processor.id.clone(),
            source,
        })?;
    }

    if let Some(rate_limit) = &cfg.rate_limit {
        rate_limit.validate()?;
    }

    Ok(())
}
