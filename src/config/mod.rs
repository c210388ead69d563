// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod validation;

#[cfg(test)]
mod integration_tests;

pub use loader::{
    load_and_validate_config, load_config, parse_config, Config, ConfigFormat, ProcessorConfig,
};
pub use validation::validate_config;
