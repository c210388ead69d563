// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod factory;
mod pipeline;
mod rate_limit;

pub use config::ConfigError;
pub use factory::FactoryError;
pub use pipeline::{FailureStrategy, PipelineError};
pub use rate_limit::RateLimitError;
