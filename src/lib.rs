// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;      // processor backends
pub mod config;        // yaml/toml pipeline config
pub mod errors;        // error handling
pub mod observability;
pub mod pipeline;      // sequential executor
pub mod rate_limit;    // per-key token buckets
pub mod text;          // pure text utilities
pub mod traits;        // unified abstractions
