// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-client admission control.
//!
//! A token bucket per key, refilled continuously in proportion to elapsed
//! time. Each admitted request spends one token; an empty bucket denies
//! without spending. Denial is a normal [`RateLimitResult`], never an error.

mod config;
mod limiter;

pub use config::RateLimitConfig;
pub use limiter::{BucketState, RateLimitResult, TimestampMs, TokenBucketLimiter};
