// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Construction-time errors for the rate limiter.
///
/// `check` itself never fails; a denial is an ordinary result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateLimitError {
    #[error("capacity must be a finite number >= 1, got {0}")]
    InvalidCapacity(f64),

    #[error("refill_per_second must be a finite number >= 0, got {0}")]
    InvalidRefillRate(f64),
}
