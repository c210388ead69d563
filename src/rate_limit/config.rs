// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;

use crate::errors::RateLimitError;

/// Token bucket parameters, fixed for the lifetime of a limiter.
///
/// # Example
/// ```yaml
/// rate_limit:
///   capacity: 60
///   refill_per_second: 1.0
///   sweep_interval: 10000
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateLimitConfig {
    /// Bucket size; also the burst a fresh client may spend at once.
    pub capacity: f64,
    /// Continuous refill rate. Zero means buckets never refill.
    pub refill_per_second: f64,
    /// Evict idle buckets every `sweep_interval` checks. `None` disables the sweep.
    #[serde(default)]
    pub sweep_interval: Option<u64>,
}

impl RateLimitConfig {
    pub fn new(capacity: f64, refill_per_second: f64) -> Self {
        Self {
            capacity,
            refill_per_second,
            sweep_interval: None,
        }
    }

    pub fn with_sweep_interval(mut self, every: u64) -> Self {
        self.sweep_interval = Some(every);
        self
    }

    pub fn validate(&self) -> Result<(), RateLimitError> {
        if !self.capacity.is_finite() || self.capacity < 1.0 {
            return Err(RateLimitError::InvalidCapacity(self.capacity));
        }
        if !self.refill_per_second.is_finite() || self.refill_per_second < 0.0 {
            return Err(RateLimitError::InvalidRefillRate(self.refill_per_second));
        }
        Ok(())
    }
}
