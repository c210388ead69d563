// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use super::config::RateLimitConfig;
use crate::errors::RateLimitError;
use crate::observability::messages::rate_limit::{IdleBucketsEvicted, RequestDenied};
use crate::observability::messages::StructuredLog;

/// Milliseconds since the Unix epoch.
pub type TimestampMs = u64;

/// Per-key bucket. `0 <= tokens <= capacity` holds after every check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketState {
    pub tokens: f64,
    pub last_refill: TimestampMs,
}

/// Outcome of a single admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitResult {
    pub allowed: bool,
    /// Whole tokens left after this check.
    pub remaining: u64,
    /// Time until at least one token is available. `u64::MAX` when the
    /// bucket is empty and never refills.
    pub reset_ms: u64,
}

#[derive(Default)]
struct Buckets {
    by_key: HashMap<String, BucketState>,
    checks: u64,
    /// Newest timestamp any check has used.
    latest: TimestampMs,
}

/// Per-key token bucket limiter with continuous refill.
///
/// The key map sits behind a mutex and each check (lookup, refill, consume)
/// runs as one critical section, so a single limiter can be shared across
/// threads behind an `Arc`.
///
/// ```
/// use textsmith::rate_limit::{RateLimitConfig, TokenBucketLimiter};
///
/// let limiter = TokenBucketLimiter::new(RateLimitConfig::new(1.0, 1.0))?;
/// assert!(limiter.check_at("client", 0).allowed);
/// assert!(!limiter.check_at("client", 0).allowed);
/// assert!(limiter.check_at("client", 1_000).allowed);
/// # Ok::<(), textsmith::errors::RateLimitError>(())
/// ```
pub struct TokenBucketLimiter {
    config: RateLimitConfig,
    buckets: Mutex<Buckets>,
}

impl TokenBucketLimiter {
    pub fn new(config: RateLimitConfig) -> Result<Self, RateLimitError> {
        config.validate()?;
        Ok(Self {
            config,
            buckets: Mutex::new(Buckets::default()),
        })
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, Buckets> {
        // Bucket updates cannot panic halfway, so a poisoned map is still consistent.
        self.buckets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Check `key` against the wall clock.
    ///
    /// The clock is read under the lock, so concurrent callers are stamped in
    /// the order they are admitted.
    pub fn check(&self, key: &str) -> RateLimitResult {
        let (result, evicted) = {
            let mut buckets = self.lock();
            self.check_locked(&mut buckets, key, now_ms())
        };
        self.report(key, result, evicted)
    }

    /// Check `key` at an explicit timestamp.
    pub fn check_at(&self, key: &str, now: TimestampMs) -> RateLimitResult {
        let (result, evicted) = {
            let mut buckets = self.lock();
            self.check_locked(&mut buckets, key, now)
        };
        self.report(key, result, evicted)
    }

    fn check_locked(
        &self,
        buckets: &mut Buckets,
        key: &str,
        now: TimestampMs,
    ) -> (RateLimitResult, Option<IdleBucketsEvicted>) {
        buckets.latest = buckets.latest.max(now);
        let bucket = buckets
            .by_key
            .entry(key.to_string())
            .or_insert(BucketState {
                tokens: self.config.capacity,
                last_refill: now,
            });

        self.refill(bucket, now);
        bucket.last_refill = now;

        let allowed = bucket.tokens >= 1.0;
        if allowed {
            bucket.tokens -= 1.0;
        }
        let result = RateLimitResult {
            allowed,
            remaining: bucket.tokens.floor() as u64,
            reset_ms: self.reset_ms(bucket.tokens),
        };

        buckets.checks += 1;
        let evicted = match self.config.sweep_interval {
            Some(every) if every > 0 && buckets.checks % every == 0 => Some(self.evict_locked(buckets, now)),
            _ => None,
        };
        (result, evicted)
    }

    fn report(&self, key: &str, result: RateLimitResult, evicted: Option<IdleBucketsEvicted>) -> RateLimitResult {
        if !result.allowed {
            RequestDenied {
                key,
                reset_ms: result.reset_ms,
            }
            .log();
        }
        if let Some(report) = evicted {
            report.log();
        }
        result
    }

    /// Tokens the bucket would hold at `now`, without mutating it.
    fn projected_tokens(&self, bucket: &BucketState, now: TimestampMs) -> f64 {
        let elapsed_secs = now.saturating_sub(bucket.last_refill) as f64 / 1000.0;
        (bucket.tokens + elapsed_secs * self.config.refill_per_second).min(self.config.capacity)
    }

    fn refill(&self, bucket: &mut BucketState, now: TimestampMs) {
        bucket.tokens = self.projected_tokens(bucket, now);
    }

    fn reset_ms(&self, tokens: f64) -> u64 {
        let deficit = (1.0 - tokens).max(0.0);
        if deficit == 0.0 {
            0
        } else if self.config.refill_per_second == 0.0 {
            u64::MAX
        } else {
            (deficit / self.config.refill_per_second * 1000.0).ceil() as u64
        }
    }

    /// Drop every bucket that would already be full at the sweep horizon:
    /// `now`, capped at the newest timestamp any check has used.
    ///
    /// A bucket full at the horizon stays full at every later timestamp and
    /// behaves exactly like one created lazily, so eviction never changes a
    /// check stamped at or after the horizon. A check stamped earlier than
    /// that (a caller clock running behind) sees a fresh bucket. Returns the
    /// number of buckets removed.
    pub fn evict_idle(&self, now: TimestampMs) -> usize {
        let report = {
            let mut buckets = self.lock();
            self.evict_locked(&mut buckets, now)
        };
        report.log();
        report.evicted
    }

    fn evict_locked(&self, buckets: &mut Buckets, now: TimestampMs) -> IdleBucketsEvicted {
        let horizon = now.min(buckets.latest);
        let before = buckets.by_key.len();
        buckets
            .by_key
            .retain(|_, bucket| self.projected_tokens(bucket, horizon) < self.config.capacity);
        IdleBucketsEvicted {
            evicted: before - buckets.by_key.len(),
            remaining: buckets.by_key.len(),
        }
    }

    /// Number of keys currently holding a bucket.
    pub fn tracked_keys(&self) -> usize {
        self.lock().by_key.len()
    }

    /// Snapshot of one key's bucket, if it exists.
    pub fn bucket(&self, key: &str) -> Option<BucketState> {
        self.lock().by_key.get(key).copied()
    }
}

fn now_ms() -> TimestampMs {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
