// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for rate limiter decisions.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A request was denied because its bucket is empty.
///
/// # Log Level
/// `warn!` - Client is being throttled
///
/// # Example
/// ```
/// use textsmith::observability::messages::rate_limit::RequestDenied;
///
/// let msg = RequestDenied {
///     key: "203.0.113.7",
///     reset_ms: 1000,
/// };
///
/// assert!(msg.to_string().contains("1000 ms"));
/// ```
pub struct RequestDenied<'a> {
    pub key: &'a str,
    pub reset_ms: u64,
}

impl Display for RequestDenied<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rate limit exceeded for '{}': next token in {} ms",
            self.key, self.reset_ms
        )
    }
}

impl StructuredLog for RequestDenied<'_> {
    fn log(&self) {
        tracing::warn!(key = self.key, reset_ms = self.reset_ms, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "rate_limited",
            span_name = name,
            key = self.key,
            reset_ms = self.reset_ms,
        )
    }
}

/// Idle buckets were dropped from the limiter map.
///
/// # Log Level
/// `debug!` - Housekeeping
pub struct IdleBucketsEvicted {
    pub evicted: usize,
    pub remaining: usize,
}

impl Display for IdleBucketsEvicted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Evicted {} idle rate limit buckets, {} still tracked",
            self.evicted, self.remaining
        )
    }
}

impl StructuredLog for IdleBucketsEvicted {
    fn log(&self) {
        tracing::debug!(evicted = self.evicted, remaining = self.remaining, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "buckets_evicted",
            span_name = name,
            evicted = self.evicted,
            remaining = self.remaining,
        )
    }
}
