// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sequential processor pipeline.
//!
//! A [`Pipeline`] admits a client through an optional shared
//! [`TokenBucketLimiter`](crate::rate_limit::TokenBucketLimiter), then hands
//! the payload through each configured stage in order.

mod executor;
mod payload;


pub use executor::{Pipeline, PipelineOutput, PipelineStage};
pub use payload::{
    ErrorDetail, Outcome, PipelineMetadata, ProcessorMetadata, ProcessorRequest, ProcessorResponse, PROCESSOR_KEY,
};
