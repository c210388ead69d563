// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use super::payload::{Outcome, PipelineMetadata, ProcessorRequest};
use crate::backends::local::LocalProcessorFactory;
use crate::config::{validate_config, Config};
use crate::errors::{ConfigError, FailureStrategy, PipelineError};
use crate::observability::messages::pipeline::{PipelineCompleted, PipelineStarted, ProcessorSkipped};
use crate::observability::messages::StructuredLog;
use crate::rate_limit::{RateLimitResult, TimestampMs, TokenBucketLimiter};
use crate::traits::{Processor, ProcessorIntent};

/// One configured processor in a pipeline.
#[derive(Clone)]
pub struct PipelineStage {
    pub id: String,
    pub processor: Arc<dyn Processor>,
}

/// Result of a completed pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Payload left by the last successful transform processor.
    pub payload: Vec<u8>,
    pub metadata: PipelineMetadata,
    /// Failures tolerated under `continue_on_error`.
    pub failures: Vec<PipelineError>,
    /// The admission decision, when a rate limiter is attached.
    pub admission: Option<RateLimitResult>,
}

impl PipelineOutput {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

/// Sequential processor pipeline with optional per-client rate limiting.
///
/// ## Canonical payload
///
/// - **Transform processors** replace the payload handed to the next stage.
/// - **Analyze processors** see the current payload but only contribute metadata.
///
/// Metadata from every successful stage is merged into one
/// [`PipelineMetadata`] keyed by stage id, so two stages running the same
/// processor keep separate entries. Each stage receives what has accumulated
/// so far.
pub struct Pipeline {
    stages: Vec<PipelineStage>,
    failure_strategy: FailureStrategy,
    limiter: Option<Arc<TokenBucketLimiter>>,
}

impl Pipeline {
    pub fn new(failure_strategy: FailureStrategy) -> Self {
        Self {
            stages: Vec::new(),
            failure_strategy,
            limiter: None,
        }
    }

    /// Validate `cfg` and build its processors and limiter.
    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        validate_config(cfg)?;
        Self::from_validated_config(cfg)
    }

    /// Build from a config that already passed [`validate_config`], e.g. one
    /// returned by [`load_and_validate_config`](crate::config::load_and_validate_config).
    pub fn from_validated_config(cfg: &Config) -> Result<Self, ConfigError> {
        let mut pipeline = Pipeline::new(cfg.failure_strategy);
        for processor_config in &cfg.processors {
            let processor = LocalProcessorFactory::create_processor(processor_config).map_err(|source| {
                ConfigError::InvalidProcessor {
                    processor_id: processor_config.id.clone(),
                    source,
                }
            })?;
            pipeline.add_stage(processor_config.id.clone(), processor);
        }

        if let Some(rate_limit) = &cfg.rate_limit {
            let limiter = TokenBucketLimiter::new(rate_limit.clone())?;
            pipeline = pipeline.with_rate_limiter(Arc::new(limiter));
        }
        Ok(pipeline)
    }

    /// Share `limiter` with this pipeline; other pipelines may hold the same one.
    pub fn with_rate_limiter(mut self, limiter: Arc<TokenBucketLimiter>) -> Self {
        self.limiter = Some(limiter);
        self
    }

    pub fn add_stage(&mut self, id: impl Into<String>, processor: Arc<dyn Processor>) {
        self.stages.push(PipelineStage {
            id: id.into(),
            processor,
        });
    }

    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }

    pub fn failure_strategy(&self) -> FailureStrategy {
        self.failure_strategy
    }

    pub fn rate_limiter(&self) -> Option<&Arc<TokenBucketLimiter>> {
        self.limiter.as_ref()
    }

    /// Admit `client_key` against the wall clock, then run every stage.
    pub async fn run(&self, client_key: &str, input: ProcessorRequest) -> Result<PipelineOutput, PipelineError> {
        let admission = self.limiter.as_ref().map(|limiter| limiter.check(client_key));
        self.execute(client_key, admission, input).await
    }

    /// Same as [`run`](Self::run) with an explicit admission timestamp.
    pub async fn run_at(
        &self,
        client_key: &str,
        now: TimestampMs,
        input: ProcessorRequest,
    ) -> Result<PipelineOutput, PipelineError> {
        let admission = self.limiter.as_ref().map(|limiter| limiter.check_at(client_key, now));
        self.execute(client_key, admission, input).await
    }

    async fn execute(
        &self,
        client_key: &str,
        admission: Option<RateLimitResult>,
        input: ProcessorRequest,
    ) -> Result<PipelineOutput, PipelineError> {
        if let Some(decision) = admission.filter(|decision| !decision.allowed) {
            return Err(PipelineError::RateLimited {
                key: client_key.to_string(),
                retry_after_ms: decision.reset_ms,
            });
        }

        let start_msg = PipelineStarted {
            client_key,
            processor_count: self.stages.len(),
            input_size: input.payload.len(),
        };
        let span = start_msg.span("pipeline_run");
        span.in_scope(|| start_msg.log());

        self.run_stages(input, admission).instrument(span).await
    }

    async fn run_stages(
        &self,
        input: ProcessorRequest,
        admission: Option<RateLimitResult>,
    ) -> Result<PipelineOutput, PipelineError> {
        let start_time = Instant::now();
        let mut payload = input.payload;
        let mut metadata = input.metadata;
        let mut failures = Vec::new();

        for stage in &self.stages {
            let request = ProcessorRequest {
                payload: payload.clone(),
                metadata: metadata.clone(),
            };
            let response = stage.processor.process(request).await;

            let failure = match response.outcome {
                Some(Outcome::NextPayload(next)) => {
                    if let Some(stage_metadata) = &response.metadata {
                        metadata.merge_for_stage(&stage.id, stage.processor.name(), stage_metadata);
                    }
                    if stage.processor.declared_intent() == ProcessorIntent::Transform {
                        payload = next;
                    }
                    continue;
                }
                Some(Outcome::Error(detail)) => PipelineError::ProcessorFailed {
                    processor_id: stage.id.clone(),
                    code: detail.code,
                    message: detail.message,
                },
                None => PipelineError::NoOutcome {
                    processor_id: stage.id.clone(),
                },
            };

            match self.failure_strategy {
                FailureStrategy::FailFast => return Err(failure),
                FailureStrategy::ContinueOnError => {
                    ProcessorSkipped {
                        processor_id: &stage.id,
                        reason: &failure.to_string(),
                    }
                    .log();
                    failures.push(failure);
                }
            }
        }

        PipelineCompleted {
            processor_count: self.stages.len(),
            failed_count: failures.len(),
            output_size: payload.len(),
            duration: start_time.elapsed(),
        }
        .log();

        Ok(PipelineOutput {
            payload,
            metadata,
            failures,
            admission,
        })
    }
}
