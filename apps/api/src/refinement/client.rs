//! Generation client: wraps a `ResumeOptimizer` with a per-attempt deadline,
//! response validation and retry with quadratic backoff.
//!
//! Each attempt:
//! 1. re-checks the record preconditions (a failure here is terminal)
//! 2. races `optimizer.optimize()` against `attempt_timeout`; the loser is dropped
//! 3. validates the response against the record
//!
//! Any attempt failure is logged and retried after `attempt² × backoff_unit`
//! until `max_attempts` is reached, then surfaced as `RefineError::Failed`.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::models::resume::ResumeRecord;
use crate::refinement::error::{AttemptError, FailureKind, RefineError};
use crate::refinement::preconditions::validate_record;
use crate::refinement::response::RefinementResponse;
use crate::refinement::validator::validate_response;
use crate::refinement::ResumeOptimizer;

pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF_UNIT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementConfig {
    /// Deadline for a single optimizer call.
    pub attempt_timeout: Duration,
    /// Total attempts, including the first. Values below 1 are treated as 1.
    pub max_attempts: u32,
    /// Backoff after attempt `n` is `n² × backoff_unit`.
    pub backoff_unit: Duration,
}

impl Default for RefinementConfig {
    fn default() -> Self {
        Self {
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_unit: DEFAULT_BACKOFF_UNIT,
        }
    }
}

impl RefinementConfig {
    /// Delay before the attempt following `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_unit.saturating_mul(attempt.saturating_mul(attempt))
    }
}

#[derive(Clone)]
pub struct RefinementClient {
    optimizer: Arc<dyn ResumeOptimizer>,
    config: RefinementConfig,
}

impl RefinementClient {
    pub fn new(optimizer: Arc<dyn ResumeOptimizer>, config: RefinementConfig) -> Self {
        Self { optimizer, config }
    }

    /// Runs the refinement call with retries and returns a validated response.
    pub async fn refine(&self, record: &ResumeRecord) -> Result<RefinementResponse, RefineError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            validate_record(record)?;

            match self.attempt(record).await {
                Ok(response) => {
                    info!("Refinement succeeded on attempt {}/{}", attempt, max_attempts);
                    return Ok(response);
                }
                Err(err) if attempt >= max_attempts => {
                    error!(
                        "Refinement attempt {}/{} failed, giving up: {}",
                        attempt, max_attempts, err
                    );
                    let kind = if err.is_overloaded() {
                        FailureKind::Overloaded
                    } else {
                        FailureKind::Other
                    };
                    return Err(RefineError::Failed {
                        attempts: attempt,
                        kind,
                        source: err,
                    });
                }
                Err(err) => {
                    let delay = self.config.backoff(attempt);
                    warn!(
                        "Refinement attempt {}/{} failed, retrying after {}ms: {}",
                        attempt,
                        max_attempts,
                        delay.as_millis(),
                        err
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn attempt(&self, record: &ResumeRecord) -> Result<RefinementResponse, AttemptError> {
        let deadline = self.config.attempt_timeout;
        let response = tokio::time::timeout(deadline, self.optimizer.optimize(record))
            .await
            .map_err(|_| AttemptError::Timeout(deadline))??;

        validate_response(record, &response)?;
        Ok(response)
    }
}
