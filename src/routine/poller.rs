use std::time::Duration;

use tracing::{error, info, instrument, warn};

use super::error::WaitError;
use crate::config::WaitTarget;
use crate::config::polling::PollingConfig;
use crate::kubernetes_objects::ApiError;

/// Classification of a single evaluation of a wait target.
#[derive(Debug)]
pub(crate) enum PollResult {
    /// The object does not exist yet.
    NotFound,
    /// The API query failed in a way worth retrying.
    TransientError(ApiError),
    /// The object exists but has not reached its success condition.
    Pending,
    /// The object resolved but there is nothing to inspect yet (no pods).
    Empty,
    Succeeded,
    Failed(WaitError),
}

/// Kind specific evaluation of a wait target.
pub(crate) trait Evaluate {
    fn target(&self) -> &WaitTarget;

    async fn evaluate(&mut self) -> PollResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WaitReport {
    pub(crate) attempts: u64,
    pub(crate) waited: Duration,
}

/// Evaluates the target until it succeeds or fails fatally.
///
/// There is no retry limit and no deadline: the loop runs until the
/// orchestrator kills the process.
#[instrument("wait_for", skip_all, fields(target = %evaluator.target()))]
pub(crate) async fn wait_for<E: Evaluate>(
    evaluator: &mut E,
    polling: &PollingConfig,
) -> Result<WaitReport, WaitError> {
    let target = evaluator.target().clone();
    let mut attempts = 0u64;
    let mut waited = Duration::ZERO;
    loop {
        attempts += 1;
        let delay = match evaluator.evaluate().await {
            PollResult::Succeeded => {
                info!(
                    "{} is ready after {} attempt(s) and {} seconds.",
                    target,
                    attempts,
                    waited.as_secs()
                );
                break Ok(WaitReport { attempts, waited });
            }
            PollResult::Failed(e) => {
                error!("Stopped waiting for {}: {}", target, e);
                break Err(e);
            }
            PollResult::NotFound => {
                info!(
                    "{} not found. Retrying in {} seconds...",
                    target,
                    polling.check_interval.as_secs()
                );
                polling.check_interval
            }
            PollResult::TransientError(e) => {
                warn!("Error getting {}: {}", target, e);
                warn!(
                    "Retrying in {} seconds...",
                    polling.check_interval.as_secs()
                );
                polling.check_interval
            }
            PollResult::Pending => {
                info!(
                    "{} is not ready yet. Retrying in {} seconds...",
                    target,
                    polling.check_interval.as_secs()
                );
                polling.check_interval
            }
            PollResult::Empty => {
                info!(
                    "Nothing to check for {} yet. Retrying in {} seconds...",
                    target,
                    polling.empty_retry_interval.as_secs()
                );
                polling.empty_retry_interval
            }
        };
        waited += delay;
        tokio::time::sleep(delay).await;
    }
}
