use tracing::info;
use tracing_error::SpanTrace;

use super::error::WaitError;
use super::poller::{Evaluate, PollResult};
use crate::config::WaitTarget;
use crate::kubernetes_objects::ClusterApi;
use crate::kubernetes_objects::job::{JobPhase, classify_job_status};

/// Waits for a Job to report a succeeded pod. A failed Job is fatal.
pub(crate) struct JobEvaluator<'a, A> {
    api: &'a A,
    target: &'a WaitTarget,
}

impl<'a, A: ClusterApi> JobEvaluator<'a, A> {
    pub(crate) fn new(api: &'a A, target: &'a WaitTarget) -> Self {
        Self { api, target }
    }
}

impl<A: ClusterApi> Evaluate for JobEvaluator<'_, A> {
    fn target(&self) -> &WaitTarget {
        self.target
    }

    async fn evaluate(&mut self) -> PollResult {
        let job_name = &self.target.name;
        info!("Getting '{}' job object...", job_name);
        let job = match self.api.get_job(job_name).await {
            Ok(Some(job)) => job,
            Ok(None) => return PollResult::NotFound,
            Err(e) => return PollResult::TransientError(e),
        };

        let phase = classify_job_status(job.status.as_ref());
        let status = job.status.unwrap_or_default();
        match phase {
            JobPhase::Running => {
                info!(
                    "Job '{}' is not completed yet (active: {}).",
                    job_name,
                    status.active.unwrap_or(0)
                );
                PollResult::Pending
            }
            JobPhase::NotStarted => {
                info!("Job '{}' has not started any pod yet.", job_name);
                PollResult::Pending
            }
            JobPhase::Succeeded => {
                info!("Job '{}' succeeded.", job_name);
                PollResult::Succeeded
            }
            JobPhase::Failed => PollResult::Failed(WaitError::JobFailed {
                job: job_name.clone(),
                status: Box::new(status),
                span_trace: SpanTrace::capture(),
            }),
        }
    }
}
