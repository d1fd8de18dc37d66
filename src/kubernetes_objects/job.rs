use k8s_openapi::api::batch::v1::JobStatus;

/// Where a Job stands according to a single status snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JobPhase {
    /// At least one pod is active. Wins over succeeded/failed counts, which
    /// may be left over from an earlier attempt while a retry is in flight.
    Running,
    Succeeded,
    Failed,
    /// Accepted but no pod has been started yet.
    NotStarted,
}

pub(crate) fn classify_job_status(status: Option<&JobStatus>) -> JobPhase {
    let Some(status) = status else {
        return JobPhase::NotStarted;
    };

    if status.active.unwrap_or(0) >= 1 {
        JobPhase::Running
    } else if status.succeeded.unwrap_or(0) >= 1 {
        JobPhase::Succeeded
    } else if status.failed.unwrap_or(0) >= 1 {
        JobPhase::Failed
    } else {
        JobPhase::NotStarted
    }
}
