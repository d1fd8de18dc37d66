use k8s_openapi::api::batch::v1::JobStatus;
use thiserror::Error;
use tracing_error::{ExtractSpanTrace, SpanTrace};

use crate::kubernetes_objects::ApiError;

/// Conditions that stop the whole wait routine.
#[derive(Error, Debug)]
pub enum WaitError {
    #[error("Job '{job}' failed (failed pods: {})", .status.failed.unwrap_or(0))]
    JobFailed {
        job: String,
        status: Box<JobStatus>,
        span_trace: SpanTrace,
    },

    #[error("Failed to list pods of service '{service}': {source}")]
    ListPods {
        service: String,
        #[source]
        source: ApiError,
        span_trace: SpanTrace,
    },
}

impl ExtractSpanTrace for WaitError {
    fn span_trace(&self) -> Option<&SpanTrace> {
        match self {
            WaitError::JobFailed { span_trace, .. } => Some(span_trace),
            WaitError::ListPods { span_trace, .. } => Some(span_trace),
        }
    }
}
