use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use k8s_openapi::api::batch::v1::{Job, JobStatus};
use k8s_openapi::api::core::v1::{Pod, Service};
use serde_json::json;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

use super::{ApiError, ClusterApi};

type Script<T> = RefCell<VecDeque<Result<T, ApiError>>>;

/// In-memory cluster that replays queued responses in order.
///
/// Running out of responses panics, so a test fails when the code polls
/// more often than the script expects.
#[derive(Default)]
pub(crate) struct ScriptedClusterApi {
    jobs: Script<Option<Job>>,
    services: Script<Option<Service>>,
    pods: Script<Vec<Pod>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedClusterApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn job(self, response: Result<Option<Job>, ApiError>) -> Self {
        self.jobs.borrow_mut().push_back(response);
        self
    }

    pub(crate) fn service(self, response: Result<Option<Service>, ApiError>) -> Self {
        self.services.borrow_mut().push_back(response);
        self
    }

    pub(crate) fn pods(self, response: Result<Vec<Pod>, ApiError>) -> Self {
        self.pods.borrow_mut().push_back(response);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn next<T>(&self, script: &Script<T>, call: String) -> Result<T, ApiError> {
        let response = script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected call: {call}"));
        self.calls.borrow_mut().push(call);
        response
    }
}

impl ClusterApi for ScriptedClusterApi {
    async fn get_job(&self, name: &str) -> Result<Option<Job>, ApiError> {
        self.next(&self.jobs, format!("get job/{name}"))
    }

    async fn get_service(&self, name: &str) -> Result<Option<Service>, ApiError> {
        self.next(&self.services, format!("get service/{name}"))
    }

    async fn list_pods(&self, label_selector: &str) -> Result<Vec<Pod>, ApiError> {
        self.next(&self.pods, format!("list pods/{label_selector}"))
    }
}

pub(crate) fn job(name: &str, active: i32, succeeded: i32, failed: i32) -> Job {
    let mut job: Job = serde_json::from_value(json!({
        "apiVersion": "batch/v1",
        "kind": "Job",
        "metadata": { "name": name },
    }))
    .unwrap();
    job.status = Some(JobStatus {
        active: Some(active),
        succeeded: Some(succeeded),
        failed: Some(failed),
        ..Default::default()
    });
    job
}

pub(crate) fn pod(name: &str, conditions: &[(&str, &str)]) -> Pod {
    let conditions: Vec<_> = conditions
        .iter()
        .map(|(type_, status)| json!({ "type": type_, "status": status }))
        .collect();
    serde_json::from_value(json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": { "name": name },
        "status": { "conditions": conditions },
    }))
    .unwrap()
}

pub(crate) fn service(name: &str, selector: serde_json::Value) -> Service {
    serde_json::from_value(json!({
        "apiVersion": "v1",
        "kind": "Service",
        "metadata": { "name": name },
        "spec": { "selector": selector },
    }))
    .unwrap()
}

pub(crate) fn api_error(message: &str) -> ApiError {
    message.to_string().into()
}

struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Counts `error!` events emitted on this thread while the guard is alive.
pub(crate) fn count_error_events() -> (DefaultGuard, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let guard = tracing_subscriber::registry()
        .with(ErrorCounter(count.clone()))
        .set_default();
    (guard, count)
}
