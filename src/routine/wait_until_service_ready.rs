use tracing::info;
use tracing_error::SpanTrace;

use super::error::WaitError;
use super::poller::{Evaluate, PollResult};
use crate::config::WaitTarget;
use crate::kubernetes_objects::ClusterApi;
use crate::kubernetes_objects::pod::{first_ready_pod, pod_name};
use crate::kubernetes_objects::service::label_selector;

/// Waits for a Service to be backed by at least one ready pod.
///
/// The service is resolved once; its selector is then reused for every pod
/// listing of this target.
pub(crate) struct ServiceEvaluator<'a, A> {
    api: &'a A,
    target: &'a WaitTarget,
    selector: Option<String>,
}

impl<'a, A: ClusterApi> ServiceEvaluator<'a, A> {
    pub(crate) fn new(api: &'a A, target: &'a WaitTarget) -> Self {
        Self {
            api,
            target,
            selector: None,
        }
    }

    async fn resolve_selector(&mut self) -> Result<String, PollResult> {
        if let Some(selector) = &self.selector {
            return Ok(selector.clone());
        }

        let service_name = &self.target.name;
        info!("Getting '{}' service object...", service_name);
        let service = match self.api.get_service(service_name).await {
            Ok(Some(service)) => service,
            Ok(None) => return Err(PollResult::NotFound),
            Err(e) => return Err(PollResult::TransientError(e)),
        };

        let selector = label_selector(&service);
        info!(
            "Service '{}' selects pods with '{}'.",
            service_name, selector
        );
        self.selector = Some(selector.clone());
        Ok(selector)
    }
}

impl<A: ClusterApi> Evaluate for ServiceEvaluator<'_, A> {
    fn target(&self) -> &WaitTarget {
        self.target
    }

    async fn evaluate(&mut self) -> PollResult {
        let selector = match self.resolve_selector().await {
            Ok(selector) => selector,
            Err(result) => return result,
        };

        let service_name = &self.target.name;
        info!("Getting pods for the '{}' service...", service_name);
        let pods = match self.api.list_pods(&selector).await {
            Ok(pods) => pods,
            Err(source) => {
                return PollResult::Failed(WaitError::ListPods {
                    service: service_name.clone(),
                    source,
                    span_trace: SpanTrace::capture(),
                });
            }
        };

        if pods.is_empty() {
            info!("No pods found for the '{}' service.", service_name);
            return PollResult::Empty;
        }

        info!(
            "Checking readiness of the '{}' service pods...",
            service_name
        );
        match first_ready_pod(&pods) {
            Some(pod) => {
                info!("{} is ready.", pod_name(pod));
                PollResult::Succeeded
            }
            None => PollResult::Pending,
        }
    }
}
