use k8s_openapi::api::core::v1::Pod;
use tracing::info;

pub(crate) fn is_pod_ready(pod: &Pod) -> bool {
    pod.status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .map(|c| c.iter().any(|c| c.type_ == "Ready" && c.status == "True"))
        .unwrap_or(false)
}

/// Scans pods in listing order and stops at the first ready one.
pub(crate) fn first_ready_pod(pods: &[Pod]) -> Option<&Pod> {
    pods.iter().find(|pod| {
        let ready = is_pod_ready(pod);
        if !ready {
            info!("{} is not ready yet.", pod_name(pod));
        }
        ready
    })
}

pub(crate) fn pod_name(pod: &Pod) -> &str {
    pod.metadata.name.as_deref().unwrap_or("<unknown>")
}
