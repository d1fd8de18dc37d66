pub(crate) mod job;
pub(crate) mod pod;
pub(crate) mod service;

#[cfg(test)]
pub(crate) mod fake;

use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::{Pod, Service};
use kube::Api;
use kube::Client;
use kube::api::ListParams;

pub(crate) type ApiError = Box<dyn std::error::Error + Send + Sync>;

/// Read-only view of the cluster objects the wait routine depends on.
///
/// `get_*` return `Ok(None)` when the object does not exist (yet).
pub(crate) trait ClusterApi {
    async fn get_job(&self, name: &str) -> Result<Option<Job>, ApiError>;

    async fn get_service(&self, name: &str) -> Result<Option<Service>, ApiError>;

    async fn list_pods(&self, label_selector: &str) -> Result<Vec<Pod>, ApiError>;
}

#[derive(Clone)]
pub(crate) struct KubeClusterApi {
    jobs: Api<Job>,
    services: Api<Service>,
    pods: Api<Pod>,
}

impl KubeClusterApi {
    pub(crate) fn new(client: Client, namespace: &str) -> Self {
        Self {
            jobs: Api::namespaced(client.clone(), namespace),
            services: Api::namespaced(client.clone(), namespace),
            pods: Api::namespaced(client, namespace),
        }
    }
}

impl ClusterApi for KubeClusterApi {
    async fn get_job(&self, name: &str) -> Result<Option<Job>, ApiError> {
        Ok(self.jobs.get_opt(name).await?)
    }

    async fn get_service(&self, name: &str) -> Result<Option<Service>, ApiError> {
        Ok(self.services.get_opt(name).await?)
    }

    async fn list_pods(&self, label_selector: &str) -> Result<Vec<Pod>, ApiError> {
        let params = ListParams::default().labels(label_selector);
        Ok(self.pods.list(&params).await?.items)
    }
}
