use k8s_openapi::api::batch::v1::Job;
use kube::{
    api::{Api, ListParams, PostParams},
    Client,
};
use tracing::warn;

use crate::{Error, Result};

use super::job::{self, JobSummary};

/// Batch API handle scoped to one namespace. Acquired fresh for every
/// request and dropped when the request finishes; never cached.
pub struct BatchClient {
    jobs: Api<Job>,
}

impl BatchClient {
    /// Loads ambient credentials (in-cluster service account, or kubeconfig
    /// when running outside a pod) and binds to the Batch API. The underlying
    /// failure is logged but not exposed past this boundary.
    pub async fn acquire(namespace: &str) -> Result<Self> {
        let client = match Client::try_default().await {
            Ok(client) => client,
            Err(e) => {
                warn!("Kubernetes config error: {}", e);
                return Err(Error::ClusterUnavailable);
            }
        };

        Ok(Self {
            jobs: Api::namespaced(client, namespace),
        })
    }

    /// Lists every Job in the namespace as summaries, in whatever order the
    /// API server returns. A single page only; continuation tokens are not
    /// followed.
    pub async fn list_jobs(&self) -> Result<Vec<JobSummary>> {
        let jobs = self.jobs.list(&ListParams::default()).await?;
        Ok(jobs.iter().map(JobSummary::from_job).collect())
    }

    pub async fn get_job(&self, name: &str) -> Result<JobSummary> {
        let job = self.jobs.get(name).await?;
        Ok(JobSummary::from_job(&job))
    }

    /// Submits a generated hello Job and returns its name without waiting
    /// for the pod to run. Completion is observable through list/get only.
    pub async fn create_job(&self, namespace: &str, image: &str) -> Result<String> {
        let name = job::generate_job_name();
        let manifest = job::build_job_manifest(&name, namespace, image);

        self.jobs.create(&PostParams::default(), &manifest).await?;

        Ok(name)
    }
}
