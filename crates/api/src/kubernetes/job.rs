use std::collections::BTreeMap;

use k8s_openapi::api::batch::v1::{Job, JobSpec};
use k8s_openapi::api::core::v1::{Container, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The slice of Job status the API reports. Fields stay `None` until the
/// cluster populates them, which can lag creation by a few seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub name: String,
    pub succeeded: Option<i32>,
    pub failed: Option<i32>,
    pub active: Option<i32>,
}

impl JobSummary {
    pub fn from_job(job: &Job) -> Self {
        let status = job.status.as_ref();
        Self {
            name: job.metadata.name.clone().unwrap_or_default(),
            succeeded: status.and_then(|s| s.succeeded),
            failed: status.and_then(|s| s.failed),
            active: status.and_then(|s| s.active),
        }
    }
}

/// Generates a Job name of the form `api-job-3fa9c2`. Uniqueness is not
/// checked here; a genuine collision is rejected by the API server.
pub fn generate_job_name() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("api-job-{}", &suffix[..6])
}

/// Builds the manifest for a one-shot hello Job: a single container, no
/// restarts at the pod level, one retry at the Job level.
pub fn build_job_manifest(name: &str, namespace: &str, image: &str) -> Job {
    Job {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            labels: Some({
                let mut labels = BTreeMap::new();
                labels.insert(
                    "app.kubernetes.io/managed-by".to_string(),
                    "job-scheduler-api".to_string(),
                );
                labels
            }),
            ..Default::default()
        },
        spec: Some(JobSpec {
            backoff_limit: Some(1),
            template: PodTemplateSpec {
                spec: Some(PodSpec {
                    restart_policy: Some("Never".to_string()),
                    containers: vec![Container {
                        name: "hello".to_string(),
                        image: Some(image.to_string()),
                        command: Some(vec![
                            "sh".to_string(),
                            "-c".to_string(),
                            "echo Hello from API Job".to_string(),
                        ]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::batch::v1::JobStatus;
    use std::collections::HashSet;

    #[test]
    fn job_name_has_expected_shape() {
        let name = generate_job_name();
        let suffix = name.strip_prefix("api-job-").expect("prefix");
        assert_eq!(suffix.len(), 6);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn job_names_are_distinct() {
        let names: HashSet<String> = (0..1000).map(|_| generate_job_name()).collect();
        assert_eq!(names.len(), 1000);
    }

    #[test]
    fn manifest_runs_one_busybox_container_with_bounded_retries() {
        let job = build_job_manifest("api-job-abc123", "default", "busybox");

        assert_eq!(job.metadata.name.as_deref(), Some("api-job-abc123"));
        assert_eq!(job.metadata.namespace.as_deref(), Some("default"));

        let spec = job.spec.expect("job spec");
        assert_eq!(spec.backoff_limit, Some(1));

        let pod = spec.template.spec.expect("pod spec");
        assert_eq!(pod.restart_policy.as_deref(), Some("Never"));
        assert_eq!(pod.containers.len(), 1);

        let container = &pod.containers[0];
        assert_eq!(container.name, "hello");
        assert_eq!(container.image.as_deref(), Some("busybox"));
        assert_eq!(
            container.command,
            Some(vec![
                "sh".to_string(),
                "-c".to_string(),
                "echo Hello from API Job".to_string(),
            ])
        );
    }

    #[test]
    fn summary_copies_status_fields_verbatim() {
        let mut job = build_job_manifest("foo", "default", "busybox");
        job.metadata.name = Some("foo".to_string());
        job.status = Some(JobStatus {
            succeeded: Some(1),
            failed: Some(0),
            active: Some(0),
            ..Default::default()
        });

        let summary = JobSummary::from_job(&job);
        assert_eq!(summary.name, "foo");
        assert_eq!(summary.succeeded, Some(1));
        assert_eq!(summary.failed, Some(0));
        assert_eq!(summary.active, Some(0));
    }

    #[test]
    fn summary_keeps_unset_status_fields_absent() {
        let job = build_job_manifest("fresh", "default", "busybox");

        let summary = JobSummary::from_job(&job);
        assert_eq!(summary.name, "fresh");
        assert_eq!(summary.succeeded, None);
        assert_eq!(summary.failed, None);
        assert_eq!(summary.active, None);

        let value = serde_json::to_value(&summary).unwrap();
        assert!(value["succeeded"].is_null());
    }
}
