use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref JOBS_CREATED_TOTAL: IntCounter = IntCounter::new(
        "jobscheduler_jobs_created_total",
        "Total number of Jobs submitted through the API."
    )
    .unwrap();
    pub static ref CLUSTER_UNAVAILABLE_TOTAL: IntCounter = IntCounter::new(
        "jobscheduler_cluster_unavailable_total",
        "Total number of requests answered without a usable cluster client."
    )
    .unwrap();
}

pub fn register_metrics() {
    REGISTRY
        .register(Box::new(JOBS_CREATED_TOTAL.clone()))
        .expect("Failed to register JOBS_CREATED_TOTAL");
    REGISTRY
        .register(Box::new(CLUSTER_UNAVAILABLE_TOTAL.clone()))
        .expect("Failed to register CLUSTER_UNAVAILABLE_TOTAL");
}

// Function to gather metrics for exposition
pub fn gather_metrics() -> String {
    let mut buffer = vec![];
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");
    String::from_utf8(buffer).expect("Failed to convert metrics to string")
}
