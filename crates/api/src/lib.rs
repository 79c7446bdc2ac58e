pub mod config;
pub mod kubernetes;
pub mod metrics;
pub mod server;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Kubernetes not configured")]
    ClusterUnavailable,
    #[error("Kubernetes error: {0}")]
    Kubernetes(#[from] kube::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
