use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub kube: KubeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubeConfig {
    /// Namespace every Job operation is scoped to.
    pub namespace: String,
    /// Image run by Jobs submitted through the API.
    pub job_image: String,
}

impl Config {
    pub fn load() -> crate::Result<Self> {
        // Load environment variables from .env file if it exists
        let _ = dotenvy::dotenv();

        let config = Config {
            server: ServerConfig {
                addr: std::env::var("SERVER_ADDR")
                    .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            },
            kube: KubeConfig {
                namespace: std::env::var("KUBE_NAMESPACE")
                    .unwrap_or_else(|_| "default".to_string()),
                job_image: std::env::var("JOB_IMAGE")
                    .unwrap_or_else(|_| "busybox".to_string()),
            },
        };

        if config.kube.namespace.is_empty() {
            return Err(crate::Error::Config(
                "KUBE_NAMESPACE must not be empty".to_string(),
            ));
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                addr: "0.0.0.0:8080".to_string(),
            },
            kube: KubeConfig {
                namespace: "default".to_string(),
                job_image: "busybox".to_string(),
            },
        }
    }
}
