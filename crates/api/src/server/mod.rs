mod routes;

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{
    config::{Config, KubeConfig},
    Result,
};

pub struct Server {
    pub(crate) kube: KubeConfig,
}

impl Server {
    pub fn new(config: &Config) -> Self {
        Self {
            kube: config.kube.clone(),
        }
    }

    pub fn build_router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/", get(routes::health))
            .route("/jobs", get(routes::list_jobs).post(routes::create_job))
            .route("/jobs/{job_name}", get(routes::get_job))
            .route("/metrics", get(routes::metrics))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    pub async fn start(self, addr: &str) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.build_router()).await?;
        Ok(())
    }
}
