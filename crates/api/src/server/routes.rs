use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::{
    kubernetes::BatchClient,
    metrics::{self, CLUSTER_UNAVAILABLE_TOTAL, JOBS_CREATED_TOTAL},
    Error,
};

use super::Server;

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn metrics() -> String {
    metrics::gather_metrics()
}

pub async fn list_jobs(State(server): State<Arc<Server>>) -> Response {
    let client = match BatchClient::acquire(&server.kube.namespace).await {
        Ok(client) => client,
        Err(_) => return not_configured(),
    };

    match client.list_jobs().await {
        Ok(summaries) => Json(summaries).into_response(),
        Err(e) => cluster_error_response(e),
    }
}

pub async fn get_job(
    State(server): State<Arc<Server>>,
    Path(job_name): Path<String>,
) -> Response {
    let client = match BatchClient::acquire(&server.kube.namespace).await {
        Ok(client) => client,
        Err(_) => return not_configured(),
    };

    match client.get_job(&job_name).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => cluster_error_response(e),
    }
}

pub async fn create_job(State(server): State<Arc<Server>>) -> Response {
    let client = match BatchClient::acquire(&server.kube.namespace).await {
        Ok(client) => client,
        Err(_) => return not_configured(),
    };

    match client
        .create_job(&server.kube.namespace, &server.kube.job_image)
        .await
    {
        Ok(name) => {
            info!("Created job {}", name);
            JOBS_CREATED_TOTAL.inc();
            Json(json!({ "status": "job created", "job_name": name })).into_response()
        }
        Err(e) => cluster_error_response(e),
    }
}

// Soft error: the cluster being unreachable is an operator problem, not a
// caller problem, so the HTTP status stays 200.
fn not_configured() -> Response {
    CLUSTER_UNAVAILABLE_TOTAL.inc();
    Json(json!({ "error": "Kubernetes not configured" })).into_response()
}

/// Maps a failed cluster call to a structured status: 404 for a missing Job,
/// 409 for a name conflict, 502 for anything else upstream.
fn cluster_error_response(err: Error) -> Response {
    match err {
        Error::Kubernetes(kube::Error::Api(ae)) => {
            let status = match ae.code {
                404 => StatusCode::NOT_FOUND,
                409 => StatusCode::CONFLICT,
                _ => StatusCode::BAD_GATEWAY,
            };
            error!("Cluster call failed ({}): {}", ae.code, ae.message);
            (status, Json(json!({ "error": ae.message }))).into_response()
        }
        other => {
            error!("Cluster call failed: {}", other);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "upstream Kubernetes call failed" })),
            )
                .into_response()
        }
    }
}
