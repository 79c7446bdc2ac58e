use http::StatusCode;
use job_scheduler_api::{config::Config, server::Server};
use serde_json::json;

// Points credential discovery at nothing so client acquisition fails the
// same way it does in a pod without a service account.
fn make_cluster_unreachable() {
    std::env::remove_var("KUBERNETES_SERVICE_HOST");
    std::env::remove_var("KUBERNETES_SERVICE_PORT");
    std::env::set_var("KUBECONFIG", "/nonexistent/kubeconfig");
}

fn test_server() -> axum_test::TestServer {
    let config = Config::default();
    let server = Server::new(&config);
    axum_test::TestServer::new(server.build_router()).unwrap()
}

#[tokio::test]
async fn test_health_is_independent_of_cluster() {
    make_cluster_unreachable();
    let client = test_server();

    let response = client.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "status": "ok" }));

    let response = client.get("/metrics").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_data_routes_report_unconfigured_cluster() {
    make_cluster_unreachable();
    let client = test_server();

    let expected = json!({ "error": "Kubernetes not configured" });

    let response = client.get("/jobs").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body, expected);

    let response = client.get("/jobs/some-job").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body, expected);

    let response = client.post("/jobs").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body, expected);
}
