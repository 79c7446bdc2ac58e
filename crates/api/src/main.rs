use tracing::info;

use job_scheduler_api::{config::Config, metrics, server::Server, Result};

// Intra-cluster API calls must never route through an external proxy, so the
// proxy variables are cleared before any network client is constructed.
fn strip_proxy_env() {
    for var in ["HTTP_PROXY", "HTTPS_PROXY", "http_proxy", "https_proxy"] {
        std::env::remove_var(var);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    strip_proxy_env();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load()?;
    info!("Loaded configuration: {:?}", config);

    metrics::register_metrics();

    // Initialize server
    let server = Server::new(&config);

    // Start server
    info!("Starting server on {}", config.server.addr);
    server.start(&config.server.addr).await?;

    Ok(())
}
