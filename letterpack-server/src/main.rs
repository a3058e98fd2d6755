use tracing::info;
use tracing_subscriber::EnvFilter;

use letterpack_server::config::ServerConfig;
use letterpack_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Build app state
    let state = AppState::from_config(&config);

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let addr = config.bind_addr;
    info!("Letterpack scanner listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health        - Health check");
    info!("  GET  /api/config    - Scanner configuration");
    info!("  GET  /api/validate  - Validate a tracking number");
    info!("  POST /api/scan      - Submit decoded barcode text");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
