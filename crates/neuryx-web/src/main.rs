//! Neuryx risk-scoring server.
//!
//! Run with: cargo run -p neuryx-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use neuryx_web::config::ServiceConfig;
use neuryx_web::router::build_router;
use neuryx_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Neuryx risk-scoring server...");

    let config = ServiceConfig::load()?;

    // Load both domain engines; missing artifacts degrade to heuristic-only.
    let state = AppState::from_config(&config)?;
    info!(
        alzheimer_model = state.alzheimer.model_loaded(),
        parkinson_model = state.parkinson.model_loaded(),
        "engines ready"
    );

    let app = build_router(state);

    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
