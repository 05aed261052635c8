//! LRF simulator API server binary entrypoint.

use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use lrf_common::config::AppConfig;

use lrf_api::routes::create_router;
use lrf_api::state::AppState;

/// Upper bound on request body size.
const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("lrf_api=debug,lrf_engine=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting LRF simulator API server...");

    // Load configuration
    let config = AppConfig::from_env()?;
    let addr = config.bind_addr;

    // Build application state (validates the configured thresholds)
    let state = AppState::new(config)?;
    tracing::info!(
        thresholds = state.thresholds.len(),
        "Threshold set validated"
    );

    // Build router
    let app = create_router(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
