use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    error::AppError,
    handlers::{self, AppState},
    metrics,
    quote::QuoteContext,
    signals::setup_signal_handlers,
};

/// Request bodies are small JSON forms
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Start the quote API server
///
/// This function:
/// 1. Initializes metrics (when enabled)
/// 2. Sets up signal handlers for graceful shutdown and config reload
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests until a shutdown signal arrives
pub async fn start_server(config: Config, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    let state = AppState::new(QuoteContext::from_config(&config));

    let (shutdown_tx, signal_handle) =
        setup_signal_handlers(state.context.clone(), config_path)?;
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app = create_router(state, metrics_handle, &config.metrics.endpoint);

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| AppError::Config(format!("Invalid host '{}': {}", config.server.host, e)))?,
        config.server.port,
    ));

    info!("Starting print-quote API on {}", addr);
    info!(
        "Configuration: {} materials, default currency {}",
        config.materials.len(),
        config.defaults.currency.as_deref().unwrap_or("COP")
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    state: AppState,
    metrics_handle: Option<Arc<PrometheusHandle>>,
    metrics_endpoint: &str,
) -> Router {
    let api_routes = Router::new()
        .route("/v1/materials", get(handlers::materials::list_materials))
        .route("/v1/quotes", post(handlers::quote::create_quote))
        .route("/v1/quotes/export", post(handlers::quote::export_quote))
        .with_state(state);

    let mut app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes);

    if let Some(handle) = metrics_handle {
        app = app.merge(
            Router::new()
                .route(metrics_endpoint, get(handlers::metrics_handler::metrics))
                .with_state(handle),
        );
    }

    app.layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
