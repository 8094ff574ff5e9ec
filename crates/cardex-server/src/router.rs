//! Router construction and the server loop.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use cardex_core::models::config::ServerConfig;
use cardex_core::{Recognizer, ScanPipeline};

use crate::handlers;

/// Build the service router around a shared pipeline.
pub fn router<R>(pipeline: Arc<ScanPipeline<R>>, max_upload_bytes: usize) -> Router
where
    R: Recognizer + 'static,
{
    Router::new()
        .route("/ocr", post(handlers::scan_card::<R>))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(pipeline)
}

/// Bind and serve until Ctrl-C.
pub async fn serve<R>(pipeline: ScanPipeline<R>, config: &ServerConfig) -> std::io::Result<()>
where
    R: Recognizer + 'static,
{
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "cardex server listening");

    let app = router(Arc::new(pipeline), config.max_upload_bytes);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down cardex server");
}
