//! HTTP server module for the presence API.
//!
//! Exposes the read-only JSON endpoints the dashboard consumes. The
//! router is built separately from the serve loop so tests can exercise
//! it without binding a socket.

pub mod routes;
pub mod state;

use crate::error::Result;
use crate::server::routes::{health, stats, users};
use crate::server::state::AppState;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Builds the API router over the shared state.
pub fn router(state: Arc<AppState>) -> Router {
    // Permissive CORS: the dashboard is served from elsewhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Users API
        .route("/api/v1/users", get(users::list_users))
        .route("/api/v2/users", get(users::list_directory))
        .route("/api/v2/users/:user_id", get(users::get_user))
        // Stats API
        .route(
            "/api/v1/mean_time_weekday/:user_id",
            get(stats::mean_time_weekday),
        )
        .route(
            "/api/v1/presence_weekday/:user_id",
            get(stats::presence_weekday),
        )
        .route(
            "/api/v1/presence_start_end/:user_id",
            get(stats::presence_start_end),
        )
        .route("/api/v1/top5/:user_id", get(stats::top5_weeks))
        .layer(cors)
        .with_state(state)
}

/// Runs the axum server until Ctrl-C.
pub async fn run_server(state: Arc<AppState>, port: u16) -> Result<()> {
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
