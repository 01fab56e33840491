// Web server: Axum-based form for comparing two documents.
//
// GET / renders an empty form, POST / scores the submitted pair and
// re-renders the form with the inputs and the result. POST /api/similarity
// is the same comparison as JSON. No sessions, no storage: every request is
// an independent run of the pipeline.

use std::sync::Arc;

use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;

pub mod handlers;
pub mod page;

/// Shared application state threaded through all Axum handlers.
///
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let app = build_router(AppState {
        config: Arc::new(config),
    });

    info!("docsim listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Assemble the routes. Public so tests can drive the router directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::form::show_form).post(handlers::form::submit_form),
        )
        .route("/api/similarity", post(handlers::api::compare_documents))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check: always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
