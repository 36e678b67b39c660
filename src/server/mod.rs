//! HTTP trigger for the dispatch service.
//!
//! A scheduler (or anything that can POST) hits `/send-reminders` once per
//! calendar day. Preflight `OPTIONS` requests get a bare 200 with permissive
//! CORS headers so browser-initiated triggers work too.

use crate::reminder::ReminderDispatcher;
use axum::extract::State;
use axum::http::{header, HeaderName, Method, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

/// Shared state passed as Arc<AppState> to all handlers.
pub struct AppState {
    pub dispatcher: ReminderDispatcher,
}

impl AppState {
    pub fn new(dispatcher: ReminderDispatcher) -> Self {
        Self { dispatcher }
    }
}

/// Assemble the full router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/send-reminders", post(send_reminders_handler))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn run_server(bind_addr: &str, router: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Listening on {}", bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}

/// Liveness probe.
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Run one dispatch and report the aggregate.
///
/// Soft failures (per-document) stay inside the 200 summary with their
/// counts itemized; only configuration and query failures produce a 500.
async fn send_reminders_handler(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.dispatcher.run().await {
        Ok(summary) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": summary.message(),
                "results": summary.results,
            })),
        ),
        Err(e) => {
            error!("Dispatch run failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}
