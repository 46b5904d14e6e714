use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for Docker/K8s liveness probes.
///
/// Reports degraded when the text provider was never configured, since the
/// service can only answer 503 on its processing path in that state.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.text_provider {
        Some(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "summarizer-service",
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unconfigured",
                "service": "summarizer-service",
                "error": "text provider not configured"
            })),
        ),
    }
}

/// Readiness check endpoint for K8s readiness probes.
pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    if state.text_provider.is_some() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
