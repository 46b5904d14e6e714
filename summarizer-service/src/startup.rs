//! Application startup and lifecycle management.

use crate::config::SummarizerConfig;
use crate::handlers::health::{health_check, readiness_check};
use crate::handlers::process::process_text;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// `text_provider` is `None` when no API key was configured at startup; the
/// service stays up in that state but answers 503 on the processing path
/// until restart. The handle is read-only after startup, so concurrent
/// requests share it freely.
#[derive(Clone)]
pub struct AppState {
    pub config: SummarizerConfig,
    pub text_provider: Option<Arc<dyn TextProvider>>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/process", post(process_text))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: SummarizerConfig) -> Result<Self, AppError> {
        let text_provider: Option<Arc<dyn TextProvider>> = match &config.google.api_key {
            Some(api_key) => {
                tracing::info!(
                    model = %config.models.text_model,
                    "Initialized Gemini text provider"
                );
                Some(Arc::new(GeminiTextProvider::new(GeminiConfig {
                    api_key: api_key.clone(),
                    model: config.models.text_model.clone(),
                })))
            }
            None => {
                tracing::error!(
                    "GOOGLE_API_KEY not set; AI processing is disabled until restart"
                );
                None
            }
        };

        let state = AppState {
            config: config.clone(),
            text_provider,
        };

        // Bind listener (port 0 = random port for testing)
        let address = format!("{}:{}", config.common.host, config.common.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}
