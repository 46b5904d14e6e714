//! The text-processing endpoint: AI summary plus extracted keywords.

use crate::models::{ProcessFailure, ProcessResponse};
use crate::prompt;
use crate::services::providers::{ProviderError, TextProvider};
use crate::startup::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use service_core::error::AppError;
use std::sync::Arc;

/// Handle `POST /process`.
///
/// Validates the request body, issues the summarization and keyword
/// extraction calls, and assembles the response. The availability check runs
/// before any input validation: an unconfigured service answers 503
/// regardless of the body.
pub async fn process_text(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let provider = state.text_provider.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable(
            "AI Service not available. Please check server configuration.".to_string(),
        )
    })?;

    let text = match body.get("text") {
        None | Some(Value::Null) => {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "No text provided in the request body."
            )));
        }
        Some(value) => value,
    };

    let text = match text.as_str() {
        Some(s) if !s.trim().is_empty() => s,
        _ => {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Text must be a non-empty string."
            )));
        }
    };

    // The two tasks are independent; both run to completion before the
    // response is assembled, and one failing never suppresses the other's
    // result.
    let summary = run_task(provider, &prompt::summary_prompt(text), "summarize").await;
    let keywords_raw = run_task(provider, &prompt::keywords_prompt(text), "extract_keywords").await;

    let keywords = keywords_raw
        .as_deref()
        .map(prompt::parse_keywords)
        .unwrap_or_default();

    match (summary, keywords_raw) {
        (Ok(summary), Ok(_)) => {
            Ok((StatusCode::OK, Json(ProcessResponse { summary, keywords })).into_response())
        }
        (summary, keywords_raw) => {
            let payload = ProcessFailure {
                error_detail: "One or more AI processing tasks failed.".to_string(),
                summary_error: summary.as_ref().err().map(ToString::to_string),
                summary_result: summary.ok(),
                keywords_error: keywords_raw.as_ref().err().map(ToString::to_string),
                keywords_result: keywords_raw.ok().map(|_| keywords),
            };
            Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response())
        }
    }
}

async fn run_task(
    provider: &Arc<dyn TextProvider>,
    prompt: &str,
    task: &str,
) -> Result<String, ProviderError> {
    provider.generate(prompt).await.map_err(|e| {
        tracing::error!(task, error = %e, "AI task failed");
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GoogleConfig, ModelConfig, SummarizerConfig};
    use crate::services::providers::mock::MockTextProvider;
    use service_core::config::Config;

    fn test_state(provider: Option<Arc<dyn TextProvider>>) -> AppState {
        AppState {
            config: SummarizerConfig {
                common: Config {
                    host: "127.0.0.1".to_string(),
                    port: 0,
                },
                models: ModelConfig {
                    text_model: "gemini-2.0-flash".to_string(),
                },
                google: GoogleConfig { api_key: None },
            },
            text_provider: provider,
        }
    }

    #[tokio::test]
    async fn availability_check_precedes_input_validation() {
        // Invalid body, but the service is unconfigured: 503 wins.
        let result = process_text(
            State(test_state(None)),
            Json(serde_json::json!({ "wrong": "field" })),
        )
        .await;

        match result {
            Err(AppError::ServiceUnavailable(msg)) => {
                assert_eq!(
                    msg,
                    "AI Service not available. Please check server configuration."
                );
            }
            other => panic!("Expected ServiceUnavailable, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn missing_text_is_a_bad_request() {
        let provider: Arc<dyn TextProvider> = Arc::new(MockTextProvider::new(true));
        let result = process_text(
            State(test_state(Some(provider))),
            Json(serde_json::json!({})),
        )
        .await;

        match result {
            Err(AppError::BadRequest(err)) => {
                assert_eq!(err.to_string(), "No text provided in the request body.");
            }
            other => panic!("Expected BadRequest, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn whitespace_text_is_a_bad_request() {
        let provider: Arc<dyn TextProvider> = Arc::new(MockTextProvider::new(true));
        let result = process_text(
            State(test_state(Some(provider))),
            Json(serde_json::json!({ "text": "   " })),
        )
        .await;

        match result {
            Err(AppError::BadRequest(err)) => {
                assert_eq!(err.to_string(), "Text must be a non-empty string.");
            }
            other => panic!("Expected BadRequest, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn successful_tasks_return_ok() {
        let provider: Arc<dyn TextProvider> = Arc::new(
            MockTextProvider::new(true)
                .reply_when("Summarize the following", "A fox is quick.")
                .reply_when("extract the 5 to 7", "fox, quick, brown"),
        );

        let response = process_text(
            State(test_state(Some(provider))),
            Json(serde_json::json!({ "text": "The quick brown fox..." })),
        )
        .await
        .expect("handler should not error");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn one_failed_task_returns_internal_error() {
        let provider: Arc<dyn TextProvider> = Arc::new(
            MockTextProvider::new(true)
                .reply_when("Summarize the following", "A fox is quick.")
                .fail_when("extract the 5 to 7", "model melted"),
        );

        let response = process_text(
            State(test_state(Some(provider))),
            Json(serde_json::json!({ "text": "The quick brown fox..." })),
        )
        .await
        .expect("handler should not error");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
