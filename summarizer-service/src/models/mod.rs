//! Request and response payloads for the processing endpoint.

use serde::{Deserialize, Serialize};

/// Successful processing result.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub summary: String,
    pub keywords: Vec<String>,
}

/// Aggregate payload returned when at least one AI task fails.
///
/// Exactly one of the `_error`/`_result` keys is present per task: `_error`
/// carries the failure reason, `_result` the value the task produced.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessFailure {
    pub error_detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords_result: Option<Vec<String>>,
}
