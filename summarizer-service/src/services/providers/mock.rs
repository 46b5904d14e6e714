//! Mock provider implementations for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

/// Scripted text provider for tests.
///
/// Replies are matched by substring against the rendered prompt; the first
/// match wins. Unmatched prompts get a generic echo reply.
pub struct MockTextProvider {
    enabled: bool,
    replies: Vec<(String, Result<String, String>)>,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            replies: Vec::new(),
        }
    }

    /// Reply with `text` for prompts containing `pattern`.
    pub fn reply_when(mut self, pattern: &str, text: &str) -> Self {
        self.replies
            .push((pattern.to_string(), Ok(text.to_string())));
        self
    }

    /// Fail with an API error for prompts containing `pattern`.
    pub fn fail_when(mut self, pattern: &str, reason: &str) -> Self {
        self.replies
            .push((pattern.to_string(), Err(reason.to_string())));
        self
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        for (pattern, reply) in &self.replies {
            if prompt.contains(pattern.as_str()) {
                return match reply {
                    Ok(text) => Ok(text.clone()),
                    Err(reason) => Err(ProviderError::ApiError(reason.clone())),
                };
            }
        }

        Ok(format!("Mock response for: {}", prompt))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ))
        }
    }
}
