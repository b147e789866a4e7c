//! Text-generation client.
//!
//! `TextGenerator` is the seam the chat and refinement panels depend on;
//! `GeminiClient` implements it over HTTP. Each call is one POST with an
//! explicit timeout and at most one retry on a retryable failure.

use crate::error::AssistError;
use std::future::Future;

/// Anything that turns a prompt into generated text.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, AssistError>> + Send;
}

#[cfg(feature = "http")]
pub use http::GeminiClient;

#[cfg(feature = "http")]
mod http {
    use super::TextGenerator;
    use crate::codec::{GenerateRequest, decode_reply};
    use crate::config::AssistantConfig;
    use crate::error::AssistError;

    pub struct GeminiClient {
        http: reqwest::Client,
        config: AssistantConfig,
    }

    impl GeminiClient {
        pub fn new(config: AssistantConfig) -> Self {
            Self {
                http: reqwest::Client::new(),
                config,
            }
        }

        async fn send_once(&self, body: &GenerateRequest<'_>) -> Result<String, AssistError> {
            let mut request = self.http.post(&self.config.endpoint).json(body);
            if let Some(key) = &self.config.api_key {
                request = request.query(&[("key", key)]);
            }

            let response = request.send().await?;
            let status = response.status().as_u16();
            let bytes = response.bytes().await?;
            decode_reply(status, &bytes)
        }

        async fn attempt(&self, body: &GenerateRequest<'_>) -> Result<String, AssistError> {
            let timeout = self.config.timeout();
            tokio::time::timeout(timeout, self.send_once(body))
                .await
                .unwrap_or_else(|_| {
                    Err(AssistError::Network(format!("timed out after {timeout:?}")))
                })
        }
    }

    impl TextGenerator for GeminiClient {
        async fn generate(&self, prompt: &str) -> Result<String, AssistError> {
            let body = GenerateRequest::from_prompt(prompt);
            let attempts = 1 + self.config.retries();
            let mut attempt = 1;
            loop {
                match self.attempt(&body).await {
                    Ok(text) => return Ok(text),
                    Err(e) if e.is_retryable() && attempt < attempts => {
                        log::warn!("assistant request failed (attempt {attempt}/{attempts}): {e}");
                        attempt += 1;
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }
}
