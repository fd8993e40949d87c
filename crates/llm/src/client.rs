use async_trait::async_trait;
use caseforge_common::{AppConfig, CaseforgeError, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::types::{ChatRequest, ChatResponse};

/// OpenAI-compatible chat completions client
///
/// One synchronous-style request per prompt, no automatic retry: a failed
/// call surfaces a `Generation` error whose `retryable` flag classifies
/// transport errors and 429/5xx responses.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OpenAiClient {
    /// Create new client from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300)) // 5 minutes for LLM calls
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Chat client initialized: {}", config.api_base_url);
        Ok(Self {
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    async fn try_generate(&self, request: &ChatRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            "Sending chat request - Model: {}, Messages: {}",
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                CaseforgeError::generation_retryable(format!("Failed to send request: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let result: ChatResponse = response.json().await.map_err(|e| {
            CaseforgeError::generation(format!("Failed to parse response: {}", e))
        })?;

        // An empty completion is not a transport failure: it flows through
        // to the table parser, where "no valid rows" is reported distinctly
        let content = result
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CaseforgeError::generation("Response contained no choices"))?;

        debug!("Received completion - Length: {}", content.len());
        Ok(content)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(&self, request: ChatRequest) -> Result<String> {
        self.try_generate(&request).await
    }
}

/// Map an HTTP error status to a generation error
fn classify_status(status: StatusCode, body: &str) -> CaseforgeError {
    let message = format!("API error {}: {}", status, body.trim());
    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        CaseforgeError::generation_retryable(message)
    } else {
        CaseforgeError::generation(message)
    }
}
