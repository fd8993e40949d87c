use crate::types::ChatRequest;
use async_trait::async_trait;
use caseforge_common::Result;

/// Common trait for LLM clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate text from a chat request
    async fn generate(&self, request: ChatRequest) -> Result<String>;
}
