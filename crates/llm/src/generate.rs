use caseforge_common::Result;
use tracing::{debug, info};

use crate::chunking::{chunk_payloads, derive_stride};
use crate::llm_trait::LlmClient;
use crate::prompts::{build_prompt, SYSTEM_PROMPT};
use crate::tokens::estimate_tokens;
use crate::types::{ChatMessage, ChatRequest};

/// Sampling temperature for schema-conforming table output
const TEMPERATURE: f64 = 0.3;

/// Test case generator
///
/// Wraps the source text in the instruction prompt and issues one request,
/// or several sequential requests when the prompt exceeds the token budget.
/// Responses are concatenated in chunk order before parsing downstream.
pub struct CaseGenerator<C: LlmClient> {
    client: C,
    model: String,
    max_prompt_tokens: usize,
}

impl<C: LlmClient> CaseGenerator<C> {
    /// Create new generator
    pub fn new(client: C, model: impl Into<String>, max_prompt_tokens: usize) -> Self {
        Self {
            client,
            model: model.into(),
            max_prompt_tokens,
        }
    }

    /// Generate the raw markdown table text for a functional document
    pub async fn generate_cases(&self, text: &str) -> Result<String> {
        let prompt = build_prompt(text);
        let prompt_tokens = estimate_tokens(&prompt);
        info!("Prompt token count: {}", prompt_tokens);

        if prompt_tokens <= self.max_prompt_tokens {
            info!("Prompt within the {} token budget", self.max_prompt_tokens);
            return self.request(prompt).await;
        }

        info!(
            "Prompt exceeds the {} token budget, splitting the source text",
            self.max_prompt_tokens
        );

        let overhead = estimate_tokens(&build_prompt(""));
        let available = self.max_prompt_tokens.saturating_sub(overhead).max(1);
        let stride = derive_stride(text, available);
        let parts = chunk_payloads(text, stride);
        info!("Split into {} chunks (stride {} chars)", parts.len(), stride);

        // Strictly sequential: each request completes before the next is
        // issued, so the concatenation order equals the chunk order.
        let mut results = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            debug!("Processing chunk {}/{}", i + 1, parts.len());
            results.push(self.request(build_prompt(part)).await?);
        }

        Ok(results.join("\n"))
    }

    /// Issue a single generation request
    async fn request(&self, prompt: String) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ],
            temperature: Some(TEMPERATURE),
        };

        self.client.generate(request).await
    }
}
