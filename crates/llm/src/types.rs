use serde::{Deserialize, Serialize};

/// Chat completion request (OpenAI wire format)
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name (e.g., "gpt-4-turbo")
    pub model: String,

    /// Conversation messages (system instruction + user prompt)
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature; low values favor schema-conforming output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// One chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system" or "user")
    pub role: String,

    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Generated completions (one requested, one expected)
    pub choices: Vec<ChatChoice>,
}

/// One generated completion
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The assistant message carrying the generated text
    pub message: ChatMessage,
}
