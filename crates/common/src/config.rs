use crate::error::CaseforgeError;
use serde::{Deserialize, Serialize};

/// Default prompt token budget (matches gpt-4-turbo usage here)
pub const DEFAULT_MAX_PROMPT_TOKENS: usize = 4000;

/// Caseforge application configuration
///
/// Passed explicitly into the generation client and chunking policy,
/// never read from ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Chat completion model name
    pub model: String,

    /// Maximum prompt token budget; above this the source text is chunked
    pub max_prompt_tokens: usize,

    /// API key for the generation service
    pub api_key: String,

    /// Base URL of the OpenAI-compatible API
    pub api_base_url: String,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4-turbo".to_string(),
            max_prompt_tokens: DEFAULT_MAX_PROMPT_TOKENS,
            api_key: String::new(),
            api_base_url: "https://api.openai.com/v1".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, CaseforgeError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            model: std::env::var("CASEFORGE_MODEL")
                .unwrap_or_else(|_| "gpt-4-turbo".to_string()),
            max_prompt_tokens: std::env::var("CASEFORGE_MAX_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_PROMPT_TOKENS),
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            api_base_url: std::env::var("CASEFORGE_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CaseforgeError> {
        if self.model.is_empty() {
            return Err(CaseforgeError::config("Model name cannot be empty"));
        }

        if self.api_key.is_empty() {
            return Err(CaseforgeError::config(
                "API key is not set (OPENAI_API_KEY)",
            ));
        }

        if !self.api_base_url.starts_with("http://")
            && !self.api_base_url.starts_with("https://")
        {
            return Err(CaseforgeError::config(
                "API base URL must start with http:// or https://",
            ));
        }

        if self.max_prompt_tokens == 0 {
            return Err(CaseforgeError::config(
                "Max prompt token budget cannot be 0",
            ));
        }

        Ok(())
    }
}
