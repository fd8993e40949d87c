/// Caseforge error types
#[derive(Debug, thiserror::Error)]
pub enum CaseforgeError {
    /// Input document missing or empty after extraction
    #[error("Input error: {0}")]
    Input(String),

    /// Remote generation call failed. `retryable` classifies transport
    /// errors and 429/5xx responses; there is no automatic retry, the
    /// flag only tells the caller whether retrying could help.
    #[error("Generation error: {message}")]
    Generation { message: String, retryable: bool },

    /// Generation output contained no valid 4-column table rows
    #[error("No valid test case rows found in the model output")]
    ParseEmpty,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output serialization error (CSV/XLSX)
    #[error("Export error: {0}")]
    Export(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CaseforgeError {
    /// Create input error
    pub fn input<S: Into<String>>(msg: S) -> Self {
        Self::Input(msg.into())
    }

    /// Create a fatal (non-retryable) generation error
    pub fn generation<S: Into<String>>(msg: S) -> Self {
        Self::Generation {
            message: msg.into(),
            retryable: false,
        }
    }

    /// Create a retryable generation error
    pub fn generation_retryable<S: Into<String>>(msg: S) -> Self {
        Self::Generation {
            message: msg.into(),
            retryable: true,
        }
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create export error
    pub fn export<S: Into<String>>(msg: S) -> Self {
        Self::Export(msg.into())
    }

    /// Whether retrying the failed operation could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Generation {
                retryable: true,
                ..
            }
        )
    }
}
