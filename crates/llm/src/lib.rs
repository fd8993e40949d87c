//! Caseforge LLM Integration
//!
//! OpenAI-compatible chat client and test case generation

mod chunking;
mod client;
mod generate;
mod llm_trait;
mod prompts;
mod tokens;
mod types;

pub use chunking::{chunk_payloads, derive_stride};
pub use client::OpenAiClient;
pub use generate::CaseGenerator;
pub use llm_trait::LlmClient;
pub use prompts::{build_prompt, SYSTEM_PROMPT};
pub use tokens::estimate_tokens;
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse};
