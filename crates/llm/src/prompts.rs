//! Prompt templates for test case generation

/// System role instruction sent with every request
pub const SYSTEM_PROMPT: &str = "You are a test case generator.";

/// Base instruction template describing the expected table schema
const BASE_PROMPT: &str = r#"You are a QA expert.
Based on this functional text, generate a Markdown table with the test cases split into "Happy Path" and "Test to Fail".

It must have the columns: Type, Case Name, Steps, Expected Result."#;

/// Wrap a payload (full source text or one chunk) in the instruction template
pub fn build_prompt(payload: &str) -> String {
    format!("{}\n\nFunctional text:\n{}", BASE_PROMPT, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_payload() {
        let prompt = build_prompt("Users can reset their password.");
        assert!(prompt.contains("Users can reset their password."));
        assert!(prompt.contains("Happy Path"));
        assert!(prompt.contains("Test to Fail"));
    }

    #[test]
    fn test_template_names_all_columns() {
        let prompt = build_prompt("");
        for column in ["Type", "Case Name", "Steps", "Expected Result"] {
            assert!(prompt.contains(column), "missing column: {}", column);
        }
    }
}
