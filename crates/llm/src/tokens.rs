use std::sync::LazyLock;
use tiktoken_rs::CoreBPE;

static TOKENIZER: LazyLock<CoreBPE> = LazyLock::new(|| {
    tiktoken_rs::cl100k_base().expect("Failed to initialize cl100k_base tokenizer")
});

/// Count model tokens in a text
///
/// Uses the cl100k_base encoding, which matches the gpt-4 model family.
/// Only gates the chunking decision, never a billing computation.
pub fn estimate_tokens(text: &str) -> usize {
    TOKENIZER.encode_with_special_tokens(text).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_zero_tokens() {
        assert_eq!(estimate_tokens(""), 0);
    }

    #[test]
    fn test_nonempty_text_has_tokens() {
        assert!(estimate_tokens("The system shall allow users to log in.") > 0);
    }

    #[test]
    fn test_monotonic_under_concatenation() {
        let a = "User submits the login form.";
        let b = " The system validates credentials.";
        let combined = format!("{}{}", a, b);
        assert!(estimate_tokens(&combined) >= estimate_tokens(a));
        assert!(estimate_tokens(&combined) >= estimate_tokens(b));
    }
}
