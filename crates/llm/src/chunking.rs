use crate::tokens::estimate_tokens;

/// Split text into fixed-stride chunks
///
/// Chunks are sequential, non-overlapping and order-preserving; joining
/// them reproduces the input exactly. The stride is in bytes but cuts are
/// moved forward to the next char boundary, so a chunk may run a few bytes
/// past the stride on multi-byte text. Splitting ignores sentence and
/// paragraph boundaries; a chunk may fracture a sentence mid-way. That is
/// an accepted limitation of the fixed-stride policy, not a defect.
pub fn chunk_payloads(text: &str, stride: usize) -> Vec<String> {
    let stride = stride.max(1);

    if text.len() <= stride {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let mut end = (start + stride).min(text.len());
        while !text.is_char_boundary(end) {
            end += 1;
        }

        chunks.push(text[start..end].to_string());
        start = end;
    }

    chunks
}

/// Derive the character stride for a text and a per-chunk token allowance
///
/// The allowance is the prompt budget minus the instruction template
/// overhead; it converts to characters proportionally to the text's own
/// measured tokens-per-char ratio.
pub fn derive_stride(text: &str, available_tokens: usize) -> usize {
    let text_tokens = estimate_tokens(text).max(1);
    (text.len() * available_tokens / text_tokens).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_chunk() {
        let text = "This is a short text.";
        let chunks = chunk_payloads(text, 100);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_equal_split() {
        let text = "x".repeat(9000);
        let chunks = chunk_payloads(&text, 3000);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.len() == 3000));
    }

    #[test]
    fn test_lossless_concatenation() {
        let text = "First sentence. Second sentence. Third sentence. Fourth sentence.";
        let chunks = chunk_payloads(text, 10);
        assert!(chunks.len() > 1);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_multibyte_boundaries() {
        // 3-byte chars with a stride that lands mid-char
        let text = "가나다라마바사아자차".repeat(10);
        let chunks = chunk_payloads(&text, 7);
        assert_eq!(chunks.concat(), text);
        assert!(chunks.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_zero_stride_does_not_loop() {
        let chunks = chunk_payloads("abc", 0);
        assert_eq!(chunks.concat(), "abc");
    }

    #[test]
    fn test_derive_stride_positive() {
        let text = "The system shall send a confirmation email after signup.";
        assert!(derive_stride(text, 10) >= 1);
        assert!(derive_stride("", 10) >= 1);
    }
}
