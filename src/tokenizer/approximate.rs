use super::TokenCounter;

/// Character-based token estimate: one token per four Unicode characters
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateTokenizer;

impl TokenCounter for ApproximateTokenizer {
    fn count_tokens(&self, text: &str) -> usize {
        text.chars().count() / 4
    }

    fn name(&self) -> &str {
        "approximate"
    }
}
