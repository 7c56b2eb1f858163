mod approximate;
mod exact;


pub use approximate::ApproximateTokenizer;
pub use exact::{ExactTokenizer, TokenizerError};

/// Encoding used when none is configured
pub const DEFAULT_ENCODING: &str = "cl100k_base";

/// Core trait for anything that can count tokens in a piece of text
///
/// Implementations are called once per sentence and again while building
/// overlap, so they must not re-initialize state per call.
pub trait TokenCounter: Send + Sync {
    /// Count the tokens in `text`. Empty text is always 0.
    fn count_tokens(&self, text: &str) -> usize;

    /// Short name for logs and summaries (e.g. "cl100k_base", "approximate")
    fn name(&self) -> &str;
}

/// Select a token counter for an encoding name
///
/// `approx`, `approximate` and `none` select the character estimate directly.
/// Any other name is resolved as a BPE encoding; if that fails the
/// approximate counter is used for the lifetime of the returned value.
pub fn token_counter_for(encoding: &str) -> Box<dyn TokenCounter> {
    match encoding.to_ascii_lowercase().as_str() {
        "approx" | "approximate" | "none" | "" => Box::new(ApproximateTokenizer),
        name => match ExactTokenizer::new(name) {
            Ok(exact) => Box::new(exact),
            Err(e) => {
                tracing::warn!(
                    encoding = name,
                    "tokenizer unavailable ({}), falling back to approximate counting",
                    e
                );
                Box::new(ApproximateTokenizer)
            }
        },
    }
}
