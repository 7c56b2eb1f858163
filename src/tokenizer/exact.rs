use super::TokenCounter;
use thiserror::Error;
use tiktoken_rs::CoreBPE;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Failed to load encoding {name}: {reason}")]
    LoadFailed { name: String, reason: String },
}

/// Exact subword token counts from a tiktoken BPE encoding
pub struct ExactTokenizer {
    name: String,
    bpe: CoreBPE,
}

impl ExactTokenizer {
    /// Load a BPE encoding by name (e.g. "cl100k_base")
    pub fn new(encoding: &str) -> Result<Self, TokenizerError> {
        let loaded = match encoding {
            "cl100k_base" => tiktoken_rs::cl100k_base(),
            "o200k_base" => tiktoken_rs::o200k_base(),
            "p50k_base" => tiktoken_rs::p50k_base(),
            "p50k_edit" => tiktoken_rs::p50k_edit(),
            "r50k_base" => tiktoken_rs::r50k_base(),
            other => return Err(TokenizerError::UnknownEncoding(other.to_string())),
        };

        let bpe = loaded.map_err(|e| TokenizerError::LoadFailed {
            name: encoding.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name: encoding.to_string(),
            bpe,
        })
    }
}

impl TokenCounter for ExactTokenizer {
    fn count_tokens(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        // Special-token markers in document text are counted as ordinary text
        self.bpe.encode_ordinary(text).len()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
