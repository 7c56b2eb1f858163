use crate::metadata::{Chunk, Metadata};
use crate::normalizer;
use crate::segmenter;
use crate::tokenizer::TokenCounter;

use super::{ChunkerBuilder, ChunkingConfig, ConfigError};

/// Sentence-aware, token-budgeted text chunker
///
/// Parameters are fixed at construction; one instance can be shared across
/// pages and documents.
pub struct Chunker {
    chunk_size: usize,
    chunk_overlap: usize,
    min_chunk_size: usize,
    counter: Box<dyn TokenCounter>,
}

/// A sentence waiting in the packing buffer, with its own token count
#[derive(Clone, Copy)]
struct Pending<'a> {
    text: &'a str,
    tokens: usize,
}

impl Chunker {
    /// Build a chunker from a config, resolving its tokenizer
    pub fn new(config: ChunkingConfig) -> Result<Self, ConfigError> {
        ChunkerBuilder::from_config(config).build()
    }

    pub fn builder() -> ChunkerBuilder {
        ChunkerBuilder::new()
    }

    pub(crate) fn with_counter(
        chunk_size: usize,
        chunk_overlap: usize,
        min_chunk_size: usize,
        counter: Box<dyn TokenCounter>,
    ) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            min_chunk_size,
            counter,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    pub fn min_chunk_size(&self) -> usize {
        self.min_chunk_size
    }

    /// Name of the token counter in use
    pub fn tokenizer_name(&self) -> &str {
        self.counter.name()
    }

    pub fn count_tokens(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.counter.count_tokens(text)
    }

    /// Normalize text the way `build` does before splitting
    pub fn clean(&self, text: &str) -> String {
        normalizer::clean(text)
    }

    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        segmenter::split_sentences(text)
    }

    /// Split text into chunks
    ///
    /// Rules:
    /// - Text is cleaned first; under `min_chunk_size` tokens yields nothing
    /// - Text that fits in `chunk_size` becomes exactly one chunk at position 0
    /// - Otherwise whole sentences are packed greedily; when the next sentence
    ///   would overflow the budget the buffer is emitted and its trailing
    ///   sentences (up to `chunk_overlap` tokens) seed the next chunk
    /// - A sentence larger than `chunk_size` is never split; it becomes an
    ///   oversized chunk
    /// - Candidates under `min_chunk_size` are discarded without taking an index
    pub fn build(&self, text: &str, metadata: Option<&Metadata>) -> Vec<Chunk> {
        let text = normalizer::clean(text);
        if text.is_empty() {
            return vec![];
        }

        let total_tokens = self.count_tokens(&text);
        if total_tokens < self.min_chunk_size {
            return vec![];
        }

        // Fits in one chunk: the floor was already checked on the whole text
        if total_tokens <= self.chunk_size {
            return vec![Chunk::assemble(text, 0, total_tokens, 0.0, metadata)];
        }

        let estimated_chunks = total_tokens.div_ceil(self.chunk_size).max(1);
        let sentences = segmenter::split_sentences(&text);

        let mut chunks = Vec::new();
        let mut buffer: Vec<Pending<'_>> = Vec::new();
        let mut running_tokens = 0;
        let mut chunk_index = 0;

        for sentence in &sentences {
            let tokens = self.count_tokens(sentence);
            let separator = usize::from(!buffer.is_empty());

            if running_tokens + tokens + separator > self.chunk_size && !buffer.is_empty() {
                if let Some(chunk) = self.finalize(&buffer, chunk_index, estimated_chunks, metadata)
                {
                    chunks.push(chunk);
                    chunk_index += 1;
                }

                let (carried, carried_tokens) = self.carry_overlap(&buffer);
                buffer = carried;
                running_tokens = carried_tokens;
            }

            running_tokens += tokens + usize::from(!buffer.is_empty());
            buffer.push(Pending {
                text: sentence.as_str(),
                tokens,
            });
        }

        if !buffer.is_empty() {
            if let Some(chunk) = self.finalize(&buffer, chunk_index, estimated_chunks, metadata) {
                chunks.push(chunk);
            }
        }

        chunks
    }

    /// Join the buffer into a chunk, or `None` if it falls under the floor
    fn finalize(
        &self,
        buffer: &[Pending<'_>],
        chunk_index: usize,
        estimated_chunks: usize,
        metadata: Option<&Metadata>,
    ) -> Option<Chunk> {
        let text = buffer
            .iter()
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join(" ");
        let token_count = self.count_tokens(&text);

        if token_count < self.min_chunk_size {
            tracing::debug!(
                token_count,
                min_chunk_size = self.min_chunk_size,
                "discarding chunk below minimum size"
            );
            return None;
        }

        let position = chunk_index as f64 / estimated_chunks as f64 * 100.0;
        Some(Chunk::assemble(
            text,
            chunk_index,
            token_count,
            position,
            metadata,
        ))
    }

    /// Trailing whole sentences of `buffer` that fit in the overlap budget,
    /// in their original order, with their running token count
    fn carry_overlap<'a>(&self, buffer: &[Pending<'a>]) -> (Vec<Pending<'a>>, usize) {
        if self.chunk_overlap == 0 {
            return (Vec::new(), 0);
        }

        let mut carried_tokens = 0;
        let mut taken = 0;

        for pending in buffer.iter().rev() {
            let separator = usize::from(taken > 0);
            if carried_tokens + pending.tokens + separator > self.chunk_overlap {
                break;
            }
            carried_tokens += pending.tokens + separator;
            taken += 1;
        }

        (buffer[buffer.len() - taken..].to_vec(), carried_tokens)
    }
}

impl std::fmt::Debug for Chunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunker")
            .field("chunk_size", &self.chunk_size)
            .field("chunk_overlap", &self.chunk_overlap)
            .field("min_chunk_size", &self.min_chunk_size)
            .field("tokenizer", &self.counter.name())
            .finish()
    }
}
