// Public API exports
pub mod chunker;
pub mod document;
pub mod metadata;
pub mod normalizer;
pub mod output;
pub mod segmenter;
pub mod tokenizer;

// Re-export main types for convenience
pub use chunker::{
    Chunker, ChunkerBuilder, ChunkingConfig, ConfigError, DEFAULT_CHUNK_SIZE,
    DEFAULT_MIN_CHUNK_SIZE, DEFAULT_OVERLAP_PERCENT,
};

pub use document::{
    DocumentError, DocumentProcessor, FileInfo, PageSource, PageText, PdfPageSource,
    TextPageSource,
};

pub use metadata::{text_stats, Chunk, Metadata, TextStats};

pub use output::{ChunkSummary, OutputError, default_output_path, save_to_json};

pub use tokenizer::{ApproximateTokenizer, ExactTokenizer, TokenCounter, token_counter_for};
