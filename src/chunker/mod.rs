mod config;
mod splitter;


pub use config::{ChunkerBuilder, ChunkingConfig, ConfigError};
pub use splitter::Chunker;

/// Target tokens per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 300;

/// Overlap as a fraction of the chunk size when no explicit overlap is set
pub const DEFAULT_OVERLAP_PERCENT: f64 = 0.1;

/// Chunks (and pages) below this many tokens are dropped
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 20;
