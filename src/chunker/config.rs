use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{Chunker, DEFAULT_CHUNK_SIZE, DEFAULT_MIN_CHUNK_SIZE, DEFAULT_OVERLAP_PERCENT};
use crate::tokenizer::{token_counter_for, TokenCounter, DEFAULT_ENCODING};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid chunking configuration: {0}")]
    Invalid(String),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Chunking parameters, loadable from a JSON file
///
/// Missing fields take their defaults, so `{"chunk_size": 500}` is a
/// complete config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Token budget per chunk
    pub chunk_size: usize,
    /// Explicit overlap budget in tokens; overrides `chunk_overlap_percent`
    pub chunk_overlap: Option<usize>,
    /// Overlap as a fraction of `chunk_size`
    pub chunk_overlap_percent: f64,
    /// Smallest chunk (in tokens) that is kept
    pub min_chunk_size: usize,
    /// Tokenizer encoding name, or "approximate"
    pub encoding: String,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: None,
            chunk_overlap_percent: DEFAULT_OVERLAP_PERCENT,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl ChunkingConfig {
    /// Load a config from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Overlap budget actually used: the explicit value, or the percentage
    /// of `chunk_size` rounded down
    pub fn effective_overlap(&self) -> usize {
        self.chunk_overlap
            .unwrap_or_else(|| (self.chunk_size as f64 * self.chunk_overlap_percent) as usize)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::Invalid("chunk_size must be positive".into()));
        }
        if !(0.0..1.0).contains(&self.chunk_overlap_percent) {
            return Err(ConfigError::Invalid(format!(
                "chunk_overlap_percent must be in [0, 1), got {}",
                self.chunk_overlap_percent
            )));
        }
        let overlap = self.effective_overlap();
        if overlap >= self.chunk_size {
            return Err(ConfigError::Invalid(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}

/// Mutable builder for a [`Chunker`]
pub struct ChunkerBuilder {
    config: ChunkingConfig,
    counter: Option<Box<dyn TokenCounter>>,
}

impl ChunkerBuilder {
    /// Create a builder with default parameters
    pub fn new() -> Self {
        Self::from_config(ChunkingConfig::default())
    }

    /// Start from an existing config
    pub fn from_config(config: ChunkingConfig) -> Self {
        Self {
            config,
            counter: None,
        }
    }

    pub fn chunk_size(mut self, tokens: usize) -> Self {
        self.config.chunk_size = tokens;
        self
    }

    pub fn chunk_overlap(mut self, tokens: usize) -> Self {
        self.config.chunk_overlap = Some(tokens);
        self
    }

    /// Overlap as a fraction of the chunk size; ignored if an explicit
    /// overlap is set
    pub fn chunk_overlap_percent(mut self, percent: f64) -> Self {
        self.config.chunk_overlap_percent = percent;
        self
    }

    pub fn min_chunk_size(mut self, tokens: usize) -> Self {
        self.config.min_chunk_size = tokens;
        self
    }

    pub fn encoding(mut self, name: impl Into<String>) -> Self {
        self.config.encoding = name.into();
        self
    }

    /// Use this counter instead of resolving `encoding`
    pub fn token_counter(mut self, counter: Box<dyn TokenCounter>) -> Self {
        self.counter = Some(counter);
        self
    }

    /// Validate parameters and select the token counter
    pub fn build(self) -> Result<Chunker, ConfigError> {
        self.config.validate()?;

        let counter = match self.counter {
            Some(counter) => counter,
            None => token_counter_for(&self.config.encoding),
        };

        Ok(Chunker::with_counter(
            self.config.chunk_size,
            self.config.effective_overlap(),
            self.config.min_chunk_size,
            counter,
        ))
    }
}

impl Default for ChunkerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
