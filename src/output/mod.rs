//! JSON persistence and run summaries for chunk lists.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::metadata::Chunk;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize chunks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write chunks as a pretty-printed JSON array, creating parent directories
///
/// Non-ASCII text is written as-is, not escaped.
pub fn save_to_json(chunks: &[Chunk], output_path: &Path) -> Result<PathBuf, OutputError> {
    let io_err = |source| OutputError::Io {
        path: output_path.to_path_buf(),
        source,
    };

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let file = File::create(output_path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, chunks)?;
    writer.flush().map_err(io_err)?;

    tracing::info!(path = %output_path.display(), chunks = chunks.len(), "saved chunks");
    Ok(output_path.to_path_buf())
}

/// `<dir>/<stem>_chunks.json` next to the input document
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(format!("{}_chunks.json", stem))
}

/// Aggregate statistics over a chunk list
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChunkSummary {
    pub chunk_count: usize,
    pub avg_tokens: f64,
    pub avg_chars: f64,
    pub max_tokens: usize,
}

impl ChunkSummary {
    pub fn of(chunks: &[Chunk]) -> Self {
        if chunks.is_empty() {
            return Self::default();
        }

        let count = chunks.len() as f64;
        Self {
            chunk_count: chunks.len(),
            avg_tokens: chunks.iter().map(|c| c.token_count).sum::<usize>() as f64 / count,
            avg_chars: chunks.iter().map(|c| c.char_count).sum::<usize>() as f64 / count,
            max_tokens: chunks.iter().map(|c| c.token_count).max().unwrap_or(0),
        }
    }
}
