use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::DocumentError;
use crate::metadata::{round2, Metadata};

/// File-level facts attached to every chunk of a document
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    /// Path as given by the caller
    pub source: String,
    /// File name without extension; used in chunk ids
    pub source_name: String,
    pub source_path: PathBuf,
    pub file_name: String,
    /// Extension with its leading dot, or empty
    pub file_extension: String,
    pub file_size_bytes: u64,
    pub file_modified_at: Option<DateTime<Utc>>,
    pub processing_timestamp: DateTime<Utc>,
}

impl FileInfo {
    /// Stat a document on disk
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let stats = fs::metadata(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let source_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        };

        Ok(Self {
            source: path.display().to_string(),
            source_name: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            source_path,
            file_name: path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            file_extension: path
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default(),
            file_size_bytes: stats.len(),
            file_modified_at: stats.modified().ok().map(DateTime::<Utc>::from),
            processing_timestamp: Utc::now(),
        })
    }

    pub fn file_size_mb(&self) -> f64 {
        round2(self.file_size_bytes as f64 / (1024.0 * 1024.0))
    }

    /// Caller metadata shared by every page of the document
    pub fn to_metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert("source".into(), Value::from(self.source.as_str()));
        metadata.insert("source_name".into(), Value::from(self.source_name.as_str()));
        metadata.insert(
            "source_path".into(),
            Value::from(self.source_path.display().to_string()),
        );
        metadata.insert("file_name".into(), Value::from(self.file_name.as_str()));
        metadata.insert("file_extension".into(), Value::from(self.file_extension.as_str()));
        metadata.insert("file_size_bytes".into(), Value::from(self.file_size_bytes));
        metadata.insert("file_size_mb".into(), Value::from(self.file_size_mb()));
        metadata.insert(
            "file_modified_at".into(),
            self.file_modified_at
                .map(|t| Value::from(t.to_rfc3339()))
                .unwrap_or(Value::Null),
        );
        metadata.insert(
            "processing_timestamp".into(),
            Value::from(self.processing_timestamp.to_rfc3339()),
        );
        metadata
    }
}
