use serde_json::Value;
use sha2::{Digest, Sha256};

use super::Metadata;

/// Lowercase hex SHA-256 of the UTF-8 bytes of `text`
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Build a chunk identifier: `{source_name}_p{page_number}_c{chunk_index}`
pub fn chunk_id(source_name: &str, page_number: &str, chunk_index: usize) -> String {
    format!("{}_p{}_c{}", source_name, page_number, chunk_index)
}

/// Chunk identifier from caller metadata
///
/// Uses `source_name` (default "unknown") and `page_number` (default 0).
pub fn chunk_id_from_metadata(metadata: &Metadata, chunk_index: usize) -> String {
    let source_name = metadata
        .get("source_name")
        .map(display_value)
        .unwrap_or_else(|| "unknown".to_string());
    let page_number = metadata
        .get("page_number")
        .map(display_value)
        .unwrap_or_else(|| "0".to_string());

    chunk_id(&source_name, &page_number, chunk_index)
}

/// Render a JSON value without quotes around strings
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
