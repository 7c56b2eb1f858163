use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::{chunk_id_from_metadata, content_hash};
use crate::segmenter;

/// Open side-table of caller-supplied metadata (source path, page number, ...)
pub type Metadata = Map<String, Value>;

/// Keys computed for every chunk, in output order
pub const COMPUTED_KEYS: [&str; 10] = [
    "text",
    "chunk_id",
    "content_hash",
    "chunk_index",
    "token_count",
    "char_count",
    "word_count",
    "sentence_count",
    "position_in_doc_percent",
    "created_at",
];

/// Computed keys that caller metadata can never replace
pub const PROTECTED_KEYS: [&str; 3] = ["text", "chunk_id", "content_hash"];

/// Word and sentence statistics for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Whitespace-delimited words
    pub word_count: usize,
    /// Sentences as seen by the segmenter
    pub sentence_count: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            word_count: text.split_whitespace().count(),
            sentence_count: segmenter::count_sentences(text),
        }
    }
}

/// A chunk of text ready for embedding, with its computed fields and
/// the caller's metadata kept apart
///
/// Serializes to one flat JSON object: computed fields first, then caller
/// keys. A caller key with the same name as a computed field replaces it in
/// the flat output, except for the protected `text`, `chunk_id` and
/// `content_hash`. The typed fields themselves are never altered.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub text: String,
    /// `None` when no (or empty) caller metadata was supplied
    pub chunk_id: Option<String>,
    pub content_hash: String,
    /// Zero-based index within the originating page
    pub chunk_index: usize,
    pub token_count: usize,
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    /// Relative offset in the document, 0-100, two decimals
    pub position_in_doc_percent: f64,
    pub created_at: DateTime<Utc>,
    pub metadata: Metadata,
}

impl Chunk {
    /// Assemble a chunk record around finished text
    pub fn assemble(
        text: String,
        chunk_index: usize,
        token_count: usize,
        position_in_doc_percent: f64,
        metadata: Option<&Metadata>,
    ) -> Self {
        let stats = TextStats::of(&text);

        Self {
            // an empty side-table counts as no metadata
            chunk_id: metadata
                .filter(|m| !m.is_empty())
                .map(|m| chunk_id_from_metadata(m, chunk_index)),
            content_hash: content_hash(&text),
            chunk_index,
            token_count,
            char_count: text.chars().count(),
            word_count: stats.word_count,
            sentence_count: stats.sentence_count,
            position_in_doc_percent: super::round2(position_in_doc_percent),
            created_at: Utc::now(),
            metadata: metadata.cloned().unwrap_or_default(),
            text,
        }
    }

    /// Overwrite the relative position (rounded to two decimals)
    pub fn set_position(&mut self, percent: f64) {
        self.position_in_doc_percent = super::round2(percent);
    }

    /// Look up a caller metadata value
    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Flatten into a single ordered mapping
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("text".into(), Value::from(self.text.as_str()));
        record.insert(
            "chunk_id".into(),
            self.chunk_id.as_deref().map(Value::from).unwrap_or(Value::Null),
        );
        record.insert("content_hash".into(), Value::from(self.content_hash.as_str()));
        record.insert("chunk_index".into(), Value::from(self.chunk_index));
        record.insert("token_count".into(), Value::from(self.token_count));
        record.insert("char_count".into(), Value::from(self.char_count));
        record.insert("word_count".into(), Value::from(self.word_count));
        record.insert("sentence_count".into(), Value::from(self.sentence_count));
        record.insert(
            "position_in_doc_percent".into(),
            Value::from(self.position_in_doc_percent),
        );
        record.insert("created_at".into(), Value::from(self.created_at.to_rfc3339()));

        for (key, value) in &self.metadata {
            if PROTECTED_KEYS.contains(&key.as_str()) {
                tracing::debug!(key = key.as_str(), "ignoring caller metadata for protected key");
                continue;
            }
            if COMPUTED_KEYS.contains(&key.as_str()) {
                tracing::debug!(key = key.as_str(), "caller metadata replaces computed field");
            }
            record.insert(key.clone(), value.clone());
        }

        record
    }
}

impl Serialize for Chunk {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}
