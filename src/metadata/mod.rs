mod fingerprint;
mod record;

#[cfg(test)]
mod tests;

pub use fingerprint::{chunk_id, chunk_id_from_metadata, content_hash};
pub use record::{Chunk, Metadata, TextStats, COMPUTED_KEYS, PROTECTED_KEYS};

/// Word and sentence counts for `text`
pub fn text_stats(text: &str) -> TextStats {
    TextStats::of(text)
}

/// Round to two decimal places, the precision used for all percentages
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
