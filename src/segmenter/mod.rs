//! Punctuation + capitalization sentence splitting.
//!
//! A split happens after `.`, `!` or `?` followed by whitespace when the next
//! character is an uppercase letter. Abbreviations, decimals and quoted
//! punctuation are not special-cased.

use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(test)]
mod tests;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?](\s+)[A-ZÀÁÈÉÌÍÒÓÙÚ]").expect("Invalid sentence boundary regex")
});

/// Split text into trimmed, non-empty sentences
///
/// The whitespace run at each boundary belongs to neither sentence.
/// Text without a boundary comes back as a single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for caps in SENTENCE_BOUNDARY.captures_iter(text) {
        let Some(gap) = caps.get(1) else {
            continue;
        };
        push_trimmed(&mut sentences, &text[start..gap.start()]);
        start = gap.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

/// Number of sentences in `text`
pub fn count_sentences(text: &str) -> usize {
    split_sentences(text).len()
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}
