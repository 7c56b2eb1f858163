//! Cleaning pass applied to extracted page text before any splitting.

use once_cell::sync::Lazy;
use regex::Regex;


// C0 controls except tab, LF and CR; DEL and the C1 block
static CONTROL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F-\x9F]").expect("Invalid control-char regex")
});

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("Invalid space regex"));

static NEWLINE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("Invalid newline regex"));

static BLANK_LINE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("Invalid blank-line regex"));

/// Normalize extracted text
///
/// Steps, in order:
/// 1. Drop control code points (tab, LF and CR survive)
/// 2. Collapse runs of spaces to one space
/// 3. Collapse 3+ newlines to exactly two
/// 4. Trim every line
/// 5. Collapse blank-line runs left behind by step 4
/// 6. Trim the whole text
///
/// `clean(&clean(x)) == clean(x)` for any input.
pub fn clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = CONTROL_CHARS.replace_all(text, "");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = NEWLINE_RUNS.replace_all(&text, "\n\n");

    let text = text.split('\n').map(str::trim).collect::<Vec<_>>().join("\n");

    let text = BLANK_LINE_RUNS.replace_all(&text, "\n\n");

    text.trim().to_string()
}
