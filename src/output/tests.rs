use super::*;
use crate::metadata::Metadata;
use serde_json::{json, Value};

fn sample_chunks() -> Vec<Chunk> {
    let mut metadata = Metadata::new();
    metadata.insert("source_name".into(), json!("città"));
    metadata.insert("page_number".into(), json!(1));

    vec![
        Chunk::assemble("Prima frase è qui.".into(), 0, 4, 0.0, Some(&metadata)),
        Chunk::assemble("Second chunk text that is longer.".into(), 1, 8, 50.0, Some(&metadata)),
    ]
}

#[test]
fn test_save_creates_directories_and_preserves_unicode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out").join("chunks.json");

    let written = save_to_json(&sample_chunks(), &path).unwrap();
    assert_eq!(written, path);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("Prima frase è qui."));
    assert!(raw.contains("città_p1_c0"));
    assert!(!raw.contains("\\u00e8"));

    let parsed: Value = serde_json::from_str(&raw).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[1]["chunk_index"], json!(1));
    assert_eq!(array[1]["position_in_doc_percent"], json!(50.0));
}

#[test]
fn test_save_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    save_to_json(&[], &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_save_to_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "x").unwrap();

    let result = save_to_json(&sample_chunks(), &blocker.join("out.json"));
    assert!(matches!(result, Err(OutputError::Io { .. })));
}

#[test]
fn test_default_output_path() {
    assert_eq!(
        default_output_path(Path::new("/data/docs/report.pdf")),
        PathBuf::from("/data/docs/report_chunks.json")
    );
    assert_eq!(
        default_output_path(Path::new("notes.txt")),
        PathBuf::from("notes_chunks.json")
    );
}

#[test]
fn test_summary() {
    let summary = ChunkSummary::of(&sample_chunks());
    assert_eq!(summary.chunk_count, 2);
    assert_eq!(summary.avg_tokens, 6.0);
    assert_eq!(summary.max_tokens, 8);
    assert_eq!(summary.avg_chars, (18.0 + 33.0) / 2.0);

    assert_eq!(ChunkSummary::of(&[]), ChunkSummary::default());
}
