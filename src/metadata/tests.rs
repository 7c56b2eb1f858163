use super::*;
use serde_json::json;

fn page_metadata() -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("source_name".into(), json!("report"));
    metadata.insert("page_number".into(), json!(4));
    metadata
}

// ========================================================================
// Fingerprint Tests
// ========================================================================

#[test]
fn test_content_hash_known_value() {
    assert_eq!(
        content_hash(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        content_hash("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_content_hash_depends_only_on_text() {
    let a = Chunk::assemble("Same words.".into(), 0, 2, 0.0, None);
    let b = Chunk::assemble("Same words.".into(), 7, 99, 50.0, Some(&page_metadata()));
    assert_eq!(a.content_hash, b.content_hash);
    assert_ne!(a.content_hash, content_hash("Other words."));
}

#[test]
fn test_chunk_id_format() {
    assert_eq!(chunk_id("manual", "3", 12), "manual_p3_c12");
    assert_eq!(chunk_id_from_metadata(&page_metadata(), 2), "report_p4_c2");
}

#[test]
fn test_chunk_id_defaults() {
    assert_eq!(chunk_id_from_metadata(&Metadata::new(), 0), "unknown_p0_c0");

    let mut metadata = Metadata::new();
    metadata.insert("page_number".into(), json!("iv"));
    assert_eq!(chunk_id_from_metadata(&metadata, 1), "unknown_piv_c1");
}

// ========================================================================
// Record Tests
// ========================================================================

#[test]
fn test_assemble_computes_stats() {
    let chunk = Chunk::assemble(
        "Città grande. Molto bella!".into(),
        1,
        6,
        33.333,
        Some(&page_metadata()),
    );

    assert_eq!(chunk.chunk_id.as_deref(), Some("report_p4_c1"));
    assert_eq!(chunk.chunk_index, 1);
    assert_eq!(chunk.token_count, 6);
    assert_eq!(chunk.char_count, 26);
    assert_eq!(chunk.word_count, 4);
    assert_eq!(chunk.sentence_count, 2);
    assert_eq!(chunk.position_in_doc_percent, 33.33);
}

#[test]
fn test_no_metadata_means_no_chunk_id() {
    let chunk = Chunk::assemble("Hello there.".into(), 0, 3, 0.0, None);
    assert!(chunk.chunk_id.is_none());
    assert!(chunk.metadata.is_empty());
    assert_eq!(chunk.to_record()["chunk_id"], serde_json::Value::Null);
}

#[test]
fn test_empty_metadata_means_no_chunk_id() {
    let chunk = Chunk::assemble("Hello there.".into(), 0, 3, 0.0, Some(&Metadata::new()));
    assert!(chunk.chunk_id.is_none());
    assert_eq!(chunk.to_record()["chunk_id"], serde_json::Value::Null);
}

#[test]
fn test_set_position_rounds() {
    let mut chunk = Chunk::assemble("x".into(), 0, 0, 0.0, None);
    chunk.set_position(2.0 / 3.0 * 100.0);
    assert_eq!(chunk.position_in_doc_percent, 66.67);
}

#[test]
fn test_record_key_order() {
    let chunk = Chunk::assemble("Body.".into(), 0, 1, 0.0, Some(&page_metadata()));
    let record = chunk.to_record();
    let keys: Vec<&str> = record.keys().map(|k| k.as_str()).collect();

    assert_eq!(&keys[..COMPUTED_KEYS.len()], &COMPUTED_KEYS[..]);
    assert_eq!(&keys[COMPUTED_KEYS.len()..], &["source_name", "page_number"]);
}

#[test]
fn test_caller_metadata_precedence() {
    let mut metadata = page_metadata();
    metadata.insert("word_count".into(), json!(999));
    metadata.insert("text".into(), json!("hijacked"));
    metadata.insert("content_hash".into(), json!("bogus"));
    metadata.insert("chunk_id".into(), json!("bogus"));

    let chunk = Chunk::assemble("Two words.".into(), 0, 2, 0.0, Some(&metadata));
    let record = chunk.to_record();

    // unprotected computed key: caller wins in the flat record
    assert_eq!(record["word_count"], json!(999));
    // protected keys keep computed values
    assert_eq!(record["text"], json!("Two words."));
    assert_eq!(record["content_hash"], json!(content_hash("Two words.")));
    assert_eq!(record["chunk_id"], json!("report_p4_c0"));
    // typed fields are untouched
    assert_eq!(chunk.word_count, 2);
}

#[test]
fn test_serialize_is_flat_and_unescaped() {
    let chunk = Chunk::assemble("Caffè lungo.".into(), 0, 3, 0.0, Some(&page_metadata()));
    let json = serde_json::to_string(&chunk).unwrap();

    assert!(json.starts_with("{\"text\":\"Caffè lungo.\""));
    assert!(json.contains("\"source_name\":\"report\""));
    assert!(!json.contains("\"metadata\""));
}

#[test]
fn test_text_stats() {
    let stats = TextStats::of("  one two\tthree\nfour. Five six.  ");
    assert_eq!(stats.word_count, 6);
    assert_eq!(stats.sentence_count, 2);
    assert_eq!(TextStats::of(""), TextStats::default());
    assert_eq!(text_stats("Uno due. Tre."), TextStats::of("Uno due. Tre."));
}

#[test]
fn test_round2() {
    assert_eq!(round2(12.345678), 12.35);
    assert_eq!(round2(0.0), 0.0);
    assert_eq!(round2(100.0), 100.0);
}
