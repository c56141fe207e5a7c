//! Persistence round-trips through real files.

use libautocomplete::prelude::*;
use tempfile::TempDir;

fn populated_trie() -> Trie {
    let mut trie = Trie::new();
    for word in [
        "apple", "apple", "apple", "applet", "apply", "banana", "band", "bandana",
    ] {
        trie.insert(word).unwrap();
    }
    trie
}

#[test]
fn test_binary_file_roundtrip_preserves_queries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dict.trie");

    let trie = populated_trie();
    trie.save_to_file(&path).unwrap();
    let loaded = Trie::from_file(&path).unwrap();

    assert_eq!(loaded.all_words(), trie.all_words());
    assert_eq!(
        loaded.top_frequent_words(3).unwrap(),
        trie.top_frequent_words(3).unwrap()
    );
    assert_eq!(
        loaded.find_completions("app", 10).unwrap(),
        trie.find_completions("app", 10).unwrap()
    );
    assert_eq!(
        loaded.find_completions("ban", 2).unwrap(),
        trie.find_completions("ban", 2).unwrap()
    );
}

#[test]
fn test_empty_trie_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.trie");

    let trie = Trie::new();
    trie.save_to_file(&path).unwrap();
    let loaded = Trie::from_file(&path).unwrap();

    assert!(loaded.all_words().is_empty());
    assert!(loaded.find_completions("a", 1).unwrap().is_empty());
}

#[test]
fn test_load_replaces_existing_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dict.trie");

    populated_trie().save_to_file(&path).unwrap();

    let mut trie = Trie::new();
    trie.insert("stale").unwrap();
    trie.load_from_file(&path).unwrap();

    assert_eq!(trie.frequency("stale").unwrap(), 0);
    assert_eq!(trie.frequency("apple").unwrap(), 3);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.trie");

    let err = Trie::from_file(&path).unwrap_err();
    assert!(matches!(err, SerializationError::FileNotFound(_)));
}

#[test]
fn test_corrupted_magic_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dict.trie");

    populated_trie().save_to_file(&path).unwrap();
    let mut bytes = std::fs::read(&path).unwrap();
    bytes[0] ^= 0xFF;
    std::fs::write(&path, bytes).unwrap();

    let err = Trie::from_file(&path).unwrap_err();
    assert!(matches!(err, SerializationError::InvalidMagic { .. }));
}

#[test]
fn test_future_version_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dict.trie");

    populated_trie().save_to_file(&path).unwrap();
    let mut bytes = std::fs::read(&path).unwrap();
    bytes[4..8].copy_from_slice(&2u32.to_be_bytes());
    std::fs::write(&path, bytes).unwrap();

    let err = Trie::from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SerializationError::UnsupportedVersion { found: 2 }
    ));
}

#[test]
fn test_truncated_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dict.trie");

    populated_trie().save_to_file(&path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() - 3]).unwrap();

    let err = Trie::from_file(&path).unwrap_err();
    assert!(matches!(err, SerializationError::Io(_)));
}

#[test]
fn test_analyzer_persistence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("analyzer.trie");

    let mut analyzer = TextAnalyzer::new();
    analyzer.add_text("one two two three three three").unwrap();
    analyzer.save_to_file(&path).unwrap();

    let mut restored = TextAnalyzer::new();
    restored.load_from_file(&path).unwrap();
    assert_eq!(restored.word_frequency("three").unwrap(), 3);
    assert_eq!(restored.top_words(1).unwrap()[0].word, "three");
}

#[test]
fn test_cross_format_equivalence() {
    let trie = populated_trie();

    let mut binary = Vec::new();
    BinarySerializer::serialize(&trie, &mut binary).unwrap();
    let from_binary = BinarySerializer::deserialize(&binary[..]).unwrap();

    let mut text = Vec::new();
    PlainTextSerializer::serialize(&trie, &mut text).unwrap();
    let from_text = PlainTextSerializer::deserialize(&text[..]).unwrap();

    let mut json = Vec::new();
    JsonSerializer::serialize(&trie, &mut json).unwrap();
    let from_json = JsonSerializer::deserialize(&json[..]).unwrap();

    assert_eq!(from_binary.all_words(), trie.all_words());
    assert_eq!(from_text.all_words(), trie.all_words());
    assert_eq!(from_json.all_words(), trie.all_words());
}
