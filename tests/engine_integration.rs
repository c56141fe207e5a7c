//! End-to-end engine behavior: ingestion, ranking, typo tolerance, and
//! cache interplay.

use libautocomplete::prelude::*;

fn fuzzy_config(tolerance: usize, threshold: usize) -> AutocompleteConfig {
    AutocompleteConfig::new(
        libautocomplete::distance::default_distance(),
        threshold,
        tolerance,
        0.5,
        1.0,
    )
    .unwrap()
}

#[test]
fn test_basic_completion_scenario() {
    // insert "apple" twice and "applet" once; completions for "app" come
    // back frequency-ranked
    let mut trie = Trie::new();
    trie.insert("apple").unwrap();
    trie.insert("apple").unwrap();
    trie.insert("applet").unwrap();

    let completions = trie.find_completions("app", 10).unwrap();
    assert_eq!(
        completions,
        vec![
            WordFrequency::new("apple", 2),
            WordFrequency::new("applet", 1),
        ]
    );
}

#[test]
fn test_capacity_one_lru_scenario() {
    let mut cache = LruCache::new(1);
    cache.put(1, "a");
    cache.put(2, "b");
    assert_eq!(cache.get(&1), None);
    assert_eq!(cache.get(&2), Some(&"b"));
}

#[test]
fn test_tolerance_one_scenario() {
    // dictionary {apple, ample, apply}: "aple" reaches apple and ample
    // (distance 1) but not apply (distance 2)
    let mut analyzer = TextAnalyzer::new();
    analyzer.add_text("apple ample apply").unwrap();
    let mut engine = AutocompleteEngine::with_config(analyzer, fuzzy_config(1, 0));

    let results = engine.autocomplete("aple", 10).unwrap();
    let words: Vec<&str> = results.iter().map(|c| c.word.as_str()).collect();
    assert!(words.contains(&"apple"), "missing apple in {:?}", words);
    assert!(words.contains(&"ample"), "missing ample in {:?}", words);
    assert!(!words.contains(&"apply"), "apply leaked into {:?}", words);
}

#[test]
fn test_ingestion_to_completion_pipeline() {
    let mut analyzer = TextAnalyzer::new();
    analyzer
        .add_text("The quick brown fox jumps over the lazy dog. The fox!")
        .unwrap();

    assert_eq!(analyzer.word_frequency("the").unwrap(), 3);
    assert_eq!(analyzer.word_frequency("fox").unwrap(), 2);

    let mut engine = AutocompleteEngine::new(analyzer);
    let results = engine.autocomplete("f", 5).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].word, "fox");
    assert_eq!(results[0].weight, 2.0);
}

#[test]
fn test_weights_scale_scores() {
    let mut analyzer = TextAnalyzer::new();
    analyzer.add_text("apple apple ample").unwrap();
    let config = AutocompleteConfig::new(
        libautocomplete::distance::default_distance(),
        0,
        2,
        0.25,
        2.0,
    )
    .unwrap();
    let mut engine = AutocompleteEngine::with_config(analyzer, config);

    let results = engine.autocomplete("app", 10).unwrap();
    // "apple" is an exact completion: 2 * 2.0
    let apple = results.iter().find(|c| c.word == "apple").unwrap();
    assert_eq!(apple.weight, 4.0);
    // "ample" arrives via the fuzzy path: 1 * 0.25
    let ample = results.iter().find(|c| c.word == "ample").unwrap();
    assert_eq!(ample.weight, 0.25);
    // Exact outranks similar in the final ordering
    assert!(results[0].word == "apple");
}

#[test]
fn test_limit_truncates_after_merge() {
    let mut analyzer = TextAnalyzer::new();
    analyzer.add_text("apple apple apple applet applet apply").unwrap();
    let mut engine = AutocompleteEngine::new(analyzer);

    let top_two = engine.autocomplete("app", 2).unwrap();
    assert_eq!(top_two.len(), 2);
    assert_eq!(top_two[0].word, "apple");
    assert_eq!(top_two[1].word, "applet");
}

#[test]
fn test_repeated_queries_are_stable() {
    let mut analyzer = TextAnalyzer::new();
    analyzer.add_text("banana bandana band banner").unwrap();
    let mut engine = AutocompleteEngine::with_config(analyzer, fuzzy_config(1, 0));

    let first = engine.autocomplete("ban", 10).unwrap();
    for _ in 0..5 {
        let again = engine.autocomplete("ban", 10).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_mixed_case_queries_share_results() {
    let mut analyzer = TextAnalyzer::new();
    analyzer.add_text("Rust rust RUST").unwrap();
    let mut engine = AutocompleteEngine::new(analyzer);

    let lower = engine.autocomplete("ru", 5).unwrap();
    let upper = engine.autocomplete("RU", 5).unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower[0].weight, 3.0);
}

#[test]
fn test_removal_then_query() {
    let mut analyzer = TextAnalyzer::new();
    analyzer.add_text("apple applet").unwrap();
    analyzer.remove_word("apple", true).unwrap();

    let mut engine = AutocompleteEngine::new(analyzer);
    let results = engine.autocomplete("app", 10).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].word, "applet");
}

#[test]
fn test_tolerance_zero_skips_fuzzy_path_entirely() {
    let mut analyzer = TextAnalyzer::new();
    analyzer.add_text("apple ample").unwrap();
    let mut engine = AutocompleteEngine::new(analyzer);

    assert!(engine.autocomplete("aple", 10).unwrap().is_empty());
}

#[test]
fn test_custom_distance_function() {
    use std::sync::Arc;

    // A metric that only ever reports 0 for equal strings and 9 otherwise:
    // fuzzy expansion degenerates to exact matching
    let exact_only: DistanceFn = Arc::new(|a, b| if a == b { 0 } else { 9 });
    let config = AutocompleteConfig::new(exact_only, 0, 1, 0.5, 1.0).unwrap();

    let mut analyzer = TextAnalyzer::new();
    analyzer.add_text("apple ample").unwrap();
    let mut engine = AutocompleteEngine::with_config(analyzer, config);

    assert!(engine.autocomplete("aple", 10).unwrap().is_empty());
    let exact = engine.autocomplete("app", 10).unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].word, "apple");
}
