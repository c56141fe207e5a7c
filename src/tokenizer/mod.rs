//! Text tokenization.
//!
//! Splits raw text into normalized word tokens for trie ingestion. The
//! engine also consults the tokenizer's lowercase flag to decide how query
//! prefixes and cache keys are case-folded, so the tokenizer is the single
//! source of truth for casing policy.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

/// Predicate deciding which characters survive into tokens.
pub type CharFilter = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Tokenizer settings: how to split, which characters to keep, and whether
/// to lowercase the output.
#[derive(Clone)]
pub struct TokenizerConfig {
    split_pattern: Regex,
    char_filter: CharFilter,
    lowercase: bool,
}

impl TokenizerConfig {
    /// Creates a config with explicit settings.
    pub fn new(split_pattern: Regex, char_filter: CharFilter, lowercase: bool) -> Self {
        Self {
            split_pattern,
            char_filter,
            lowercase,
        }
    }

    /// The pattern text is split on.
    pub fn split_pattern(&self) -> &Regex {
        &self.split_pattern
    }

    /// The character filter applied inside each raw token.
    pub fn char_filter(&self) -> &CharFilter {
        &self.char_filter
    }

    /// Whether tokens are lowercased.
    ///
    /// The engine mirrors this flag when normalizing query prefixes and
    /// cache keys.
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }
}

impl Default for TokenizerConfig {
    /// Splits on whitespace, keeps alphabetic characters, lowercases.
    fn default() -> Self {
        Self {
            split_pattern: Regex::new(r"\s+").expect("default split pattern is valid"),
            char_filter: Arc::new(char::is_alphabetic),
            lowercase: true,
        }
    }
}

impl fmt::Debug for TokenizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizerConfig")
            .field("split_pattern", &self.split_pattern.as_str())
            .field("lowercase", &self.lowercase)
            .finish_non_exhaustive()
    }
}

/// Splits text into normalized word tokens.
pub trait Tokenizer {
    /// Splits `text` into normalized tokens; empty tokens are dropped.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Current tokenizer settings.
    fn config(&self) -> &TokenizerConfig;

    /// Replaces the tokenizer settings.
    fn set_config(&mut self, config: TokenizerConfig);
}

/// Default tokenizer driven entirely by a [`TokenizerConfig`].
///
/// # Example
///
/// ```rust
/// use libautocomplete::tokenizer::{SimpleTokenizer, Tokenizer};
///
/// let tokenizer = SimpleTokenizer::new();
/// let tokens = tokenizer.tokenize("Hello, world! 42");
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimpleTokenizer {
    config: TokenizerConfig,
}

impl SimpleTokenizer {
    /// Creates a tokenizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer with the given settings.
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self { config }
    }

    fn process_word(&self, word: &str) -> String {
        let filtered = word.chars().filter(|&c| (self.config.char_filter)(c));
        if self.config.lowercase {
            filtered.flat_map(char::to_lowercase).collect()
        } else {
            filtered.collect()
        }
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.config
            .split_pattern
            .split(text)
            .map(|raw| self.process_word(raw))
            .filter(|token| !token.is_empty())
            .collect()
    }

    fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    fn set_config(&mut self, config: TokenizerConfig) {
        self.config = config;
    }
}
