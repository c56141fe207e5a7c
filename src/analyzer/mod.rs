//! Text analysis: tokenization plus frequency bookkeeping.
//!
//! [`TextAnalyzer`] owns the [`Trie`] and a [`Tokenizer`], and is the
//! single aggregate through which text ingestion flows. The engine layers
//! caching and typo tolerance on top of it.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;

use crate::model::WordFrequency;
use crate::serialization::SerializationError;
use crate::tokenizer::{SimpleTokenizer, Tokenizer};
use crate::trie::{Trie, TrieError};

/// Word-frequency analyzer over a stream of ingested text.
///
/// # Example
///
/// ```rust
/// use libautocomplete::analyzer::TextAnalyzer;
///
/// let mut analyzer = TextAnalyzer::new();
/// analyzer.add_text("to be or not to be").unwrap();
/// assert_eq!(analyzer.word_frequency("to").unwrap(), 2);
/// assert_eq!(analyzer.top_words(1).unwrap()[0].word, "be");
/// ```
pub struct TextAnalyzer {
    trie: Trie,
    tokenizer: Box<dyn Tokenizer + Send + Sync>,
}

impl TextAnalyzer {
    /// Creates an analyzer with the default [`SimpleTokenizer`].
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(SimpleTokenizer::new()))
    }

    /// Creates an analyzer with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer + Send + Sync>) -> Self {
        Self {
            trie: Trie::new(),
            tokenizer,
        }
    }

    /// Tokenizes `text` and records every token in the trie.
    pub fn add_text(&mut self, text: &str) -> Result<(), TrieError> {
        for token in self.tokenizer.tokenize(text) {
            self.trie.insert(&token)?;
        }
        Ok(())
    }

    /// Returns how often a word has been seen, or 0 if never.
    pub fn word_frequency(&self, word: &str) -> Result<u32, TrieError> {
        self.trie.frequency(word)
    }

    /// Returns the `n` most frequent words, most frequent first.
    pub fn top_words(&self, n: usize) -> Result<Vec<WordFrequency>, TrieError> {
        self.trie.top_frequent_words(n)
    }

    /// Returns every recorded word with its frequency.
    pub fn all_words(&self) -> HashMap<String, u32> {
        self.trie.all_words()
    }

    /// Returns the recorded words fully matching a regex pattern.
    ///
    /// The pattern is anchored to the whole word, so `"ap.*"` matches
    /// `apple` but not `snapple`.
    pub fn words_by_regex(&self, pattern: &str) -> Result<HashMap<String, u32>, regex::Error> {
        let anchored = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(self
            .all_words()
            .into_iter()
            .filter(|(word, _)| anchored.is_match(word))
            .collect())
    }

    /// Removes a word from the analyzer.
    ///
    /// `prune` additionally deletes trie nodes left unused by the removal.
    pub fn remove_word(&mut self, word: &str, prune: bool) -> Result<(), TrieError> {
        self.trie.remove(word, prune)
    }

    /// Forgets all recorded words.
    pub fn clear(&mut self) {
        self.trie.clear();
    }

    /// The tokenizer in use.
    pub fn tokenizer(&self) -> &(dyn Tokenizer + Send + Sync) {
        self.tokenizer.as_ref()
    }

    /// Read access to the underlying trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Saves the underlying trie in the versioned binary format.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SerializationError> {
        self.trie.save_to_file(path)
    }

    /// Replaces the underlying trie with one loaded from a file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), SerializationError> {
        self.trie.load_from_file(path)
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
