//! Frequency-counting prefix trie.
//!
//! Each node owns its children keyed by character and carries an insertion
//! count; a word exists iff the node at the end of its path has a frequency
//! greater than zero. Queries enumerate frequency-bearing descendants
//! depth-first into a bounded [`TopK`] selector so result size never
//! exceeds the requested limit.
//!
//! Typo tolerance is served by [`Trie::find_similar_prefixes`], which scans
//! every stored word against a pluggable distance function. That scan is
//! O(stored words × average word length) per call; callers are expected to
//! cache its output (the engine does).

use std::collections::HashMap;
use std::path::Path;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::distance::DistanceFn;
use crate::model::WordFrequency;
use crate::serialization::{BinarySerializer, SerializationError, TrieSerializer};
use crate::topk::TopK;

/// Invalid-argument errors for trie operations.
///
/// Absent words and prefixes are never errors; they yield zero frequency or
/// empty results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The word argument was empty.
    #[error("word cannot be empty")]
    EmptyWord,

    /// The prefix argument was empty.
    #[error("prefix cannot be empty")]
    EmptyPrefix,

    /// The requested result limit was zero.
    #[error("limit must be at least 1")]
    InvalidLimit,
}

/// A node of the trie: children keyed by character plus a frequency count.
#[derive(Debug, Default, Clone)]
pub(crate) struct TrieNode {
    pub(crate) children: FxHashMap<char, TrieNode>,
    pub(crate) frequency: u32,
}

/// A prefix trie counting how often each word was inserted.
///
/// # Example
///
/// ```rust
/// use libautocomplete::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("apple").unwrap();
/// trie.insert("apple").unwrap();
/// trie.insert("applet").unwrap();
///
/// let completions = trie.find_completions("app", 10).unwrap();
/// assert_eq!(completions[0].word, "apple");
/// assert_eq!(completions[0].frequency, 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Trie {
    pub(crate) root: TrieNode,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a trie from a file in the versioned binary format.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SerializationError> {
        let mut trie = Self::new();
        trie.load_from_file(path)?;
        Ok(trie)
    }

    /// Inserts a word, incrementing its frequency by one.
    ///
    /// Nodes along the path are created on demand. O(word length).
    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.children.entry(c).or_default();
        }
        current.frequency += 1;
        Ok(())
    }

    /// Returns how many times a word was inserted, or 0 if absent.
    pub fn frequency(&self, word: &str) -> Result<u32, TrieError> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        Ok(self.node_at(word).map_or(0, |node| node.frequency))
    }

    /// Removes a word.
    ///
    /// With `prune = false` the terminal frequency is zeroed but the nodes
    /// stay in place, so re-inserting the word is cheap. With
    /// `prune = true` nodes left with no children and zero frequency are
    /// deleted bottom-up as well; the root always survives.
    pub fn remove(&mut self, word: &str, prune: bool) -> Result<(), TrieError> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        if !prune {
            if let Some(node) = self.node_at_mut(word) {
                node.frequency = 0;
            }
            return Ok(());
        }

        let chars: Vec<char> = word.chars().collect();
        remove_and_prune(&mut self.root, &chars);
        Ok(())
    }

    /// Returns every stored word with its frequency.
    pub fn all_words(&self) -> HashMap<String, u32> {
        let mut words = HashMap::new();
        let mut path = String::new();
        collect_words(&self.root, &mut path, &mut words);
        words
    }

    /// Finds up to `limit` completions of `prefix`, most frequent first.
    ///
    /// Ties rank the lexicographically smaller word first. An absent prefix
    /// yields an empty result.
    pub fn find_completions(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<WordFrequency>, TrieError> {
        if prefix.is_empty() {
            return Err(TrieError::EmptyPrefix);
        }
        if limit < 1 {
            return Err(TrieError::InvalidLimit);
        }

        let Some(node) = self.node_at(prefix) else {
            return Ok(Vec::new());
        };

        let mut top = TopK::new(limit);
        let mut path = String::from(prefix);
        collect_ranked(node, &mut path, &mut top);
        Ok(top.into_sorted_vec())
    }

    /// Returns the `n` globally most frequent words, most frequent first.
    pub fn top_frequent_words(&self, n: usize) -> Result<Vec<WordFrequency>, TrieError> {
        if n < 1 {
            return Err(TrieError::InvalidLimit);
        }

        let mut top = TopK::new(n);
        let mut path = String::new();
        collect_ranked(&self.root, &mut path, &mut top);
        Ok(top.into_sorted_vec())
    }

    /// Returns every stored word within `tolerance` of `prefix` under the
    /// given distance function, unordered.
    ///
    /// Prefixes shorter than `threshold` characters get no fuzzy help: the
    /// result is `[prefix]` if a node exists at that path, else empty.
    /// Otherwise every stored word is visited and scored, making this
    /// O(stored words × average word length) per call. The distance
    /// function is fully opaque here, so no index or length-based pruning
    /// is applied; callers cache the output instead (see
    /// [`AutocompleteEngine`](crate::engine::AutocompleteEngine)).
    pub fn find_similar_prefixes(
        &self,
        prefix: &str,
        tolerance: usize,
        threshold: usize,
        distance: &DistanceFn,
    ) -> Result<Vec<String>, TrieError> {
        if prefix.is_empty() {
            return Err(TrieError::EmptyPrefix);
        }

        let prefix_len = prefix.chars().count();
        if prefix_len < threshold {
            return Ok(match self.node_at(prefix) {
                Some(_) => vec![prefix.to_string()],
                None => Vec::new(),
            });
        }

        let mut result = Vec::new();
        let mut path = String::new();
        collect_similar(&self.root, &mut path, prefix, tolerance, distance, &mut result);
        Ok(result)
    }

    /// Removes all words and frequencies.
    pub fn clear(&mut self) {
        self.root.children.clear();
        self.root.frequency = 0;
    }

    /// Saves the trie to a file in the versioned binary format.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SerializationError> {
        BinarySerializer::serialize_to_file(self, path)
    }

    /// Replaces this trie's contents with those loaded from a file.
    ///
    /// Fails without touching the current contents if the file is missing
    /// or its magic/version does not match.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), SerializationError> {
        let loaded = BinarySerializer::deserialize_from_file(path)?;
        *self = loaded;
        Ok(())
    }

    fn node_at(&self, word: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for c in word.chars() {
            current = current.children.get(&c)?;
        }
        Some(current)
    }

    fn node_at_mut(&mut self, word: &str) -> Option<&mut TrieNode> {
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.children.get_mut(&c)?;
        }
        Some(current)
    }
}

/// Returns whether `node` should be detached from its parent.
fn remove_and_prune(node: &mut TrieNode, chars: &[char]) -> bool {
    match chars.split_first() {
        None => {
            node.frequency = 0;
            node.children.is_empty()
        }
        Some((&c, rest)) => {
            let delete_child = match node.children.get_mut(&c) {
                Some(child) => remove_and_prune(child, rest),
                None => return false,
            };
            if delete_child {
                node.children.remove(&c);
            }
            node.children.is_empty() && node.frequency == 0
        }
    }
}

fn collect_words(node: &TrieNode, path: &mut String, words: &mut HashMap<String, u32>) {
    if node.frequency > 0 {
        words.insert(path.clone(), node.frequency);
    }
    for (&c, child) in &node.children {
        path.push(c);
        collect_words(child, path, words);
        path.pop();
    }
}

fn collect_ranked(node: &TrieNode, path: &mut String, top: &mut TopK<WordFrequency>) {
    if node.frequency > 0 {
        top.add(WordFrequency::new(path.clone(), node.frequency));
    }
    for (&c, child) in &node.children {
        path.push(c);
        collect_ranked(child, path, top);
        path.pop();
    }
}

fn collect_similar(
    node: &TrieNode,
    path: &mut String,
    target: &str,
    tolerance: usize,
    distance: &DistanceFn,
    result: &mut Vec<String>,
) {
    if !path.is_empty() && node.frequency > 0 && distance(target, path) <= tolerance {
        result.push(path.clone());
    }

    for (&c, child) in &node.children {
        path.push(c);
        collect_similar(child, path, target, tolerance, distance, result);
        path.pop();
    }
}
