//! Value types shared between the trie and the engine.
//!
//! [`WordFrequency`] carries raw trie counts; [`Candidate`] carries the
//! weighted scores the engine hands back to callers. Both order by the
//! numeric field first, and on ties rank the lexicographically smaller word
//! higher, so sorted output is score-descending with word-ascending
//! tie-breaks.

use std::cmp::Ordering;

/// A stored word together with its insertion count.
///
/// Total order: higher frequency ranks higher; on equal frequency the
/// lexicographically smaller word ranks higher. `Ord::cmp` returns
/// `Greater` for the better-ranked value, so a max-heap or descending sort
/// yields frequency-descending, word-ascending output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordFrequency {
    /// The stored word.
    pub word: String,
    /// How many times the word was inserted.
    pub frequency: u32,
}

impl WordFrequency {
    /// Creates a new word/frequency pair.
    pub fn new(word: impl Into<String>, frequency: u32) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

impl Ord for WordFrequency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialOrd for WordFrequency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A completion candidate with its final weighted score.
///
/// Weights come from scaling trie frequencies by the configured
/// original/similar multipliers, so they are finite non-negative floats;
/// the order below uses `f64::total_cmp` and is total for all such values.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The completed word.
    pub word: String,
    /// The weighted score (frequency times the applicable weight).
    pub weight: f64,
}

impl Candidate {
    /// Creates a new candidate.
    pub fn new(word: impl Into<String>, weight: f64) -> Self {
        Self {
            word: word.into(),
            weight,
        }
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
