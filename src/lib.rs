//! # libautocomplete
//!
//! Frequency-ranked word completion for text prefixes, with optional typo
//! tolerance and LRU result caching.
//!
//! Words are stored in a counting prefix trie: inserting a word bumps its
//! frequency, and completion queries return the most frequent words under a
//! prefix. When a tolerance is configured, the query prefix is additionally
//! expanded into every stored word within a bounded edit distance of it
//! (using a pluggable distance function), and the merged candidates are
//! weighted, deduplicated, and re-ranked.
//!
//! ## Example
//!
//! ```rust
//! use libautocomplete::prelude::*;
//!
//! let mut analyzer = TextAnalyzer::new();
//! analyzer.add_text("the apple fell near the apple tree").unwrap();
//!
//! let mut engine = AutocompleteEngine::new(analyzer);
//! let candidates = engine.autocomplete("app", 10).unwrap();
//! assert_eq!(candidates[0].word, "apple");
//! ```
//!
//! The trie can be persisted to a versioned binary format and restored:
//!
//! ```rust,ignore
//! trie.save_to_file("words.trie")?;
//! let restored = Trie::from_file("words.trie")?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analyzer;
pub mod cache;
pub mod distance;
pub mod engine;
pub mod model;
pub mod serialization;
pub mod tokenizer;
pub mod topk;
pub mod trie;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::analyzer::TextAnalyzer;
    pub use crate::cache::LruCache;
    pub use crate::distance::{standard_distance, DistanceFn};
    pub use crate::engine::{AutocompleteConfig, AutocompleteEngine, ConfigError, EngineError};
    pub use crate::model::{Candidate, WordFrequency};
    pub use crate::serialization::{
        BinarySerializer, JsonSerializer, PlainTextSerializer, SerializationError, TrieSerializer,
    };
    pub use crate::tokenizer::{SimpleTokenizer, Tokenizer, TokenizerConfig};
    pub use crate::topk::TopK;
    pub use crate::trie::{Trie, TrieError};
}
