//! Autocomplete orchestration.
//!
//! [`AutocompleteEngine`] ties the pieces together: a query first checks
//! the completion cache, then runs an exact prefix search against the trie,
//! then — when a tolerance is configured — expands the prefix into similar
//! stored words (a separately cached computation), queries completions for
//! each, and merges the weighted, deduplicated results. The full merged
//! list is cached so later requests with any smaller limit are served by
//! truncation.
//!
//! Both caches are keyed by the case-normalized prefix; the normalization
//! mirrors the tokenizer's lowercase flag so query keys agree with how
//! words were ingested. Ingestion and reconfiguration invalidate both
//! caches wholesale.

mod config;

pub use config::{AutocompleteConfig, ConfigError};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::analyzer::TextAnalyzer;
use crate::cache::LruCache;
use crate::model::Candidate;
use crate::trie::TrieError;

const DEFAULT_CACHE_SIZE: usize = 100;

/// Errors raised by engine queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The query prefix was empty.
    #[error("prefix cannot be empty")]
    EmptyPrefix,

    /// The requested limit was zero.
    #[error("limit must be positive")]
    InvalidLimit,

    /// An underlying trie operation was rejected.
    #[error(transparent)]
    Trie(#[from] TrieError),
}

/// Frequency-ranked, optionally typo-tolerant completion provider.
///
/// # Example
///
/// ```rust
/// use libautocomplete::prelude::*;
///
/// let mut analyzer = TextAnalyzer::new();
/// analyzer.add_text("apple apple applet").unwrap();
///
/// let mut engine = AutocompleteEngine::new(analyzer);
/// let results = engine.autocomplete("app", 10).unwrap();
/// assert_eq!(results[0].word, "apple");
/// assert_eq!(results[0].weight, 2.0);
/// ```
pub struct AutocompleteEngine {
    analyzer: TextAnalyzer,
    config: AutocompleteConfig,
    completion_cache: LruCache<String, Vec<Candidate>>,
    similar_cache: LruCache<String, Vec<String>>,
}

impl AutocompleteEngine {
    /// Creates an engine with the default config and cache size.
    pub fn new(analyzer: TextAnalyzer) -> Self {
        Self::with_cache_size(analyzer, AutocompleteConfig::default(), DEFAULT_CACHE_SIZE)
    }

    /// Creates an engine with an explicit config and the default cache size.
    pub fn with_config(analyzer: TextAnalyzer, config: AutocompleteConfig) -> Self {
        Self::with_cache_size(analyzer, config, DEFAULT_CACHE_SIZE)
    }

    /// Creates an engine with explicit config and cache capacity.
    ///
    /// `cache_size` 0 disables result caching entirely.
    pub fn with_cache_size(
        analyzer: TextAnalyzer,
        config: AutocompleteConfig,
        cache_size: usize,
    ) -> Self {
        Self {
            analyzer,
            config,
            completion_cache: LruCache::new(cache_size),
            similar_cache: LruCache::new(cache_size),
        }
    }

    /// The current configuration.
    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    /// Replaces the configuration and invalidates both caches.
    pub fn set_config(&mut self, config: AutocompleteConfig) {
        self.config = config;
        self.invalidate_caches();
    }

    /// Read access to the underlying analyzer.
    pub fn analyzer(&self) -> &TextAnalyzer {
        &self.analyzer
    }

    /// Ingests text through the analyzer and invalidates both caches.
    pub fn add_text(&mut self, text: &str) -> Result<(), EngineError> {
        self.analyzer.add_text(text)?;
        self.invalidate_caches();
        Ok(())
    }

    /// Returns up to `limit` completion candidates for `prefix`, best
    /// first (weight descending, word ascending on ties).
    ///
    /// The prefix is lowercased iff the analyzer's tokenizer lowercases
    /// its tokens, so queries match ingested words regardless of the
    /// caller's casing.
    pub fn autocomplete(
        &mut self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<Candidate>, EngineError> {
        if prefix.is_empty() {
            return Err(EngineError::EmptyPrefix);
        }
        if limit == 0 {
            return Err(EngineError::InvalidLimit);
        }

        let key = self.normalize(prefix);

        if let Some(cached) = self.completion_cache.get(&key) {
            // A list computed for a larger limit satisfies a smaller one
            if cached.len() >= limit {
                return Ok(cached[..limit].to_vec());
            }
        }

        let candidates = if self.config.tolerance() == 0 {
            self.exact_candidates(&key, limit)?
        } else {
            self.typo_tolerant_candidates(&key, limit)?
        };

        self.completion_cache.put(key, candidates.clone());

        let mut result = candidates;
        result.truncate(limit);
        Ok(result)
    }

    /// Exact-prefix completions scaled by the original weight.
    fn exact_candidates(&self, prefix: &str, limit: usize) -> Result<Vec<Candidate>, TrieError> {
        let completions = self.analyzer.trie().find_completions(prefix, limit)?;
        Ok(completions
            .into_iter()
            .map(|wf| {
                Candidate::new(
                    wf.word,
                    f64::from(wf.frequency) * self.config.original_weight(),
                )
            })
            .collect())
    }

    /// Exact completions plus completions of every similar prefix, merged,
    /// deduplicated (exact weight wins), and re-sorted.
    fn typo_tolerant_candidates(
        &mut self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<Candidate>, TrieError> {
        let similar = self.cached_similar_prefixes(prefix)?;

        let mut all = self.exact_candidates(prefix, limit)?;
        let mut seen: FxHashSet<String> =
            all.iter().map(|candidate| candidate.word.clone()).collect();

        for sim_prefix in &similar {
            if sim_prefix == prefix {
                continue;
            }
            let completions = self.analyzer.trie().find_completions(sim_prefix, limit)?;
            for wf in completions {
                if seen.insert(wf.word.clone()) {
                    all.push(Candidate::new(
                        wf.word,
                        f64::from(wf.frequency) * self.config.similar_weight(),
                    ));
                }
            }
        }

        all.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.word.cmp(&b.word))
        });
        Ok(all)
    }

    /// Similar-prefix expansion for `prefix`, memoized per normalized key.
    fn cached_similar_prefixes(&mut self, prefix: &str) -> Result<Vec<String>, TrieError> {
        let key = prefix.to_string();
        if let Some(cached) = self.similar_cache.get(&key) {
            return Ok(cached.clone());
        }

        let similar = self.analyzer.trie().find_similar_prefixes(
            prefix,
            self.config.tolerance(),
            self.config.tolerance_threshold(),
            self.config.distance(),
        )?;
        self.similar_cache.put(key, similar.clone());
        Ok(similar)
    }

    fn normalize(&self, prefix: &str) -> String {
        if self.analyzer.tokenizer().config().lowercase() {
            prefix.to_lowercase()
        } else {
            prefix.to_string()
        }
    }

    fn invalidate_caches(&mut self) {
        self.completion_cache.clear();
        self.similar_cache.clear();
    }
}
