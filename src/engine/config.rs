//! Engine configuration.

use std::fmt;

use thiserror::Error;

use crate::distance::{default_distance, DistanceFn};

/// Errors raised by [`AutocompleteConfig`] validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// A weight was negative, NaN, or infinite.
    #[error("{name} must be a finite non-negative number, got {value}")]
    InvalidWeight {
        /// Which weight failed validation.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Tuning knobs for the autocomplete engine.
///
/// - `tolerance` — maximum edit distance for typo-tolerant expansion;
///   0 disables the fuzzy path entirely.
/// - `tolerance_threshold` — minimum prefix length (in characters) before
///   fuzzy expansion activates; shorter prefixes only match exactly.
/// - `original_weight` / `similar_weight` — multipliers applied to the
///   frequencies of exact-prefix and similar-prefix completions.
/// - `distance` — the pluggable string metric used for expansion.
///
/// Thresholds are `usize` and therefore non-negative by construction;
/// weights are validated finite and non-negative.
#[derive(Clone)]
pub struct AutocompleteConfig {
    distance: DistanceFn,
    tolerance_threshold: usize,
    tolerance: usize,
    similar_weight: f64,
    original_weight: f64,
}

impl AutocompleteConfig {
    /// Creates a validated configuration.
    pub fn new(
        distance: DistanceFn,
        tolerance_threshold: usize,
        tolerance: usize,
        similar_weight: f64,
        original_weight: f64,
    ) -> Result<Self, ConfigError> {
        validate_weight("similar_weight", similar_weight)?;
        validate_weight("original_weight", original_weight)?;

        Ok(Self {
            distance,
            tolerance_threshold,
            tolerance,
            similar_weight,
            original_weight,
        })
    }

    /// The configured distance function.
    pub fn distance(&self) -> &DistanceFn {
        &self.distance
    }

    /// Minimum prefix length before fuzzy expansion activates.
    pub fn tolerance_threshold(&self) -> usize {
        self.tolerance_threshold
    }

    /// Maximum edit distance for fuzzy expansion; 0 disables it.
    pub fn tolerance(&self) -> usize {
        self.tolerance
    }

    /// Frequency multiplier for similar-prefix completions.
    pub fn similar_weight(&self) -> f64 {
        self.similar_weight
    }

    /// Frequency multiplier for exact-prefix completions.
    pub fn original_weight(&self) -> f64 {
        self.original_weight
    }
}

impl Default for AutocompleteConfig {
    /// Levenshtein distance, no typo tolerance, weights 0.5/1.0.
    fn default() -> Self {
        Self {
            distance: default_distance(),
            tolerance_threshold: 0,
            tolerance: 0,
            similar_weight: 0.5,
            original_weight: 1.0,
        }
    }
}

impl fmt::Debug for AutocompleteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteConfig")
            .field("tolerance_threshold", &self.tolerance_threshold)
            .field("tolerance", &self.tolerance)
            .field("similar_weight", &self.similar_weight)
            .field("original_weight", &self.original_weight)
            .finish_non_exhaustive()
    }
}

fn validate_weight(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidWeight { name, value });
    }
    Ok(())
}
