//! Distance metric implementations.
//!
//! This module provides the reference Levenshtein distance used for
//! typo-tolerant prefix expansion, plus the [`DistanceFn`] abstraction that
//! lets callers plug any string metric into the engine configuration.

use std::sync::Arc;

use smallvec::SmallVec;

/// A pluggable string-distance function.
///
/// The engine configuration and [`Trie::find_similar_prefixes`] accept any
/// metric of this shape. The default is [`standard_distance`].
///
/// [`Trie::find_similar_prefixes`]: crate::trie::Trie::find_similar_prefixes
pub type DistanceFn = Arc<dyn Fn(&str, &str) -> usize + Send + Sync>;

/// Returns the default [`DistanceFn`] backed by [`standard_distance`].
pub fn default_distance() -> DistanceFn {
    Arc::new(standard_distance)
}

/// Compute standard Levenshtein distance between two strings.
///
/// Uses space-optimized dynamic programming (two rows) to compute the
/// minimum number of single-character edits (insertions, deletions,
/// substitutions) required to transform `source` into `target`. Operates
/// on characters, not bytes, so multi-byte UTF-8 input is handled
/// correctly.
///
/// # Example
///
/// ```rust
/// use libautocomplete::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("test", "test"), 0);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: SmallVec<[usize; 33]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 33]> = SmallVec::from_elem(0, n + 1);

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);
            curr[j] = (curr[j - 1] + 1).min(prev[j] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(standard_distance("hello", "hello"), 0);
        assert_eq!(standard_distance("", ""), 0);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(standard_distance("", "abc"), 3);
        assert_eq!(standard_distance("abc", ""), 3);
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(standard_distance("kitten", "sitting"), 3);
        assert_eq!(standard_distance("flaw", "lawn"), 2);
        assert_eq!(standard_distance("apple", "aple"), 1);
        assert_eq!(standard_distance("apply", "aple"), 2);
    }

    #[test]
    fn test_symmetry() {
        assert_eq!(
            standard_distance("saturday", "sunday"),
            standard_distance("sunday", "saturday")
        );
    }

    #[test]
    fn test_unicode_chars_not_bytes() {
        // One substitution, even though the byte lengths differ
        assert_eq!(standard_distance("café", "cafe"), 1);
        assert_eq!(standard_distance("日本語", "日本"), 1);
    }

    #[test]
    fn test_default_distance_fn() {
        let dist = default_distance();
        assert_eq!(dist("kitten", "sitting"), 3);
    }
}
