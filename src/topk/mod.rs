//! Bounded top-K selection.
//!
//! [`TopK`] retains only the best `capacity` items from a stream of
//! candidates, using a fixed-capacity min-heap: the worst kept item sits at
//! the heap root and is displaced whenever a better item arrives. Every
//! trie query funnels its depth-first enumeration through this selector so
//! result size is bounded without materializing the full candidate set.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A fixed-capacity selector keeping the `capacity` greatest items seen.
///
/// "Greatest" is defined by `T`'s `Ord`; for [`WordFrequency`] that means
/// the most frequent words, with lexicographically smaller words winning
/// ties.
///
/// # Example
///
/// ```rust
/// use libautocomplete::topk::TopK;
///
/// let mut top = TopK::new(2);
/// for n in [5, 1, 9, 3] {
///     top.add(n);
/// }
/// assert_eq!(top.into_sorted_vec(), vec![9, 5]);
/// ```
///
/// [`WordFrequency`]: crate::model::WordFrequency
#[derive(Debug, Clone)]
pub struct TopK<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
    capacity: usize,
}

impl<T: Ord> TopK<T> {
    /// Creates a selector that keeps at most `capacity` items.
    ///
    /// Capacity 0 discards everything.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            capacity,
        }
    }

    /// Offers an item to the selector.
    ///
    /// Under capacity the item is always kept; at capacity it displaces the
    /// currently lowest-ranked kept item iff it outranks it, otherwise it
    /// is discarded.
    pub fn add(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(item));
        } else if let Some(min) = self.heap.peek() {
            if item > min.0 {
                self.heap.pop();
                self.heap.push(Reverse(item));
            }
        }
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no items are held.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consumes the selector and returns the held items best-to-worst.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut items: Vec<T> = self.heap.into_iter().map(|r| r.0).collect();
        items.sort_unstable_by(|a, b| b.cmp(a));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordFrequency;

    #[test]
    fn test_under_capacity_keeps_everything() {
        let mut top = TopK::new(10);
        top.add(3);
        top.add(1);
        top.add(2);
        assert_eq!(top.len(), 3);
        assert_eq!(top.into_sorted_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_displaces_worst_at_capacity() {
        let mut top = TopK::new(3);
        for n in [4, 8, 1, 9, 2, 7] {
            top.add(n);
        }
        assert_eq!(top.into_sorted_vec(), vec![9, 8, 7]);
    }

    #[test]
    fn test_discards_items_that_do_not_outrank() {
        let mut top = TopK::new(2);
        top.add(10);
        top.add(20);
        top.add(5);
        assert_eq!(top.into_sorted_vec(), vec![20, 10]);
    }

    #[test]
    fn test_capacity_zero_discards_everything() {
        let mut top = TopK::new(0);
        top.add(42);
        assert!(top.is_empty());
        assert!(top.into_sorted_vec().is_empty());
    }

    #[test]
    fn test_word_frequency_ranking() {
        let mut top = TopK::new(2);
        top.add(WordFrequency::new("banana", 3));
        top.add(WordFrequency::new("apple", 3));
        top.add(WordFrequency::new("cherry", 1));
        let sorted = top.into_sorted_vec();
        // Equal frequencies: alphabetical order wins
        assert_eq!(sorted[0].word, "apple");
        assert_eq!(sorted[1].word, "banana");
    }

    #[test]
    fn test_equal_items_keep_first_seen_at_capacity() {
        let mut top = TopK::new(1);
        top.add(WordFrequency::new("apple", 2));
        // Does not outrank the held item (ties are not strict wins)
        top.add(WordFrequency::new("apple", 2));
        assert_eq!(top.len(), 1);
    }
}
