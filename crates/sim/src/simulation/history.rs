//! Bounded time series of generation statistics.

use crate::simulation::GenerationStats;
use std::collections::VecDeque;

/// Number of most recent records kept by a `History`.
pub const HISTORY_CAPACITY: usize = 200;

/// Sliding window over the most recent `GenerationStats`.
///
/// Records are kept in increasing generation order. Once the window is full,
/// pushing a record drops the oldest one.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    records: VecDeque<GenerationStats>,
    capacity: usize,
}

impl History {
    /// History holding only `initial`, with the default capacity.
    pub fn new(initial: GenerationStats) -> Self {
        Self::with_capacity(initial, HISTORY_CAPACITY)
    }

    /// History holding only `initial`, keeping at most `capacity` records
    /// (at least one).
    pub fn with_capacity(initial: GenerationStats, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut records = VecDeque::with_capacity(capacity);
        records.push_back(initial);
        Self { records, capacity }
    }

    /// Append a record, evicting the oldest one if the window is full.
    pub fn push(&mut self, record: GenerationStats) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Drop everything and start over from `initial`.
    pub fn clear_to(&mut self, initial: GenerationStats) {
        self.records.clear();
        self.records.push_back(initial);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent record.
    pub fn latest(&self) -> Option<&GenerationStats> {
        self.records.back()
    }

    /// Oldest retained record.
    pub fn oldest(&self) -> Option<&GenerationStats> {
        self.records.front()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &GenerationStats> + ExactSizeIterator {
        self.records.iter()
    }

    /// Copy of the retained records, oldest first.
    pub fn to_vec(&self) -> Vec<GenerationStats> {
        self.records.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GenerationStats;
    type IntoIter = std::collections::vec_deque::Iter<'a, GenerationStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Configuration;

    fn record(generation: usize) -> GenerationStats {
        GenerationStats {
            generation,
            ..GenerationStats::initial(&Configuration::default())
        }
    }

    #[test]
    fn test_new_history_has_initial_record() {
        let history = History::new(record(0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.capacity(), HISTORY_CAPACITY);
        assert_eq!(history.latest().unwrap().generation, 0);
    }

    #[test]
    fn test_push_within_capacity() {
        let mut history = History::with_capacity(record(0), 5);
        for g in 1..=3 {
            history.push(record(g));
        }
        assert_eq!(history.len(), 4);
        assert_eq!(history.oldest().unwrap().generation, 0);
        assert_eq!(history.latest().unwrap().generation, 3);
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut history = History::with_capacity(record(0), 3);
        for g in 1..=10 {
            history.push(record(g));
        }
        let gens: Vec<usize> = history.iter().map(|r| r.generation).collect();
        assert_eq!(gens, vec![8, 9, 10]);
    }

    #[test]
    fn test_default_capacity_is_enforced() {
        let mut history = History::new(record(0));
        for g in 1..=450 {
            history.push(record(g));
            assert!(history.len() <= HISTORY_CAPACITY);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.oldest().unwrap().generation, 251);
        assert_eq!(history.latest().unwrap().generation, 450);
    }

    #[test]
    fn test_clear_to() {
        let mut history = History::with_capacity(record(0), 4);
        history.push(record(1));
        history.push(record(2));
        history.clear_to(record(0));
        assert_eq!(history.to_vec(), vec![record(0)]);
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut history = History::with_capacity(record(0), 0);
        history.push(record(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().generation, 1);
    }
}
