//! Symbol histograms for frequency analysis.
//!
//! Counts occurrences of discrete symbols (bytes in block mode, characters
//! in line mode). The ordered map keeps iteration deterministic so summation
//! order and test output are reproducible.

use std::collections::BTreeMap;

/// Occurrence counts per distinct symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram<S: Ord> {
    counts: BTreeMap<S, u64>,
    total: u64,
}

impl<S: Ord> Default for Histogram<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord> Histogram<S> {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    /// Build a histogram from a sequence of symbols.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut hist = Self::new();
        hist.extend(symbols);
        hist
    }

    /// Count one symbol occurrence.
    pub fn record(&mut self, symbol: S) {
        *self.counts.entry(symbol).or_insert(0) += 1;
        self.total += 1;
    }

    /// Accumulate a sequence of symbols into this histogram.
    pub fn extend<I>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = S>,
    {
        for symbol in symbols {
            self.record(symbol);
        }
    }

    /// Occurrences of `symbol`, zero if unseen.
    pub fn count(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no symbols have been counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over the distinct symbols in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = &S> {
        self.counts.keys()
    }

    /// Iterate over (symbol, count) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &u64)> {
        self.counts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    #[test]
    fn empty_histogram() {
        let hist: Histogram<u8> = Histogram::new();
        assert!(hist.is_empty());
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.distinct(), 0);
    }

    #[test]
    fn counts_occurrences() {
        let hist = Histogram::from_symbols(b"abracadabra".iter().copied());
        assert_eq!(hist.total(), 11);
        assert_eq!(hist.distinct(), 5);
        assert_eq!(hist.count(&b'a'), 5);
        assert_eq!(hist.count(&b'b'), 2);
        assert_eq!(hist.count(&b'z'), 0);
    }

    #[test]
    fn char_symbols() {
        let hist = Histogram::from_symbols("héhé".chars());
        assert_eq!(hist.total(), 4);
        assert_eq!(hist.count(&'h'), 2);
        assert_eq!(hist.count(&'é'), 2);
    }

    #[test]
    fn extend_accumulates() {
        let mut hist = Histogram::from_symbols(b"aa".iter().copied());
        hist.extend(b"ab".iter().copied());
        assert_eq!(hist.total(), 4);
        assert_eq!(hist.count(&b'a'), 3);
        assert_eq!(hist.count(&b'b'), 1);
    }

    #[test]
    fn symbols_iterate_in_order() {
        let hist = Histogram::from_symbols(b"cba".iter().copied());
        let keys: Vec<u8> = hist.symbols().copied().collect();
        assert_eq!(keys, vec![b'a', b'b', b'c']);
    }

    #[test]
    fn counting_is_order_independent() {
        let mut symbols: Vec<u8> = b"the quick brown fox jumps over the lazy dog".to_vec();
        let original = Histogram::from_symbols(symbols.iter().copied());

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            symbols.shuffle(&mut rng);
            let shuffled = Histogram::from_symbols(symbols.iter().copied());
            assert_eq!(shuffled, original);
        }
    }
}
