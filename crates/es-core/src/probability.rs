//! Probability estimation from symbol histograms.

use std::collections::BTreeMap;

use crate::error::{Result, ScanError};
use crate::histogram::Histogram;

/// Per-symbol probabilities derived from a histogram.
///
/// Probabilities over all symbols sum to 1.0 within floating-point tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct Probabilities<S: Ord> {
    probs: BTreeMap<S, f64>,
}

impl<S: Ord> Probabilities<S> {
    /// Probability of `symbol`.
    ///
    /// Subset keys are always drawn from the same population as the
    /// probability mapping; a lookup miss indicates a caller bug.
    pub fn get(&self, symbol: &S) -> f64 {
        debug_assert!(
            self.probs.contains_key(symbol),
            "symbol missing from probability mapping"
        );
        self.probs.get(symbol).copied().unwrap_or(0.0)
    }

    /// Number of distinct symbols with a probability.
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// Returns true if the mapping holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Iterate over (symbol, probability) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &f64)> {
        self.probs.iter()
    }
}

/// Derive a probability mapping from a histogram: count / total per symbol.
///
/// Fails with [`ScanError::ZeroTotal`] if the histogram is empty. Callers
/// only estimate over a verified positive total, so hitting this is a
/// contract violation, never a silent NaN.
pub fn estimate<S: Ord + Copy>(histogram: &Histogram<S>) -> Result<Probabilities<S>> {
    if histogram.is_empty() {
        return Err(ScanError::ZeroTotal);
    }

    let total = histogram.total() as f64;
    let probs = histogram
        .iter()
        .map(|(&symbol, &count)| (symbol, count as f64 / total))
        .collect();

    Ok(Probabilities { probs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probabilities_match_counts() {
        let hist = Histogram::from_symbols(b"aaab".iter().copied());
        let probs = estimate(&hist).unwrap();
        assert_eq!(probs.get(&b'a'), 0.75);
        assert_eq!(probs.get(&b'b'), 0.25);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let hist = Histogram::from_symbols(b"the quick brown fox jumps over the lazy dog".iter().copied());
        let probs = estimate(&hist).unwrap();
        let sum: f64 = probs.iter().map(|(_, &p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum was {}", sum);
    }

    #[test]
    fn empty_histogram_is_rejected() {
        let hist: Histogram<u8> = Histogram::new();
        assert!(matches!(estimate(&hist), Err(ScanError::ZeroTotal)));
    }
}
