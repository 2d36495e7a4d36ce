//! Shannon entropy evaluation over a probability mapping.

use crate::probability::Probabilities;

/// Compute the Shannon entropy of `subset` under `probabilities`.
///
/// Sums `p * log_base(p)` over the subset's symbols, skipping `p == 0`
/// (by convention `p * log(p)` tends to 0 as `p` tends to 0), and returns
/// the absolute value: a non-negative entropy in digits of `base`
/// (base 2 gives bits).
///
/// When the subset covers the same single histogram the probabilities came
/// from, the result ranges from 0.0 (one distinct symbol) to
/// `log_base(distinct symbols)` (uniform distribution). In global mode the
/// subset is one unit's symbols scored against the whole-file mapping.
pub fn entropy<'a, S, I>(probabilities: &Probabilities<S>, subset: I, base: u32) -> f64
where
    S: Ord + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let ln_base = f64::from(base).ln();
    let mut sum = 0.0;

    for symbol in subset {
        let p = probabilities.get(symbol);
        if p != 0.0 {
            sum += p * (p.ln() / ln_base);
        }
    }

    sum.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::Histogram;
    use crate::probability::estimate;

    fn self_entropy(data: &[u8], base: u32) -> f64 {
        let hist = Histogram::from_symbols(data.iter().copied());
        let probs = estimate(&hist).unwrap();
        entropy(&probs, hist.symbols(), base)
    }

    #[test]
    fn single_symbol_is_zero() {
        assert_eq!(self_entropy(b"aaaaaaaa", 2), 0.0);
        assert_eq!(self_entropy(b"x", 2), 0.0);
    }

    #[test]
    fn uniform_distribution_is_log_of_k() {
        // Two equally frequent symbols: 1 bit.
        assert!((self_entropy(b"ab", 2) - 1.0).abs() < 1e-12);
        // Four equally frequent symbols: 2 bits.
        assert!((self_entropy(b"abcd", 2) - 2.0).abs() < 1e-12);
        // 256 distinct bytes: 8 bits.
        let all: Vec<u8> = (0..=255).collect();
        let hist = Histogram::from_symbols(all.iter().copied());
        let probs = estimate(&hist).unwrap();
        assert!((entropy(&probs, hist.symbols(), 2) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn uniform_distribution_in_other_bases() {
        // k equally frequent symbols yield log_base(k) digits.
        assert!((self_entropy(b"abcd", 4) - 1.0).abs() < 1e-12);
        let expected = 4f64.ln() / 10f64.ln();
        assert!((self_entropy(b"abcd", 10) - expected).abs() < 1e-12);
    }

    #[test]
    fn skewed_distribution() {
        // p(a)=3/4, p(b)=1/4.
        let expected = -(0.75f64 * 0.75f64.log2() + 0.25f64 * 0.25f64.log2());
        assert!((self_entropy(b"aaab", 2) - expected).abs() < 1e-12);
    }

    #[test]
    fn subset_scores_against_larger_population() {
        // Global-style slice: the subset only covers part of the mapping.
        let hist = Histogram::from_symbols(b"abcd".iter().copied());
        let probs = estimate(&hist).unwrap();
        let slice = Histogram::from_symbols(b"ab".iter().copied());
        // |2 * (1/4) * log2(1/4)| = 1.0
        let value = entropy(&probs, slice.symbols(), 2);
        assert!((value - 1.0).abs() < 1e-12);
    }
}
