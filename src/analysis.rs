//! Information analysis of guesses
//!
//! Scoring one guess against every candidate code partitions the code space
//! by marking. The shape of that partition says how informative the guess
//! is before any feedback exists: its Shannon entropy, the expected number
//! of codes still compatible after the feedback arrives, and the worst-case
//! partition size.

use crate::core::{Combination, Marking};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of codes still compatible after the feedback
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case compatible codes)
    pub max_partition: usize,
}

/// Tally how often each marking occurs when `guess` is scored against `codes`
///
/// The counts sum to `codes.len()`; a code appearing in the `Marking::WIN`
/// class is the guess itself being the code.
#[must_use]
pub fn marking_distribution(guess: &Combination, codes: &[Combination]) -> FxHashMap<Marking, usize> {
    let mut counts = FxHashMap::default();

    for code in codes {
        let marking = Marking::score(code, guess);
        *counts.entry(marking).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy for a guess against candidate codes
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing marking x.
///
/// # Examples
/// ```
/// use mastermind::analysis::calculate_entropy;
/// use mastermind::core::Combination;
///
/// let guess = Combination::parse("0123").unwrap();
/// let codes = vec![
///     Combination::parse("0000").unwrap(),
///     Combination::parse("0123").unwrap(),
/// ];
///
/// // Two codes, two distinct markings: a perfect binary split
/// let entropy = calculate_entropy(&guess, &codes);
/// assert!((entropy - 1.0).abs() < 0.001);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Combination, codes: &[Combination]) -> f64 {
    if codes.is_empty() {
        return 0.0;
    }

    shannon_entropy(&marking_distribution(guess, codes))
}

/// Calculate Shannon entropy from a marking distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one marking with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n markings
///
/// # Examples
/// ```
/// use mastermind::analysis::shannon_entropy;
/// use mastermind::core::Marking;
/// use rustc_hash::FxHashMap;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Marking::new(0, 0), 25);
/// uniform.insert(Marking::new(0, 1), 25);
/// uniform.insert(Marking::new(1, 0), 25);
/// uniform.insert(Marking::new(2, 0), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(marking_counts: &std::collections::HashMap<Marking, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = marking_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    marking_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining codes, and max partition size. The
/// expected-remaining figure weights each partition by the probability of
/// landing in it.
#[must_use]
pub fn calculate_metrics(guess: &Combination, codes: &[Combination]) -> GuessMetrics {
    if codes.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = marking_distribution(guess, codes);
    let total = codes.len() as f64;

    let entropy: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    let expected_remaining: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let max_partition = counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}

/// Rank every guess in `pool` by entropy against `codes`, best first
///
/// Scoring is parallel across the pool. Ties break toward the lower
/// combination index, so the ranking is deterministic regardless of pool
/// order.
#[must_use]
pub fn rank_guesses(pool: &[Combination], codes: &[Combination]) -> Vec<(Combination, f64)> {
    let mut ranked: Vec<(Combination, f64)> = pool
        .par_iter()
        .map(|guess| (*guess, calculate_entropy(guess, codes)))
        .collect();

    ranked.sort_by(|(a, e1), (b, e2)| {
        e2.total_cmp(e1).then_with(|| a.index().cmp(&b.index()))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combination(token: &str) -> Combination {
        Combination::parse(token).unwrap()
    }

    fn all_codes() -> Vec<Combination> {
        Combination::all().collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 markings, each appearing once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(Marking::new(0, 0), 1);
        counts.insert(Marking::new(0, 1), 1);
        counts.insert(Marking::new(1, 0), 1);
        counts.insert(Marking::new(2, 0), 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        // Only one marking = 0 bits (no uncertainty)
        let mut counts = FxHashMap::default();
        counts.insert(Marking::new(1, 1), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        // Skewed distribution has less entropy than uniform
        let mut uniform = FxHashMap::default();
        uniform.insert(Marking::new(0, 0), 25);
        uniform.insert(Marking::new(0, 1), 25);
        uniform.insert(Marking::new(1, 0), 25);
        uniform.insert(Marking::new(2, 0), 25);

        let mut skewed = FxHashMap::default();
        skewed.insert(Marking::new(0, 0), 97);
        skewed.insert(Marking::new(0, 1), 1);
        skewed.insert(Marking::new(1, 0), 1);
        skewed.insert(Marking::new(2, 0), 1);

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_bounds() {
        let mut counts = FxHashMap::default();
        counts.insert(Marking::new(0, 0), 10);
        counts.insert(Marking::new(0, 1), 20);
        counts.insert(Marking::new(1, 0), 30);

        let entropy = shannon_entropy(&counts);
        assert!(entropy >= 0.0);
        assert!(entropy <= (counts.len() as f64).log2());
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Marking, usize> = FxHashMap::default();
        let entropy = shannon_entropy(&counts);
        assert!((entropy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distribution_counts_every_code_once() {
        let guess = combination("0123");
        let counts = marking_distribution(&guess, &all_codes());
        assert_eq!(counts.values().sum::<usize>(), Combination::COUNT);
    }

    #[test]
    fn distribution_of_single_color_guess_is_exact_only() {
        // A one-color guess can never earn a misplaced peg, and the class
        // sizes follow C(4,k) * 5^(4-k) over the number of matching slots.
        let guess = combination("0000");
        let counts = marking_distribution(&guess, &all_codes());

        assert_eq!(counts.len(), 5);
        assert_eq!(counts[&Marking::new(0, 0)], 625);
        assert_eq!(counts[&Marking::new(1, 0)], 500);
        assert_eq!(counts[&Marking::new(2, 0)], 150);
        assert_eq!(counts[&Marking::new(3, 0)], 20);
        assert_eq!(counts[&Marking::WIN], 1);
    }

    #[test]
    fn exactly_one_code_wins_against_any_guess() {
        let guess = combination("3142");
        let counts = marking_distribution(&guess, &all_codes());
        assert_eq!(counts[&Marking::WIN], 1);
    }

    #[test]
    fn distinct_colors_beat_a_single_color() {
        let codes = all_codes();
        let diverse = calculate_entropy(&combination("0123"), &codes);
        let monotone = calculate_entropy(&combination("0000"), &codes);
        assert!(diverse > monotone);
    }

    #[test]
    fn calculate_entropy_empty_codes() {
        let entropy = calculate_entropy(&combination("0123"), &[]);
        assert!((entropy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_for_single_color_guess() {
        let metrics = calculate_metrics(&combination("0000"), &all_codes());

        assert_eq!(metrics.max_partition, 625);
        assert!(metrics.entropy > 1.0 && metrics.entropy < 2.0);
        // Expected remaining: sum of count^2 / total = 663526 / 1296
        assert!((metrics.expected_remaining - 663_526.0 / 1296.0).abs() < 0.001);
    }

    #[test]
    fn metrics_empty_codes() {
        let metrics = calculate_metrics(&combination("0123"), &[]);
        assert!(metrics.entropy.abs() < f64::EPSILON);
        assert!(metrics.expected_remaining.abs() < f64::EPSILON);
        assert_eq!(metrics.max_partition, 0);
    }

    #[test]
    fn metrics_entropy_agrees_with_calculate_entropy() {
        let guess = combination("0123");
        let codes = all_codes();
        let metrics = calculate_metrics(&guess, &codes);
        let entropy = calculate_entropy(&guess, &codes);
        assert!((metrics.entropy - entropy).abs() < 1e-9);
    }

    #[test]
    fn rank_orders_by_descending_entropy() {
        let pool = [combination("0000"), combination("0123"), combination("0011")];
        let ranked = rank_guesses(&pool, &all_codes());

        assert_eq!(ranked.len(), pool.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        // The one-color guess is the least informative of the three
        assert_eq!(ranked.last().map(|(g, _)| *g), Some(combination("0000")));
    }

    #[test]
    fn rank_is_deterministic() {
        let pool = [combination("0123"), combination("0000"), combination("5432")];
        let codes = all_codes();

        let first = rank_guesses(&pool, &codes);
        let second = rank_guesses(&pool, &codes);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.0, b.0);
            assert!((a.1 - b.1).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn rank_of_empty_pool_is_empty() {
        assert!(rank_guesses(&[], &all_codes()).is_empty());
    }
}
