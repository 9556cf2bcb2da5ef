//! Guess analysis command
//!
//! Analyzes the information content of a guess before any feedback exists,
//! or ranks the whole opening space when no guess is given.

use crate::analysis::{GuessMetrics, calculate_metrics, marking_distribution, rank_guesses};
use crate::core::{Combination, Marking};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Combination,
    pub metrics: GuessMetrics,
    /// Marking classes sorted best first (most exact pegs on top)
    pub distribution: Vec<(Marking, usize)>,
    pub total_codes: usize,
}

/// Analyze the marking distribution of a guess against every possible code
///
/// # Errors
///
/// Returns an error if the token is not four digits in '0'..='5'.
pub fn analyze_guess(token: &str) -> Result<AnalysisResult, String> {
    let guess = Combination::parse(token).map_err(|e| format!("Invalid guess: {e}"))?;

    let codes: Vec<Combination> = Combination::all().collect();
    let metrics = calculate_metrics(&guess, &codes);

    let mut distribution: Vec<(Marking, usize)> =
        marking_distribution(&guess, &codes).into_iter().collect();
    distribution.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(AnalysisResult {
        guess,
        metrics,
        distribution,
        total_codes: codes.len(),
    })
}

/// Rank every opening guess by entropy, best first
#[must_use]
pub fn rank_openings() -> Vec<(Combination, f64)> {
    let codes: Vec<Combination> = Combination::all().collect();
    rank_guesses(&codes, &codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_valid_guess() {
        let result = analyze_guess("0123").unwrap();

        assert_eq!(result.guess.to_string(), "0123");
        assert!(result.metrics.entropy > 0.0);
        assert_eq!(result.total_codes, Combination::COUNT);
    }

    #[test]
    fn analyze_invalid_guess() {
        assert!(analyze_guess("012").is_err());
        assert!(analyze_guess("xxxx").is_err());
        assert!(analyze_guess("6789").is_err());
    }

    #[test]
    fn distribution_is_sorted_and_complete() {
        let result = analyze_guess("0123").unwrap();

        let counted: usize = result.distribution.iter().map(|&(_, c)| c).sum();
        assert_eq!(counted, Combination::COUNT);

        for pair in result.distribution.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
        // The winning class leads and holds exactly one code
        assert_eq!(result.distribution[0], (Marking::WIN, 1));
    }

    #[test]
    fn entropy_properties() {
        let result = analyze_guess("0123").unwrap();

        assert!(result.metrics.entropy >= 0.0);
        assert!(result.metrics.entropy <= (result.total_codes as f64).log2());
        assert!(result.metrics.expected_remaining >= 1.0);
        assert!(result.metrics.expected_remaining <= result.total_codes as f64);
    }
}
