//! Command implementations

pub mod analyze;
pub mod simple;
pub mod stats;

pub use analyze::{AnalysisResult, analyze_guess, rank_openings};
pub use simple::run_simple;
pub use stats::{CensusStatistics, print_census_statistics, run_census};

use crate::core::Combination;
use crate::game::DEFAULT_TURNS;

/// Shared configuration for the play modes
#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    /// Guess budget per game
    pub turns: usize,
    /// Seed for the secret generator; `None` draws from the OS
    pub seed: Option<u64>,
    /// Fixed secret instead of a random one
    pub code: Option<Combination>,
    /// Show the secret while playing (debugging aid)
    pub reveal: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            turns: DEFAULT_TURNS,
            seed: None,
            code: None,
            reveal: false,
        }
    }
}
