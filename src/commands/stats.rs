//! Exhaustive scoring census
//!
//! Scores every code against every guess (1296 × 1296 pairs) and tallies
//! how often each marking occurs. The totals double as a whole-table
//! shakedown of the scorer: the counts must sum to the number of pairs, the
//! winning class must hold exactly one guess per code, and the impossible
//! "three exact plus one misplaced" class must stay empty.

use crate::core::{Combination, Marking};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics from the full code-times-guess census
#[derive(Debug)]
pub struct CensusStatistics {
    pub total_pairs: usize,
    pub marking_counts: FxHashMap<Marking, usize>,
    pub distinct_markings: usize,
    pub winning_pairs: usize,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Score the full code space against itself and tally every marking
///
/// Work is parallel across codes; each worker tallies locally and the
/// partial tables merge at the end.
#[must_use]
pub fn run_census() -> CensusStatistics {
    let codes: Vec<Combination> = Combination::all().collect();

    println!("🎯 Scoring {} pairs...", codes.len() * codes.len());

    let pb = ProgressBar::new(codes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let marking_counts = codes
        .par_iter()
        .map(|code| {
            let mut local: FxHashMap<Marking, usize> = FxHashMap::default();
            for guess in &codes {
                let marking = Marking::score(code, guess);
                *local.entry(marking).or_insert(0) += 1;
            }
            pb.inc(1);
            local
        })
        .reduce(FxHashMap::default, |mut merged, local| {
            for (marking, count) in local {
                *merged.entry(marking).or_insert(0) += count;
            }
            merged
        });

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_pairs: usize = marking_counts.values().sum();
    let winning_pairs = marking_counts.get(&Marking::WIN).copied().unwrap_or(0);

    CensusStatistics {
        total_pairs,
        distinct_markings: marking_counts.len(),
        winning_pairs,
        marking_counts,
        duration,
        pairs_per_second: total_pairs as f64 / duration.as_secs_f64(),
    }
}

/// Print census statistics with beautiful formatting
pub fn print_census_statistics(stats: &CensusStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Census Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Pairs scored:      {}", stats.total_pairs);
    println!("  Distinct markings: {}", stats.distinct_markings);
    println!(
        "  Winning pairs:     {} {}",
        stats.winning_pairs,
        "(one per code)".bright_black()
    );
    println!("  Time taken:        {:.2}s", stats.duration.as_secs_f64());
    println!("  Pairs/second:      {:.0}", stats.pairs_per_second);

    println!("\n📈 {}", "Marking Distribution".bright_cyan().bold());
    let mut entries: Vec<(Marking, usize)> = stats
        .marking_counts
        .iter()
        .map(|(&marking, &count)| (marking, count))
        .collect();
    entries.sort_by(|a, b| b.0.cmp(&a.0));

    let max_count = entries.iter().map(|&(_, c)| c).max().unwrap_or(1);
    for (marking, count) in entries {
        let percentage = count as f64 / stats.total_pairs as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );

        println!("  {}: {bar} {count:7} ({percentage:5.2}%)", marking.pegs());
    }
}
