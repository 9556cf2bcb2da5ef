//! Display functions for command results

use super::formatters::{combination_to_emoji, create_progress_bar, entropy_bar};
use crate::commands::AnalysisResult;
use crate::core::Combination;
use colored::Colorize;

/// Print the result of analyzing a guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} {}",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold(),
        combination_to_emoji(result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, 30);

    println!("\n📊 Against {} possible codes:", result.total_codes);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} codes remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} codes",
        result.metrics.max_partition
    );

    println!("\n📈 {}", "Marking distribution:".bright_cyan().bold());
    let largest = result
        .distribution
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(1);

    for &(marking, count) in &result.distribution {
        let pct = (count as f64 / result.total_codes as f64) * 100.0;
        let bar = create_progress_bar(count as f64, largest as f64, 30);
        println!(
            "   {}: {} {count:5} ({pct:5.1}%)",
            marking.pegs(),
            bar.green()
        );
    }
}

/// Print the ranking of openings by information gain
pub fn print_ranking(ranked: &[(Combination, f64)], top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "MOST INFORMATIVE OPENINGS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (i, &(guess, entropy)) in ranked.iter().take(top).enumerate() {
        println!(
            "  {:>3}. {} {}  [{}] {}",
            i + 1,
            guess.to_string().bright_yellow(),
            combination_to_emoji(guess),
            entropy_bar(entropy, 20).green(),
            format!("{entropy:.3} bits").bright_yellow()
        );
    }

    println!("\n({} openings ranked)", ranked.len());
}
