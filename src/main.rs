//! Mastermind - CLI
//!
//! The classic code-breaking game with a TUI play mode, a plain console
//! mode, and information analysis of the guess space.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{
        PlayConfig, analyze_guess, print_census_statistics, rank_openings, run_census, run_simple,
    },
    core::Combination,
    game::DEFAULT_TURNS,
    output::{print_analysis_result, print_ranking},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Classic Mastermind: break the four-pin color code",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_TURNS)]
    turns: usize,

    /// Seed for the secret-code generator (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Fix the secret code (four digits 0-5) instead of drawing one
    #[arg(short, long, global = true)]
    code: Option<String>,

    /// Show the secret while playing (debugging aid)
    #[arg(long, global = true)]
    reveal: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (console play without TUI)
    Simple,

    /// Analyze the information content of a guess, or rank all openings
    Analyze {
        /// Guess to analyze (four digits 0-5); omit to rank every opening
        guess: Option<String>,

        /// How many ranked openings to show
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,
    },

    /// Census of every marking across the full code space
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    anyhow::ensure!(cli.turns > 0, "turns must be at least 1");

    let code = cli
        .code
        .as_deref()
        .map(Combination::parse)
        .transpose()
        .map_err(|e| anyhow::anyhow!("invalid --code: {e}"))?;

    let config = PlayConfig {
        turns: cli.turns,
        seed: cli.seed,
        code,
        reveal: cli.reveal,
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(&config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Analyze { guess, top } => run_analyze_command(guess.as_deref(), top),
        Commands::Stats => {
            run_stats_command();
            Ok(())
        }
    }
}

fn run_play_command(config: PlayConfig) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}

fn run_analyze_command(guess: Option<&str>, top: usize) -> Result<()> {
    match guess {
        Some(token) => {
            let result = analyze_guess(token).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
        }
        None => {
            println!(
                "Ranking {} openings against {} codes...",
                Combination::COUNT,
                Combination::COUNT
            );
            let ranked = rank_openings();
            print_ranking(&ranked, top);
        }
    }
    Ok(())
}

fn run_stats_command() {
    let stats = run_census();
    print_census_statistics(&stats);
}
