//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: print the board, read a guess, show the
//! pegs, repeat until the game ends, then offer a rematch.

use super::PlayConfig;
use crate::core::Combination;
use crate::game::Game;
use crate::output::formatters::{combination_to_emoji, format_board, legend};
use colored::Colorize;
use rand::{SeedableRng, rngs::StdRng};
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// the prompt.
pub fn run_simple(config: &PlayConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Mastermind - Break the Code                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I picked a secret code of four pins; you have {} guesses to break it.", config.turns);
    println!("Enter each guess as four digits, e.g. 0035:\n");
    println!("  {}", legend());
    println!("  ● = right color, right slot    ○ = right color, wrong slot\n");
    println!("Commands: 'quit' to exit\n");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    loop {
        let code = config
            .code
            .unwrap_or_else(|| Combination::random(&mut rng));
        let mut game = Game::with_code(config.turns, code);

        while !game.is_finished() {
            println!("────────────────────────────────────────────────────────────");
            print!("{}", format_board(&game, config.reveal));

            let input = match get_user_input("Enter your guess as xxxx")? {
                Some(input) => input.to_lowercase(),
                None => {
                    println!("\nBye ...\n");
                    return Ok(());
                }
            };
            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\nBye ...\n");
                    return Ok(());
                }
                token => match Combination::parse(token) {
                    Ok(guess) => {
                        let marking = game.submit_guess(guess).map_err(|e| e.to_string())?;
                        println!("  {}  {}\n", marking.pegs(), marking);
                    }
                    Err(e) => {
                        println!("❌ Your input was ill-formed, please try again ... ({e})\n");
                    }
                },
            }
        }

        println!("────────────────────────────────────────────────────────────");
        print!("{}", format_board(&game, config.reveal));
        println!();

        if game.is_won() {
            println!(
                "{}",
                format!(
                    "🎉 Congratulations, you won! The code was {} {}",
                    game.secret(),
                    combination_to_emoji(game.secret())
                )
                .bright_green()
                .bold()
            );
            println!(
                "   Broken in {} guess{}.",
                game.rows().len(),
                if game.rows().len() == 1 { "" } else { "es" }
            );
        } else {
            println!(
                "{}",
                format!(
                    "😞 Too bad, you lost ... the code was {} {}",
                    game.secret(),
                    combination_to_emoji(game.secret())
                )
                .red()
            );
        }
        println!();

        let answer = get_user_input("Play again (y/n) ?")?;
        match answer.map(|answer| answer.to_lowercase()).as_deref() {
            Some("n" | "no") | None => {
                println!("\nBye ...\n");
                return Ok(());
            }
            _ => println!("\n🔄 New game started!\n"),
        }
    }
}

/// Get user input with a prompt; `None` once stdin is closed
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    read_token(&mut io::stdin().lock())
}

/// Read one trimmed line, or `None` when the reader is exhausted
fn read_token(reader: &mut impl BufRead) -> Result<Option<String>, String> {
    let mut input = String::new();
    let bytes = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
