//! Formatting utilities for terminal output

use crate::core::{Combination, Pin};
use crate::game::Game;

/// Format a pin as its emoji circle
#[must_use]
pub const fn pin_to_emoji(pin: Pin) -> char {
    match pin {
        Pin::Black => '⚫',
        Pin::Red => '🔴',
        Pin::Green => '🟢',
        Pin::Blue => '🔵',
        Pin::Yellow => '🟡',
        Pin::White => '⚪',
    }
}

/// Format a combination as an emoji string
#[must_use]
pub fn combination_to_emoji(combination: Combination) -> String {
    combination.pins().iter().map(|&pin| pin_to_emoji(pin)).collect()
}

/// The digit-to-color legend line, e.g. "Black=0, Red=1, ..."
#[must_use]
pub fn legend() -> String {
    Pin::ALL
        .iter()
        .map(|pin| format!("{}={}", pin.name(), pin.digit()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the board: played rows with feedback, plus the remaining budget
///
/// With `reveal` set the secret is printed above the rows as a debugging
/// aid.
#[must_use]
pub fn format_board(game: &Game, reveal: bool) -> String {
    let mut board = String::new();

    if reveal {
        board.push_str(&format!(
            "The code is {} {}\n",
            game.secret(),
            combination_to_emoji(game.secret())
        ));
    }

    for (i, row) in game.rows().iter().enumerate() {
        board.push_str(&format!(
            " {:>2}. {}  {}  {}\n",
            i + 1,
            combination_to_emoji(row.guess()),
            row.marking().pegs(),
            row.guess()
        ));
    }

    board.push_str(&format!(
        "You have {} guess(es) remaining\n",
        game.turns_left()
    ));
    board
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the marking-space maximum
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 3.81; // Roughly log2(14 reachable markings)
    create_progress_bar(entropy, max_entropy, width)
}
