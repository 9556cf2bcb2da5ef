//! Game session state machine
//!
//! A `Game` owns one secret code and plays it out: guesses come in through
//! `submit_guess`, each costs a turn and earns a `Marking`, and the session
//! ends on a four-exact marking (won) or an exhausted turn budget (lost).
//! Finished games refuse further guesses instead of silently ignoring them.

use crate::core::{Combination, Marking};
use std::fmt;

/// Number of guesses a game allows unless configured otherwise
pub const DEFAULT_TURNS: usize = 12;

/// A played guess paired with the feedback it earned
#[derive(Debug, Clone, Copy)]
pub struct Row {
    guess: Combination,
    marking: Marking,
}

impl Row {
    /// The guess as submitted
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> Combination {
        self.guess
    }

    /// The feedback it earned
    #[inline]
    #[must_use]
    pub const fn marking(&self) -> Marking {
        self.marking
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The code was guessed within the turn budget
    Won,
    /// The turn budget ran out first
    Lost,
}

/// Error type for guesses submitted to a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The game already reached an outcome; start a new one instead
    AlreadyFinished,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyFinished => {
                write!(f, "the game is already over; start a new one to keep playing")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// One Mastermind session: secret code, guess history, turn budget, outcome
///
/// Construct with [`Game::new`] for a random secret from the thread RNG, or
/// [`Game::with_code`] to fix the secret (reproducible games, tests). Only
/// `submit_guess` mutates the session; every query is read-only and can be
/// called any number of times without changing state.
pub struct Game {
    secret: Combination,
    rows: Vec<Row>,
    turns_left: usize,
    outcome: Option<Outcome>,
}

impl Game {
    /// Start a game with a random secret drawn from the thread RNG
    ///
    /// Callers that need reproducible secrets draw their own `Combination`
    /// from a seeded source and use [`Game::with_code`].
    #[must_use]
    pub fn new(turns: usize) -> Self {
        Self::with_code(turns, Combination::random(&mut rand::rng()))
    }

    /// Start a game with the given secret code and turn budget
    ///
    /// A turn budget of zero is raised to one; every game allows at least
    /// one guess, so the turn counter can never underflow.
    #[must_use]
    pub fn with_code(turns: usize, code: Combination) -> Self {
        Self {
            secret: code,
            rows: Vec::new(),
            turns_left: turns.max(1),
            outcome: None,
        }
    }

    /// Submit a guess, spending one turn
    ///
    /// Scores the guess, appends it to the history, and decides the outcome:
    /// a four-exact marking wins immediately, and an empty turn budget
    /// afterwards loses. A winning guess on the last turn therefore still
    /// wins.
    ///
    /// # Errors
    ///
    /// `GameError::AlreadyFinished` if the game has already been won or
    /// lost. The session state is untouched in that case.
    pub fn submit_guess(&mut self, guess: Combination) -> Result<Marking, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::AlreadyFinished);
        }

        let marking = Marking::score(&self.secret, &guess);
        self.rows.push(Row { guess, marking });
        self.turns_left -= 1;

        if marking.is_win() {
            self.outcome = Some(Outcome::Won);
        } else if self.turns_left == 0 {
            self.outcome = Some(Outcome::Lost);
        }
        Ok(marking)
    }

    /// Whether the game has reached an outcome
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Whether the code was broken
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Won))
    }

    /// The outcome, if the game is finished
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The played rows, oldest first
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Guesses still available
    #[inline]
    #[must_use]
    pub const fn turns_left(&self) -> usize {
        self.turns_left
    }

    /// The secret code
    ///
    /// Exposed for end-of-game and reveal displays; scoring always goes
    /// through `submit_guess`.
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> Combination {
        self.secret
    }
}
