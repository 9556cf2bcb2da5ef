//! Mastermind
//!
//! The classic code-breaking board game: a secret code of four colored pins,
//! twelve guesses to break it, and black/white peg feedback after every
//! guess.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Combination, Marking};
//! use mastermind::game::Game;
//!
//! // Fix the secret code and play a guess against it
//! let code = Combination::parse("0031").unwrap();
//! let mut game = Game::with_code(12, code);
//!
//! let marking = game.submit_guess(Combination::parse("0123").unwrap()).unwrap();
//! assert_eq!(marking.exact(), 1);
//! assert_eq!(marking.misplaced(), 2);
//! assert!(!game.is_finished());
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Information analysis of guesses
pub mod analysis;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
