//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero I/O concerns.
//! All types here are pure, testable, and have clear mathematical properties.

mod combination;
mod marking;
mod pin;

pub use combination::{Combination, ParseCombinationError};
pub use marking::{Mark, Marking};
pub use pin::Pin;
