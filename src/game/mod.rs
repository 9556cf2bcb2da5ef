//! Game session management
//!
//! The stateful side of the crate: a session wires the pure scoring from
//! [`crate::core`] to a turn budget and an outcome.

mod session;

pub use session::{DEFAULT_TURNS, Game, GameError, Outcome, Row};
