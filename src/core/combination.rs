//! Code and guess combinations
//!
//! A `Combination` is the ordered four-slot sequence of pins used both for
//! the secret code and for every guess. Construction always yields exactly
//! four valid slots; malformed text input is rejected by the parser, so the
//! rest of the crate never sees a partial combination.

use super::Pin;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// An ordered four-slot sequence of pins
///
/// Serves as both the secret code and a guess. Slots may repeat colors, so
/// the full space holds `Pin::COUNT.pow(4)` = 1296 combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination([Pin; Combination::SLOTS]);

/// Error type for guess tokens that do not form a combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCombinationError {
    /// Token does not have exactly four characters
    InvalidLength(usize),
    /// Token contains a character outside '0'..='5'
    InvalidPin(char),
}

impl fmt::Display for ParseCombinationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "guess must be exactly {} digits, got {len}",
                    Combination::SLOTS
                )
            }
            Self::InvalidPin(ch) => {
                write!(f, "'{ch}' is not a pin digit (expected 0-5)")
            }
        }
    }
}

impl std::error::Error for ParseCombinationError {}

impl Combination {
    /// Number of slots in a code or guess
    pub const SLOTS: usize = 4;

    /// Number of distinct combinations (6^4)
    pub const COUNT: usize = Pin::COUNT.pow(Self::SLOTS as u32);

    /// Create a combination from four pins
    #[inline]
    #[must_use]
    pub const fn new(pins: [Pin; Self::SLOTS]) -> Self {
        Self(pins)
    }

    /// Parse a guess token of exactly four digits in '0'..='5'
    ///
    /// # Errors
    ///
    /// - `ParseCombinationError::InvalidLength` if the token is not exactly
    ///   four characters
    /// - `ParseCombinationError::InvalidPin` on the first character that is
    ///   not a pin digit
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Combination, Pin};
    ///
    /// let guess = Combination::parse("0125").unwrap();
    /// assert_eq!(
    ///     *guess.pins(),
    ///     [Pin::Black, Pin::Red, Pin::Green, Pin::White]
    /// );
    ///
    /// assert!(Combination::parse("012").is_err());
    /// assert!(Combination::parse("6789").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, ParseCombinationError> {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() != Self::SLOTS {
            return Err(ParseCombinationError::InvalidLength(chars.len()));
        }

        let mut pins = [Pin::Black; Self::SLOTS];
        for (slot, &ch) in pins.iter_mut().zip(&chars) {
            *slot = Pin::from_digit(ch).ok_or(ParseCombinationError::InvalidPin(ch))?;
        }
        Ok(Self(pins))
    }

    /// Draw a uniformly random combination from the given source
    ///
    /// Each slot is chosen independently, so repeated colors are as likely
    /// as the math says they should be. Any `rand` source works; pass a
    /// seeded `StdRng` for reproducible draws.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Combination;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let a = Combination::random(&mut StdRng::seed_from_u64(7));
    /// let b = Combination::random(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| {
            Pin::ALL[rng.random_range(0..Pin::COUNT)]
        }))
    }

    /// The pins in slot order
    #[inline]
    #[must_use]
    pub const fn pins(&self) -> &[Pin; Self::SLOTS] {
        &self.0
    }

    /// The pin in a given slot
    ///
    /// # Panics
    ///
    /// Panics if `slot >= Combination::SLOTS`.
    #[inline]
    #[must_use]
    pub const fn pin(self, slot: usize) -> Pin {
        self.0[slot]
    }

    /// Iterate every possible combination in index order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index)
    }

    /// Build the combination with the given index in `0..COUNT`
    ///
    /// The first slot is the least-significant base-6 digit, so index 0 is
    /// "0000" and index 1 is "1000".
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::COUNT, "combination index out of range");
        let mut rest = index;
        Self(std::array::from_fn(|_| {
            let pin = Pin::ALL[rest % Pin::COUNT];
            rest /= Pin::COUNT;
            pin
        }))
    }

    /// The combination's index in `0..COUNT` (inverse of `from_index`)
    #[must_use]
    pub fn index(self) -> usize {
        self.0
            .iter()
            .rev()
            .fold(0, |acc, pin| acc * Pin::COUNT + pin.ordinal())
    }
}

impl fmt::Display for Combination {
    /// Formats the combination as its four digits, e.g. "0314"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pin in &self.0 {
            write!(f, "{}", pin.digit())?;
        }
        Ok(())
    }
}

impl FromStr for Combination {
    type Err = ParseCombinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    #[test]
    fn parse_maps_digits_to_pins() {
        let combination = Combination::parse("0125").unwrap();
        assert_eq!(
            *combination.pins(),
            [Pin::Black, Pin::Red, Pin::Green, Pin::White]
        );
    }

    #[test]
    fn parse_rejects_short_token() {
        assert_eq!(
            Combination::parse("012"),
            Err(ParseCombinationError::InvalidLength(3))
        );
    }

    #[test]
    fn parse_rejects_long_token() {
        assert_eq!(
            Combination::parse("01255"),
            Err(ParseCombinationError::InvalidLength(5))
        );
    }

    #[test]
    fn parse_rejects_non_digit_characters() {
        assert_eq!(
            Combination::parse("xxxx"),
            Err(ParseCombinationError::InvalidPin('x'))
        );
    }

    #[test]
    fn parse_rejects_digits_out_of_range() {
        assert_eq!(
            Combination::parse("6789"),
            Err(ParseCombinationError::InvalidPin('6'))
        );
    }

    #[test]
    fn parse_rejects_empty_token() {
        assert_eq!(
            Combination::parse(""),
            Err(ParseCombinationError::InvalidLength(0))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for token in ["0000", "0123", "5555", "3120", "0031"] {
            let combination = Combination::parse(token).unwrap();
            assert_eq!(combination.to_string(), token);
        }
    }

    #[test]
    fn from_str_works_through_parse() {
        let combination: Combination = "3120".parse().unwrap();
        assert_eq!(combination.to_string(), "3120");
        assert!("99".parse::<Combination>().is_err());
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = Combination::parse("01").unwrap_err();
        assert!(err.to_string().contains("exactly 4 digits"));

        let err = Combination::parse("012x").unwrap_err();
        assert!(err.to_string().contains('x'));
    }

    #[test]
    fn random_is_deterministic_under_a_seed() {
        let a = Combination::random(&mut StdRng::seed_from_u64(42));
        let b = Combination::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn random_draws_differ_across_a_stream() {
        // Not a randomness test, just a sanity check that the generator
        // advances between draws.
        let mut rng = StdRng::seed_from_u64(7);
        let draws: HashSet<Combination> = (0..50).map(|_| Combination::random(&mut rng)).collect();
        assert!(draws.len() > 1);
    }

    #[test]
    fn all_covers_the_space_exactly_once() {
        let seen: HashSet<Combination> = Combination::all().collect();
        assert_eq!(seen.len(), Combination::COUNT);
        assert_eq!(Combination::COUNT, 1296);
    }

    #[test]
    fn index_is_a_bijection() {
        for (i, combination) in Combination::all().enumerate() {
            assert_eq!(combination.index(), i);
            assert_eq!(Combination::from_index(i), combination);
        }
    }

    #[test]
    fn index_zero_is_all_black() {
        assert_eq!(Combination::from_index(0).to_string(), "0000");
        assert_eq!(Combination::from_index(1).to_string(), "1000");
        assert_eq!(Combination::from_index(Combination::COUNT - 1).to_string(), "5555");
    }

    #[test]
    fn slot_access() {
        let combination = Combination::parse("0314").unwrap();
        assert_eq!(combination.pin(0), Pin::Black);
        assert_eq!(combination.pin(1), Pin::Blue);
        assert_eq!(combination.pin(2), Pin::Red);
        assert_eq!(combination.pin(3), Pin::Yellow);
    }
}
