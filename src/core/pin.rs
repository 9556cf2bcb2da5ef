//! Code pegs
//!
//! A `Pin` is one of the six peg colors a code or guess slot can hold. Each
//! color carries a stable ordinal 0-5, which doubles as its digit in the text
//! protocol: a guess is typed as four digits, e.g. "0314".

use std::fmt;

/// One of the six peg colors usable in a code or guess slot
///
/// The discriminant is the color's ordinal and its digit in guess input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pin {
    Black = 0,
    Red = 1,
    Green = 2,
    Blue = 3,
    Yellow = 4,
    White = 5,
}

impl Pin {
    /// Number of distinct pin colors
    pub const COUNT: usize = 6;

    /// Every pin in ordinal order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::White,
    ];

    /// Map a digit character to its pin
    ///
    /// Returns `None` unless `ch` is one of '0'..='5'.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Pin;
    ///
    /// assert_eq!(Pin::from_digit('0'), Some(Pin::Black));
    /// assert_eq!(Pin::from_digit('5'), Some(Pin::White));
    /// assert_eq!(Pin::from_digit('6'), None);
    /// assert_eq!(Pin::from_digit('x'), None);
    /// ```
    #[must_use]
    pub const fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Self::Black),
            '1' => Some(Self::Red),
            '2' => Some(Self::Green),
            '3' => Some(Self::Blue),
            '4' => Some(Self::Yellow),
            '5' => Some(Self::White),
            _ => None,
        }
    }

    /// The pin's ordinal, 0-5
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// The pin's digit in the text protocol
    #[inline]
    #[must_use]
    pub const fn digit(self) -> char {
        (b'0' + self as u8) as char
    }

    /// Human-readable color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::White => "White",
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
