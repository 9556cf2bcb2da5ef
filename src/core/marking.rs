//! Guess feedback
//!
//! Scoring a guess against the secret code produces a `Marking`: how many
//! slots match exactly (black pegs), how many guessed colors appear in the
//! code but sit in the wrong slot (white pegs), and how many match nothing.
//! The scorer consumes code pins as it credits them, so a color is never
//! counted more often than it occurs on either side.

use super::{Combination, Pin};
use std::fmt;

/// One feedback peg
///
/// Classic Mastermind feedback: a black peg per exact match, a white peg per
/// color-only match, nothing for a miss. Pegs carry no slot information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right color in the right slot
    Black,
    /// Right color in the wrong slot
    White,
    /// Color not present, or already accounted for
    Blank,
}

impl Mark {
    /// The peg's display glyph
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Black => '●',
            Self::White => '○',
            Self::Blank => '·',
        }
    }
}

/// Scored feedback for one guess
///
/// Counts of exact, misplaced, and blank slots. The three always sum to
/// `Combination::SLOTS`; the blank count is derived at construction and
/// never supplied by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Marking {
    exact: u8,
    misplaced: u8,
    blank: u8,
}

impl Marking {
    /// The winning feedback: every slot exact
    pub const WIN: Self = Self::new(Combination::SLOTS as u8, 0);

    /// Create a marking from exact and misplaced counts
    ///
    /// Counts are clamped to the four slots, exact first, so the three
    /// categories always sum to `Combination::SLOTS`.
    #[must_use]
    pub const fn new(exact: u8, misplaced: u8) -> Self {
        let slots = Combination::SLOTS as u8;
        let exact = if exact > slots { slots } else { exact };
        let misplaced = if misplaced > slots - exact {
            slots - exact
        } else {
            misplaced
        };
        Self {
            exact,
            misplaced,
            blank: slots - exact - misplaced,
        }
    }

    /// Score `guess` against the secret `code`
    ///
    /// Implements the classic peg rules with duplicate colors handled by
    /// consumption:
    ///
    /// 1. First pass: count exact slot matches; tally each unmatched code
    ///    pin into a per-color pool.
    /// 2. Second pass: each unmatched guess pin earns a white peg while its
    ///    color's pool still holds a pin, draining one as it does.
    /// 3. Blanks are whatever the four slots leave over.
    ///
    /// A color therefore never earns more pegs than the fewer of its
    /// occurrences in the code and in the guess.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Combination, Marking};
    ///
    /// let code = Combination::parse("0123").unwrap();
    /// let guess = Combination::parse("3120").unwrap();
    /// let marking = Marking::score(&code, &guess);
    ///
    /// assert_eq!(marking.exact(), 2);
    /// assert_eq!(marking.misplaced(), 2);
    /// assert_eq!(marking.blank(), 0);
    /// ```
    #[must_use]
    pub fn score(code: &Combination, guess: &Combination) -> Self {
        let mut exact = 0u8;
        let mut pool = [0u8; Pin::COUNT];

        // First pass: exact matches; unmatched code pins feed the pool
        for (c, g) in code.pins().iter().zip(guess.pins()) {
            if c == g {
                exact += 1;
            } else {
                pool[c.ordinal()] += 1;
            }
        }

        // Second pass: misplaced matches drain the pool one pin at a time
        let mut misplaced = 0u8;
        for (c, g) in code.pins().iter().zip(guess.pins()) {
            if c != g && pool[g.ordinal()] > 0 {
                misplaced += 1;
                pool[g.ordinal()] -= 1;
            }
        }

        Self::new(exact, misplaced)
    }

    /// Count of slots with the right color in the right place
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Count of guessed colors present in the code but in another slot
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> u8 {
        self.misplaced
    }

    /// Count of slots that matched nothing
    #[inline]
    #[must_use]
    pub const fn blank(self) -> u8 {
        self.blank
    }

    /// Whether this is the winning feedback (all slots exact)
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact as usize == Combination::SLOTS
    }

    /// The feedback pegs in display order: black, then white, then blank
    ///
    /// Pegs are deliberately not tied to slots; sorting them is part of the
    /// game's rules.
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        std::iter::repeat_n(Mark::Black, self.exact as usize)
            .chain(std::iter::repeat_n(Mark::White, self.misplaced as usize))
            .chain(std::iter::repeat_n(Mark::Blank, self.blank as usize))
    }

    /// The feedback pegs as a glyph string, e.g. "●●○·"
    #[must_use]
    pub fn pegs(self) -> String {
        self.marks().map(Mark::glyph).collect()
    }
}

impl fmt::Display for Marking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} exact, {} misplaced, {} blank",
            self.exact, self.misplaced, self.blank
        )
    }
}
