//! Common types for the matching game: coordinates, outcomes and errors.

use core::fmt;

/// A cell on the board, addressed by zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Which board axis a coordinate token is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// Word used when prompting for this axis.
    pub fn label(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

/// Result of revealing two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Both cells hold the same symbol and stay revealed.
    Matched,
    /// The symbols differ; both cells were hidden again.
    NoMatch,
}

impl MatchOutcome {
    /// Message shown to the player after a reveal.
    pub fn message(self) -> &'static str {
        match self {
            MatchOutcome::Matched => "It's a match!",
            MatchOutcome::NoMatch => "Sorry, it wasn't a match.",
        }
    }
}

/// Errors returned by board and session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Symbol count outside `1..=26`.
    InvalidSymbolCount(usize),
    /// Coordinate lies outside the board.
    OutOfBounds(Coord),
    /// Both picks name the same cell.
    SameCell(Coord),
    /// The cell has already been matched.
    AlreadyRevealed(Coord),
    /// An explicit layout does not fit the requested shape or pair rule.
    InvalidLayout(&'static str),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSymbolCount(n) => {
                write!(f, "Symbol count {} is outside 1..=26", n)
            }
            BoardError::OutOfBounds(c) => write!(f, "Cell {} is outside the board", c),
            BoardError::SameCell(c) => write!(f, "Cell {} was picked twice", c),
            BoardError::AlreadyRevealed(c) => write!(f, "Cell {} is already matched", c),
            BoardError::InvalidLayout(why) => write!(f, "Invalid board layout: {}", why),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Reasons a raw input token was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing was typed.
    Empty,
    /// More digits than a coordinate or count can have.
    TooLong,
    /// The token contains something other than ASCII digits.
    NotANumber,
    /// The value parsed but falls outside `min..max`.
    OutOfRange { value: usize, min: usize, max: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Empty input"),
            InputError::TooLong => write!(f, "Too many digits"),
            InputError::NotANumber => write!(f, "Input is not a number"),
            InputError::OutOfRange { value, min, max } => {
                write!(f, "{} is outside {}..{}", value, min, max)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}
