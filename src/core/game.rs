use crate::core::{
    board::Board,
    common::{BoardError, Coord, MatchOutcome},
    render::render_board,
};
use alloc::string::String;
use rand::Rng;

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Complete,
}

/// One revealed symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub at: Coord,
    pub symbol: char,
}

/// Everything a reveal attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub first: Pick,
    pub second: Pick,
    pub outcome: MatchOutcome,
    /// Board as it looked with both picks face up.
    pub view: String,
}

/// Game logic for a single session: the board plus attempt bookkeeping.
pub struct GameSession {
    board: Board,
    attempts: usize,
    matches: usize,
}

impl GameSession {
    /// Start a session on a freshly generated board.
    pub fn new<R: Rng>(num_symbols: usize, rng: &mut R) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::generate(num_symbols, rng)?))
    }

    /// Start a session on an existing board.
    pub fn from_board(board: Board) -> Self {
        let matches = board.revealed_count() / 2;
        Self {
            board,
            attempts: 0,
            matches,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of reveal attempts made so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Number of pairs matched so far.
    pub fn matches(&self) -> usize {
        self.matches
    }

    /// Check that `at` may be picked, given the first pick of the pair if
    /// one has been made.
    pub fn check_pick(&self, at: Coord, first: Option<Coord>) -> Result<(), BoardError> {
        if self.board.is_revealed(at)? {
            return Err(BoardError::AlreadyRevealed(at));
        }
        if first == Some(at) {
            return Err(BoardError::SameCell(at));
        }
        Ok(())
    }

    /// Turn two hidden cells face up and compare them.
    ///
    /// The returned view always shows both symbols. A matching pair stays
    /// revealed; otherwise both cells are hidden again before returning.
    pub fn reveal_pair(&mut self, a: Coord, b: Coord) -> Result<Reveal, BoardError> {
        self.check_pick(a, None)?;
        self.check_pick(b, Some(a))?;

        self.board.set_revealed(a, true)?;
        self.board.set_revealed(b, true)?;
        let view = render_board(&self.board);
        let first = Pick {
            at: a,
            symbol: self.board.symbol(a)?,
        };
        let second = Pick {
            at: b,
            symbol: self.board.symbol(b)?,
        };
        self.attempts += 1;

        let outcome = if first.symbol == second.symbol {
            self.matches += 1;
            MatchOutcome::Matched
        } else {
            self.board.set_revealed(a, false)?;
            self.board.set_revealed(b, false)?;
            MatchOutcome::NoMatch
        };
        log::debug!(
            "attempt {}: {}={} {}={} -> {:?}",
            self.attempts,
            a,
            first.symbol,
            b,
            second.symbol,
            outcome
        );
        Ok(Reveal {
            first,
            second,
            outcome,
            view,
        })
    }

    /// Returns `true` once every pair has been matched.
    pub fn is_complete(&self) -> bool {
        self.board.is_complete()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_complete() {
            GameStatus::Complete
        } else {
            GameStatus::InProgress
        }
    }
}
