//! Answer and reveal grids for a single game.

use crate::core::common::{BoardError, Coord};
use crate::core::config::{symbol_for, symbol_index, MAX_SYMBOLS, MIN_SYMBOLS};
use crate::core::layout::{compute_dimensions, Dimensions};
use crate::core::render::render_board;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

/// Fill a board of shape `dims` with `num_symbols` pairs, row-major.
///
/// Each cell draws uniformly from the symbols that still have an unplaced
/// copy, so every symbol ends up on exactly two cells. The shape must hold
/// exactly `2 * num_symbols` cells.
pub fn populate_answers<R: Rng>(
    dims: Dimensions,
    num_symbols: usize,
    rng: &mut R,
) -> Result<Vec<char>, BoardError> {
    if !(MIN_SYMBOLS..=MAX_SYMBOLS).contains(&num_symbols) {
        return Err(BoardError::InvalidSymbolCount(num_symbols));
    }
    if dims.cells() != 2 * num_symbols {
        return Err(BoardError::InvalidLayout("shape must hold exactly two cells per symbol"));
    }
    let mut remaining = [0u8; MAX_SYMBOLS];
    let mut eligible: Vec<usize> = (0..num_symbols).collect();
    for slot in remaining.iter_mut().take(num_symbols) {
        *slot = 2;
    }
    let mut answers = Vec::with_capacity(dims.cells());
    for _ in 0..dims.cells() {
        let pick = rng.random_range(0..eligible.len());
        let idx = eligible[pick];
        answers.push(symbol_for(idx).ok_or(BoardError::InvalidSymbolCount(num_symbols))?);
        remaining[idx] -= 1;
        if remaining[idx] == 0 {
            eligible.remove(pick);
        }
    }
    Ok(answers)
}

/// Board state: where each symbol lives and which cells are matched.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dimensions,
    num_symbols: usize,
    answers: Vec<char>,
    revealed: Vec<bool>,
}

impl Board {
    /// Generate a random board holding `num_symbols` pairs.
    pub fn generate<R: Rng>(num_symbols: usize, rng: &mut R) -> Result<Self, BoardError> {
        let dims = compute_dimensions(num_symbols)?;
        let answers = populate_answers(dims, num_symbols, rng)?;
        log::debug!(
            "generated {}x{} board with {} pairs",
            dims.rows,
            dims.cols,
            num_symbols
        );
        Ok(Self::hidden(dims, num_symbols, answers))
    }

    /// Build a board from an explicit row-major layout.
    ///
    /// The layout must fill `dims` exactly and use the first `n` symbols
    /// twice each, where `n` is half the cell count.
    pub fn from_answers(dims: Dimensions, answers: &[char]) -> Result<Self, BoardError> {
        if dims.rows == 0 || dims.cols == 0 || dims.cells() % 2 != 0 {
            return Err(BoardError::InvalidLayout("shape must hold a whole number of pairs"));
        }
        if answers.len() != dims.cells() {
            return Err(BoardError::InvalidLayout("layout length does not match shape"));
        }
        let num_symbols = dims.cells() / 2;
        if num_symbols > MAX_SYMBOLS {
            return Err(BoardError::InvalidSymbolCount(num_symbols));
        }
        let mut counts = [0usize; MAX_SYMBOLS];
        for &symbol in answers {
            match symbol_index(symbol) {
                Some(idx) if idx < num_symbols => counts[idx] += 1,
                _ => return Err(BoardError::InvalidLayout("symbol outside the pair set")),
            }
        }
        if counts[..num_symbols].iter().any(|&c| c != 2) {
            return Err(BoardError::InvalidLayout("every symbol must appear exactly twice"));
        }
        Ok(Self::hidden(dims, num_symbols, answers.to_vec()))
    }

    fn hidden(dims: Dimensions, num_symbols: usize, answers: Vec<char>) -> Self {
        Self {
            dims,
            num_symbols,
            answers,
            revealed: vec![false; dims.cells()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Number of distinct symbols (pairs) on the board.
    pub fn num_symbols(&self) -> usize {
        self.num_symbols
    }

    /// Row-major answer grid.
    pub fn answers(&self) -> &[char] {
        &self.answers
    }

    /// Row-major reveal grid.
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.dims.rows && at.col < self.dims.cols
    }

    fn index(&self, at: Coord) -> Result<usize, BoardError> {
        if self.contains(at) {
            Ok(at.row * self.dims.cols + at.col)
        } else {
            Err(BoardError::OutOfBounds(at))
        }
    }

    /// Symbol hidden at `at`, regardless of reveal state.
    pub fn symbol(&self, at: Coord) -> Result<char, BoardError> {
        Ok(self.answers[self.index(at)?])
    }

    pub fn is_revealed(&self, at: Coord) -> Result<bool, BoardError> {
        Ok(self.revealed[self.index(at)?])
    }

    pub(crate) fn set_revealed(&mut self, at: Coord, shown: bool) -> Result<(), BoardError> {
        let idx = self.index(at)?;
        self.revealed[idx] = shown;
        Ok(())
    }

    /// Number of revealed cells.
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }

    /// Cells that have not been matched yet, row-major.
    pub fn hidden_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.dims.cols;
        self.revealed
            .iter()
            .enumerate()
            .filter_map(move |(i, &r)| (!r).then(|| Coord::new(i / cols, i % cols)))
    }

    /// Returns `true` once every cell has been matched.
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  dims: {}x{},\n  answers: {:?},\n  revealed: {:?}\n}}",
            self.dims.rows, self.dims.cols, self.answers, self.revealed
        )
    }
}
