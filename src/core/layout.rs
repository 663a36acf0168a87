//! Board shape selection.

use crate::core::common::BoardError;
use crate::core::config::{MAX_SYMBOLS, MIN_SYMBOLS};
use alloc::vec::Vec;

/// Board shape in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells on the board.
    pub const fn cells(&self) -> usize {
        self.rows * self.cols
    }
}

/// Pick the most square shape holding `2 * num_symbols` cells.
///
/// The divisors of the cell count are sorted and the lower middle one
/// becomes the row count, so `rows <= cols` always holds.
pub fn compute_dimensions(num_symbols: usize) -> Result<Dimensions, BoardError> {
    if !(MIN_SYMBOLS..=MAX_SYMBOLS).contains(&num_symbols) {
        return Err(BoardError::InvalidSymbolCount(num_symbols));
    }
    let total = num_symbols * 2;
    let divisors: Vec<usize> = (1..=total).filter(|d| total % d == 0).collect();
    let rows = divisors[(divisors.len() - 1) / 2];
    Ok(Dimensions::new(rows, total / rows))
}

