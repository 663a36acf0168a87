//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: Perfect-memory bot that remembers every symbol it has seen
//! - CliPlayer: Interactive line-based player

use crate::core::{board::Board, common::Coord, game::Reveal};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Choosing how many pairs to play with
/// - Picking cells to reveal
/// - Learning from each reveal
pub trait Player {
    /// Number of distinct symbols (pairs) for the new board.
    fn symbol_count(&mut self) -> anyhow::Result<usize>;

    /// Choose a hidden cell. `first` is the earlier pick of the current
    /// pair, if any; the returned cell must differ from it.
    fn select_cell(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        first: Option<Coord>,
    ) -> anyhow::Result<Coord>;

    /// Inform the player of the symbols behind its last two picks.
    fn observe_reveal(&mut self, _reveal: &Reveal) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
