//! Commonly used types and utilities for ease of import.

pub use crate::{AiPlayer, Board, Coord, GameSession, GameStatus, MatchOutcome, Player};

#[cfg(feature = "std")]
pub use crate::{run_game, CliPlayer, GameSummary};
