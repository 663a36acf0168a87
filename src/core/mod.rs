//! Core matching game engine (no_std compatible)
//!
//! Board generation, reveal tracking, rendering and input validation. Only
//! `alloc`, `rand` and `libm` are needed, so the engine builds without `std`.

pub mod board;
pub mod common;
pub mod config;
pub mod duration;
pub mod game;
pub mod input;
pub mod layout;
pub mod render;

// Re-export commonly used types
pub use board::{populate_answers, Board};
pub use common::{Axis, BoardError, Coord, InputError, MatchOutcome};
pub use config::*;
pub use duration::{format_duration, format_elapsed};
pub use game::{GameSession, GameStatus, Pick, Reveal};
pub use input::{axis_bound, is_acceptable, parse_coordinate, parse_symbol_count};
pub use layout::{compute_dimensions, Dimensions};
pub use render::render_board;
