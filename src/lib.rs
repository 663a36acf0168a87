#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod player;
#[cfg(feature = "std")]
pub mod driver;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod timer;
pub mod prelude;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use driver::{run_game, GameSummary};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use timer::SessionTimer;
