#![cfg(feature = "std")]
//! Turn loop tying a [`Player`] to a [`GameSession`].

use std::io::Write;

use rand::rngs::SmallRng;
use serde::Serialize;

use crate::core::{format_elapsed, GameSession};
use crate::player::Player;
use crate::timer::SessionTimer;

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    pub letters: usize,
    pub rows: usize,
    pub cols: usize,
    pub attempts: usize,
    pub seconds: f64,
}

/// Play one full game: greeting, board setup, reveal attempts until every
/// pair is matched, then the elapsed time.
///
/// Board snapshots and results go to `out`; prompting is left to `player`.
pub fn run_game<P, W>(player: &mut P, out: &mut W, rng: &mut SmallRng) -> anyhow::Result<GameSummary>
where
    P: Player + ?Sized,
    W: Write,
{
    writeln!(out, "Ready to test your memory?")?;
    out.flush()?;
    let letters = player.symbol_count()?;
    let mut session = GameSession::new(letters, rng)?;
    let dims = session.board().dimensions();
    log::info!(
        "starting game with {} letters on a {}x{} board",
        letters,
        dims.rows,
        dims.cols
    );

    writeln!(
        out,
        "You will be prompted to enter the row and column numbers of the two points on the board you want to try to match."
    )?;
    writeln!(
        out,
        "Valid inputs for rows are 0 through {} inclusive and valid inputs for columns are 0 through {} inclusive",
        dims.rows - 1,
        dims.cols - 1
    )?;
    writeln!(out, "{}", session.board())?;
    out.flush()?;

    let mut timer = SessionTimer::start();
    while !session.is_complete() {
        let first = player.select_cell(rng, session.board(), None)?;
        let second = player.select_cell(rng, session.board(), Some(first))?;
        let reveal = session.reveal_pair(first, second)?;
        writeln!(out, "{}", reveal.view)?;
        writeln!(out, "{}", reveal.outcome.message())?;
        out.flush()?;
        player.observe_reveal(&reveal);
    }
    let elapsed = timer.finish();

    writeln!(out, "Nice work!")?;
    writeln!(out, "Duration: {}", format_elapsed(elapsed))?;
    out.flush()?;
    log::info!(
        "game complete after {} attempts in {:.1}s",
        session.attempts(),
        elapsed.as_secs_f64()
    );

    Ok(GameSummary {
        letters,
        rows: dims.rows,
        cols: dims.cols,
        attempts: session.attempts(),
        seconds: elapsed.as_secs_f64(),
    })
}
