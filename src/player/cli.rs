#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::core::{
    board::Board,
    common::{Axis, Coord},
    config::{MAX_SYMBOLS, MIN_SYMBOLS},
    input::{axis_bound, is_acceptable, parse_coordinate, parse_symbol_count},
    layout::Dimensions,
};
use rand::rngs::SmallRng;

use super::Player;

/// Interactive player reading line-based answers from `input` and writing
/// prompts to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    letters: Option<usize>,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process console.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            letters: None,
        }
    }

    /// Skip the letter-count prompt and play with `letters` pairs.
    pub fn with_letters(mut self, letters: usize) -> Self {
        self.letters = Some(letters);
        self
    }

    /// Give back the prompt writer, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before the game finished");
        }
        // Only the line terminator is dropped; " 3 " stays invalid.
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Keep asking until `token` is a valid index on `axis`.
    pub fn take_validated_int(
        &mut self,
        mut token: String,
        axis: Axis,
        dims: Dimensions,
    ) -> anyhow::Result<usize> {
        while !is_acceptable(&token, axis, dims) {
            log::trace!("rejected {} token {:?}", axis.label(), token);
            let text = format!(
                "enter a {} number between 0-{}: ",
                axis.label(),
                axis_bound(axis, dims) - 1
            );
            token = self.prompt(&text)?;
        }
        Ok(parse_coordinate(&token, axis, dims)?)
    }

    fn read_coord(&mut self, dims: Dimensions) -> anyhow::Result<Coord> {
        let token = self.prompt("row: ")?;
        let row = self.take_validated_int(token, Axis::Row, dims)?;
        let token = self.prompt("col: ")?;
        let col = self.take_validated_int(token, Axis::Column, dims)?;
        Ok(Coord::new(row, col))
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn symbol_count(&mut self) -> anyhow::Result<usize> {
        if let Some(letters) = self.letters {
            if !(MIN_SYMBOLS..=MAX_SYMBOLS).contains(&letters) {
                anyhow::bail!(
                    "letter count {} is outside {}..={}",
                    letters,
                    MIN_SYMBOLS,
                    MAX_SYMBOLS
                );
            }
            return Ok(letters);
        }
        let mut token = self.prompt("Type in the number of letters you want to match: ")?;
        loop {
            match parse_symbol_count(&token) {
                Ok(n) => return Ok(n),
                Err(e) => {
                    log::trace!("rejected letter count {:?}: {}", token, e);
                    let text = format!(
                        "Please enter a number between {} and {}: ",
                        MIN_SYMBOLS, MAX_SYMBOLS
                    );
                    token = self.prompt(&text)?;
                }
            }
        }
    }

    fn select_cell(
        &mut self,
        _rng: &mut SmallRng,
        board: &Board,
        first: Option<Coord>,
    ) -> anyhow::Result<Coord> {
        loop {
            let at = self.read_coord(board.dimensions())?;
            if board.is_revealed(at)? {
                writeln!(
                    self.output,
                    "Please enter values that you haven't matched before."
                )?;
            } else if first == Some(at) {
                writeln!(
                    self.output,
                    "Please enter values different from your previous input."
                )?;
            } else {
                return Ok(at);
            }
        }
    }
}
