use crate::core::{
    board::Board,
    common::{Coord, MatchOutcome},
    config::MAX_SYMBOLS,
    game::Reveal,
};
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use super::Player;

/// Bot that never forgets a symbol it has seen.
///
/// When both cells of a symbol are known it plays them. Otherwise both
/// picks go to unseen cells, falling back to any hidden cell once every
/// hidden cell has been seen.
pub struct AiPlayer {
    letters: usize,
    seen: BTreeSet<Coord>,
    known: BTreeMap<char, Vec<Coord>>,
    pending: Option<Coord>,
}

impl AiPlayer {
    /// Bot that asks for a board with `letters` pairs.
    pub fn new(letters: usize) -> Self {
        Self {
            letters,
            seen: BTreeSet::new(),
            known: BTreeMap::new(),
            pending: None,
        }
    }

    fn remember(&mut self, at: Coord, symbol: char) {
        self.seen.insert(at);
        let cells = self.known.entry(symbol).or_default();
        if !cells.contains(&at) {
            cells.push(at);
        }
    }

    fn known_pair(&self) -> Option<(Coord, Coord)> {
        self.known
            .values()
            .find(|cells| cells.len() >= 2)
            .map(|cells| (cells[0], cells[1]))
    }

    fn random_hidden(
        &self,
        rng: &mut SmallRng,
        board: &Board,
        exclude: Option<Coord>,
    ) -> Option<Coord> {
        let hidden: Vec<Coord> = board
            .hidden_cells()
            .filter(|&c| Some(c) != exclude)
            .collect();
        let unseen: Vec<Coord> = hidden
            .iter()
            .copied()
            .filter(|c| !self.seen.contains(c))
            .collect();
        let pool = if unseen.is_empty() { &hidden } else { &unseen };
        if pool.is_empty() {
            return None;
        }
        Some(pool[rng.random_range(0..pool.len())])
    }
}

impl Player for AiPlayer {
    fn symbol_count(&mut self) -> anyhow::Result<usize> {
        if self.letters == 0 || self.letters > MAX_SYMBOLS {
            anyhow::bail!("AI cannot play with {} letters", self.letters);
        }
        Ok(self.letters)
    }

    fn select_cell(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        first: Option<Coord>,
    ) -> anyhow::Result<Coord> {
        let choice = match first {
            None => {
                self.pending = None;
                match self.known_pair() {
                    Some((a, b)) => {
                        self.pending = Some(b);
                        Some(a)
                    }
                    None => self.random_hidden(rng, board, None),
                }
            }
            Some(f) => {
                let planned = self.pending.take().filter(|&p| p != f);
                planned.or_else(|| self.random_hidden(rng, board, Some(f)))
            }
        };
        choice.ok_or_else(|| anyhow::anyhow!("no hidden cell left to pick"))
    }

    fn observe_reveal(&mut self, reveal: &Reveal) {
        match reveal.outcome {
            MatchOutcome::Matched => {
                self.seen.insert(reveal.first.at);
                self.seen.insert(reveal.second.at);
                self.known.remove(&reveal.first.symbol);
            }
            MatchOutcome::NoMatch => {
                self.remember(reveal.first.at, reveal.first.symbol);
                self.remember(reveal.second.at, reveal.second.symbol);
            }
        }
    }
}
