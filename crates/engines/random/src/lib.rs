//! Random Move Selector
//!
//! Picks uniformly at random from all legal moves. Useful for:
//! - Baseline comparisons (any real strategy should easily beat this)
//! - The last-resort fallback when another strategy fails to produce a move
//! - Stress testing the arena plumbing

use cozy_chess::Board;
use engine_core::{legal_moves, SearchLimits, SearchResult, Selection, Selector};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// A selector that plays random legal moves.
///
/// No evaluation at all - it simply picks a random move from the legal set.
#[derive(Debug, Clone, Default)]
pub struct RandomSelector {
    nodes: u64,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Selector for RandomSelector {
    fn search(&mut self, board: &Board, _limits: &SearchLimits) -> SearchResult {
        self.nodes = 1;

        let moves = legal_moves(board);
        let selection = match moves.choose(&mut thread_rng()) {
            Some(&mv) => Selection::Best(mv),
            None => Selection::NoMove,
        };

        SearchResult {
            selection,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
