//! Depth-Limited Alpha-Beta Selector
//!
//! The primary strategy: recursive minimax with alpha-beta pruning,
//! captures-first move ordering, and cooperative cancellation. The simpler
//! strategies exist to sanity-check and back up this one.

mod search;

use cozy_chess::Board;
use engine_core::{
    has_legal_moves, random_legal_move, Heuristic, MaterialEval, SearchLimits, SearchResult,
    Selection, Selector,
};


/// Alpha-beta selector over an injected heuristic.
pub struct AlphaBetaSelector {
    eval: Box<dyn Heuristic>,
    nodes: u64,
}

impl AlphaBetaSelector {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(MaterialEval))
    }

    pub fn with_heuristic(eval: Box<dyn Heuristic>) -> Self {
        Self { eval, nodes: 0 }
    }
}

impl Default for AlphaBetaSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for AlphaBetaSelector {
    fn search(&mut self, board: &Board, limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;
        let perspective = board.side_to_move();

        let outcome = search::run(
            board,
            limits.depth,
            perspective,
            self.eval.as_ref(),
            &limits.cancel,
            &mut self.nodes,
        );

        if outcome.cancelled {
            return SearchResult {
                selection: Selection::Cancelled,
                score: 0,
                depth: limits.depth,
                nodes: self.nodes,
            };
        }

        let (selection, score) = match outcome.best {
            Some((mv, score)) => (Selection::Best(mv), score),
            None if has_legal_moves(board) => {
                // Depth 0 or a scoring anomaly: recover with a random move
                eprintln!("Warning: no best move found, using a random move");
                match random_legal_move(board) {
                    Some(mv) => (Selection::Best(mv), 0),
                    None => (Selection::NoMove, 0),
                }
            }
            None => (Selection::NoMove, 0),
        };

        SearchResult {
            selection,
            score,
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
