//! Greedy One-Ply Selector
//!
//! Scores every legal move with the shared leaf rule and keeps the best.
//! No lookahead beyond the move itself, so it will happily grab a pawn and
//! walk into a mate - that is what the deeper strategies are for.

use cozy_chess::Board;
use engine_core::{
    evaluate_move, legal_moves, random_legal_move, Heuristic, MaterialEval, Score, SearchLimits,
    SearchResult, Selection, Selector, CHECKMATE,
};

#[cfg(test)]
mod lib_tests;

/// One-ply greedy selector over an injected heuristic.
pub struct GreedySelector {
    eval: Box<dyn Heuristic>,
    nodes: u64,
}

impl GreedySelector {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(MaterialEval))
    }

    pub fn with_heuristic(eval: Box<dyn Heuristic>) -> Self {
        Self { eval, nodes: 0 }
    }
}

impl Default for GreedySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for GreedySelector {
    fn search(&mut self, board: &Board, _limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;

        let moves = legal_moves(board);
        if moves.is_empty() {
            return SearchResult {
                selection: Selection::NoMove,
                score: 0,
                depth: 1,
                nodes: self.nodes,
            };
        }

        let perspective = board.side_to_move();
        let mut max_score: Score = -CHECKMATE;
        let mut best = None;

        for mv in moves {
            let score = evaluate_move(board, mv, perspective, self.eval.as_ref());
            self.nodes += 1;
            // Strict improvement only; first-seen move wins ties
            if score > max_score {
                max_score = score;
                best = Some(mv);
            }
        }

        // If nothing beat the seed, fall back to a random legal move
        let selection = match best.or_else(|| random_legal_move(board)) {
            Some(mv) => Selection::Best(mv),
            None => Selection::NoMove,
        };

        SearchResult {
            selection,
            score: max_score,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
