//! One-Ply Opponent Lookahead
//!
//! For each candidate move, assumes the opponent answers with their best
//! single reply and picks the candidate whose best answer is weakest. An
//! unpruned, unordered reference point for the full alpha-beta search; the
//! two are kept behaviorally independent.

use cozy_chess::Board;
use engine_core::{
    evaluate_move, legal_moves, random_legal_move, Heuristic, MaterialEval, Score, SearchLimits,
    SearchResult, Selection, Selector, CHECKMATE,
};

#[cfg(test)]
mod lib_tests;

/// Selector minimizing the opponent's best one-ply reply.
pub struct LookaheadSelector {
    eval: Box<dyn Heuristic>,
    nodes: u64,
}

impl LookaheadSelector {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(MaterialEval))
    }

    pub fn with_heuristic(eval: Box<dyn Heuristic>) -> Self {
        Self { eval, nodes: 0 }
    }
}

impl Default for LookaheadSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for LookaheadSelector {
    fn search(&mut self, board: &Board, _limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;

        let moves = legal_moves(board);
        if moves.is_empty() {
            return SearchResult {
                selection: Selection::NoMove,
                score: 0,
                depth: 2,
                nodes: self.nodes,
            };
        }

        let mut best = None;
        let mut opponent_min_max: Score = CHECKMATE;

        for mv in moves {
            let mut after = board.clone();
            after.play(mv);
            let opponent = after.side_to_move();

            // Best the opponent can do against this move. An empty reply set
            // leaves the seed, so mating and stalemating moves look ideal.
            let mut opponent_max: Score = -CHECKMATE;
            for reply in legal_moves(&after) {
                let score = evaluate_move(&after, reply, opponent, self.eval.as_ref());
                self.nodes += 1;
                if score > opponent_max {
                    opponent_max = score;
                }
            }

            // Strictly-less tie-break: the earliest safest candidate stays
            if opponent_max < opponent_min_max {
                opponent_min_max = opponent_max;
                best = Some(mv);
            }
        }

        let selection = match best.or_else(|| random_legal_move(board)) {
            Some(mv) => Selection::Best(mv),
            None => Selection::NoMove,
        };

        SearchResult {
            selection,
            score: opponent_min_max,
            depth: 2,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Lookahead v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
