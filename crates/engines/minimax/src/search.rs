//! Minimax search with alpha-beta pruning
//!
//! Fixed-depth, captures-first ordering, cooperative cancellation. The root
//! perspective stays fixed for the whole search; only the maximize/minimize
//! role alternates per ply.

use cozy_chess::{Board, Color, Move};
use engine_core::{
    is_capture, leaf_score, legal_moves, CancelToken, Heuristic, Score, SCORE_INF,
};

/// Result from `run` indicating whether search completed or was cancelled.
pub(crate) struct SearchOutcome {
    /// Best move found at the root with its score (None if no legal moves
    /// or the configured depth never entered a maximizing ply)
    pub best: Option<(Move, Score)>,
    /// True if the search observed a cancellation request
    pub cancelled: bool,
}

/// Searches the position and returns the best root move with its score.
///
/// # Arguments
/// * `board` - The position to search
/// * `depth` - Search depth in plies
/// * `perspective` - The side whose advantage is scored positively
/// * `eval` - Static evaluator for non-terminal leaves
/// * `cancel` - Cancellation token polled once per ply
/// * `nodes` - Counter for nodes visited (for statistics)
pub(crate) fn run(
    board: &Board,
    depth: u8,
    perspective: Color,
    eval: &dyn Heuristic,
    cancel: &CancelToken,
    nodes: &mut u64,
) -> SearchOutcome {
    let mut search = Search {
        eval,
        perspective,
        cancel,
        nodes,
        aborted: false,
    };

    let (score, best_move) = search.minimax(board, depth, true, -SCORE_INF, SCORE_INF);

    if search.aborted {
        return SearchOutcome {
            best: None,
            cancelled: true,
        };
    }

    SearchOutcome {
        best: best_move.map(|mv| (mv, score)),
        cancelled: false,
    }
}

/// Per-run search state.
struct Search<'a> {
    eval: &'a dyn Heuristic,
    perspective: Color,
    cancel: &'a CancelToken,
    nodes: &'a mut u64,
    aborted: bool,
}

impl Search<'_> {
    /// Recursive minimax with alpha-beta pruning.
    ///
    /// Returns the subtree score and, on maximizing plies, the move that
    /// produced it; the driver promotes only the root frame's move.
    /// Minimizing plies never surface a move.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        maximize: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Score, Option<Move>) {
        // Cooperative cancellation: poll once per ply, latch, unwind
        if self.aborted || self.cancel.poll() {
            self.aborted = true;
            return (0, None);
        }

        *self.nodes += 1;

        let mut moves = legal_moves(board);
        // Captures first; the sort is stable, so ties keep the move
        // generator's order and pruning stays deterministic
        moves.sort_by_key(|&mv| !is_capture(board, mv));

        if depth == 0 || moves.is_empty() {
            return (leaf_score(board, self.perspective, self.eval), None);
        }

        if maximize {
            let mut max_score = -SCORE_INF;
            let mut best_move = None;

            for mv in moves {
                let mut next = board.clone();
                next.play(mv);
                let (score, _) = self.minimax(&next, depth - 1, false, alpha, beta);
                if self.aborted {
                    return (max_score, best_move);
                }

                if score > max_score {
                    max_score = score;
                    best_move = Some(mv);
                }
                if max_score > alpha {
                    alpha = max_score;
                }
                if max_score >= beta {
                    break; // Beta cutoff
                }
            }

            (max_score, best_move)
        } else {
            let mut min_score = SCORE_INF;

            for mv in moves {
                let mut next = board.clone();
                next.play(mv);
                let (score, _) = self.minimax(&next, depth - 1, true, alpha, beta);
                if self.aborted {
                    return (min_score, None);
                }

                if score < min_score {
                    min_score = score;
                }
                if min_score < beta {
                    beta = min_score;
                }
                if min_score <= alpha {
                    break; // Alpha cutoff
                }
            }

            (min_score, None)
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
