//! Score scale and shared terminal/leaf scoring.
//!
//! Every strategy routes its scoring through this module so that terminal
//! positions are valued identically everywhere.

use cozy_chess::{Board, Color, Move};

use crate::eval::Heuristic;
use crate::movegen::{is_checkmate, is_stalemate};

/// Score in centipawns.
pub type Score = i32;

/// Score of a won terminal position. Static evaluations stay strictly below
/// this in magnitude, so a forced mate outranks any material advantage.
pub const CHECKMATE: Score = 100_000;

/// Score of a drawn terminal position, independent of perspective.
pub const STALEMATE: Score = 0;

/// Sentinel strictly outside the score range. Seeds alpha/beta bounds and
/// running best scores, so that even `-CHECKMATE` can replace the seed.
pub const SCORE_INF: Score = 1_000_000;

/// Scores a terminal position for `perspective`, or `None` if play continues.
///
/// Checkmate of the perspective side scores `-CHECKMATE`, checkmate of the
/// opponent `CHECKMATE`. Stalemate scores `STALEMATE` for both sides.
pub fn terminal_score(board: &Board, perspective: Color) -> Option<Score> {
    if is_checkmate(board) {
        if board.side_to_move() == perspective {
            Some(-CHECKMATE)
        } else {
            Some(CHECKMATE)
        }
    } else if is_stalemate(board) {
        Some(STALEMATE)
    } else {
        None
    }
}

/// Turn multiplier: +1 when the side to move is the perspective side.
#[inline]
pub fn turn_multiplier(board: &Board, perspective: Color) -> Score {
    if board.side_to_move() == perspective {
        1
    } else {
        -1
    }
}

/// Scores the position reached by playing `mv` on `board`.
///
/// The multiplier is taken from the side to move before `mv` is applied.
/// Terminal positions use [`terminal_score`]; everything else is the static
/// heuristic scaled by the multiplier. `board` itself is left untouched.
pub fn evaluate_move(board: &Board, mv: Move, perspective: Color, eval: &dyn Heuristic) -> Score {
    let multiplier = turn_multiplier(board, perspective);
    let mut next = board.clone();
    next.play(mv);
    match terminal_score(&next, perspective) {
        Some(score) => score,
        None => multiplier * eval.score(&next, perspective),
    }
}

/// Scores the current position as a search leaf.
///
/// The move that produced this position belongs to the parent frame, so
/// checkmate and stalemate are detected on the position itself before
/// falling back to the static heuristic.
pub fn leaf_score(board: &Board, perspective: Color, eval: &dyn Heuristic) -> Score {
    match terminal_score(board, perspective) {
        Some(score) => score,
        None => eval.score(board, perspective),
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;
