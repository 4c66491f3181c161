//! Legal-move helpers over the `cozy-chess` rules engine.

use cozy_chess::{Board, Move};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Collects all legal moves of the position.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    board.generate_moves(|mvs| {
        moves.extend(mvs);
        false
    });
    moves
}

/// Returns true if the side to move has at least one legal move.
pub fn has_legal_moves(board: &Board) -> bool {
    let mut any = false;
    board.generate_moves(|_| {
        any = true;
        true
    });
    any
}

/// Number of legal moves available to the side to move.
pub fn mobility(board: &Board) -> i32 {
    let mut count = 0i32;
    board.generate_moves(|mvs| {
        count += mvs.len() as i32;
        false
    });
    count
}

/// Returns true if the side to move is checkmated.
pub fn is_checkmate(board: &Board) -> bool {
    !has_legal_moves(board) && !board.checkers().is_empty()
}

/// Returns true if the side to move is stalemated.
pub fn is_stalemate(board: &Board) -> bool {
    !has_legal_moves(board) && board.checkers().is_empty()
}

/// Returns true if `mv` lands on an occupied square.
///
/// Move ordering keys on the destination square only; en passant lands on an
/// empty square and is not counted.
#[inline]
pub fn is_capture(board: &Board, mv: Move) -> bool {
    board.occupied().has(mv.to)
}

/// Picks a uniformly random legal move, or `None` if there is none.
pub fn random_legal_move(board: &Board) -> Option<Move> {
    legal_moves(board).choose(&mut thread_rng()).copied()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
