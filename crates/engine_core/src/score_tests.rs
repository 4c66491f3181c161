use super::*;
use crate::eval::MaterialEval;
use cozy_chess::{Board, Color};

const MATE_FEN: &str = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1";
const STALEMATE_FEN: &str = "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1";
const MATE_IN_ONE_FEN: &str = "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1";

#[test]
fn checkmate_is_scored_from_the_perspective() {
    // Black is mated: a win for white, a loss for black.
    let board = Board::from_fen(MATE_FEN, false).unwrap();
    assert_eq!(terminal_score(&board, Color::White), Some(CHECKMATE));
    assert_eq!(terminal_score(&board, Color::Black), Some(-CHECKMATE));
}

#[test]
fn stalemate_is_scored_for_both_sides_alike() {
    let board = Board::from_fen(STALEMATE_FEN, false).unwrap();
    assert_eq!(terminal_score(&board, Color::White), Some(STALEMATE));
    assert_eq!(terminal_score(&board, Color::Black), Some(STALEMATE));
}

#[test]
fn ongoing_positions_have_no_terminal_score() {
    assert_eq!(terminal_score(&Board::default(), Color::White), None);
}

#[test]
fn score_bounds_are_ordered() {
    assert!(STALEMATE.abs() < CHECKMATE);
    assert!(CHECKMATE < SCORE_INF);
}

#[test]
fn mating_move_scores_checkmate_for_the_mover() {
    let board = Board::from_fen(MATE_IN_ONE_FEN, false).unwrap();
    let mv = "e1e8".parse().unwrap();
    assert_eq!(evaluate_move(&board, mv, Color::White, &MaterialEval), CHECKMATE);
    assert_eq!(evaluate_move(&board, mv, Color::Black, &MaterialEval), -CHECKMATE);
}

#[test]
fn stalemating_move_scores_stalemate_regardless_of_perspective() {
    let board = Board::from_fen("k7/8/8/8/8/8/1Q6/K7 w - - 0 1", false).unwrap();
    let mv = "b2b6".parse().unwrap();
    assert_eq!(evaluate_move(&board, mv, Color::White, &MaterialEval), STALEMATE);
    assert_eq!(evaluate_move(&board, mv, Color::Black, &MaterialEval), STALEMATE);
}

#[test]
fn capture_gains_material() {
    let board = Board::from_fen("k7/8/8/3p4/4P3/8/8/K7 w - - 0 1", false).unwrap();
    let mv = "e4d5".parse().unwrap();
    assert_eq!(evaluate_move(&board, mv, Color::White, &MaterialEval), 100);
}

#[test]
fn leaf_score_detects_terminal_positions() {
    let mate = Board::from_fen(MATE_FEN, false).unwrap();
    assert_eq!(leaf_score(&mate, Color::White, &MaterialEval), CHECKMATE);
    assert_eq!(leaf_score(&mate, Color::Black, &MaterialEval), -CHECKMATE);

    let stalemate = Board::from_fen(STALEMATE_FEN, false).unwrap();
    assert_eq!(leaf_score(&stalemate, Color::White, &MaterialEval), STALEMATE);
}

#[test]
fn leaf_score_falls_back_to_the_heuristic() {
    assert_eq!(leaf_score(&Board::default(), Color::White, &MaterialEval), 0);
}
