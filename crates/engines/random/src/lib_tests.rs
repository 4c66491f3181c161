use super::*;

#[test]
fn random_selector_returns_legal_move() {
    let mut selector = RandomSelector::new();
    let board = Board::default();
    let limits = SearchLimits::depth(1);

    let result = selector.search(&board, &limits);

    let mv = result.selection.best().unwrap();
    assert!(legal_moves(&board).contains(&mv));
}

#[test]
fn random_selector_handles_checkmate() {
    let mut selector = RandomSelector::new();
    let board = Board::from_fen(
        "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1",
        false,
    )
    .unwrap();
    let limits = SearchLimits::depth(1);

    let result = selector.search(&board, &limits);

    assert_eq!(result.selection, Selection::NoMove);
}

#[test]
fn random_selector_handles_stalemate() {
    let mut selector = RandomSelector::new();
    let board = Board::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1", false).unwrap();
    let limits = SearchLimits::depth(1);

    let result = selector.search(&board, &limits);

    assert_eq!(result.selection, Selection::NoMove);
}
