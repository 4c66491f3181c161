use super::*;

#[test]
fn lookahead_returns_legal_move_from_startpos() {
    let mut selector = LookaheadSelector::new();
    let board = Board::default();

    let result = selector.search(&board, &SearchLimits::depth(2));

    let mv = result.selection.best().unwrap();
    assert!(legal_moves(&board).contains(&mv));
}

#[test]
fn lookahead_handles_no_legal_moves() {
    let mut selector = LookaheadSelector::new();
    let board = Board::from_fen(
        "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1",
        false,
    )
    .unwrap();

    let result = selector.search(&board, &SearchLimits::depth(2));

    assert_eq!(result.selection, Selection::NoMove);
}

#[test]
fn lookahead_picks_the_mating_move() {
    let mut selector = LookaheadSelector::new();
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1", false).unwrap();

    let result = selector.search(&board, &SearchLimits::depth(2));

    // A mated opponent has no replies, so the cost stays at the seed.
    assert_eq!(result.selection.best().unwrap(), "e1e8".parse().unwrap());
    assert_eq!(result.score, -CHECKMATE);
}

#[test]
fn lookahead_does_not_hang_the_queen() {
    let mut selector = LookaheadSelector::new();
    // Qd5 walks into c6xd5; every other queen or king move leaves black's
    // best reply at -800 from black's point of view.
    let board = Board::from_fen("k7/8/2p5/8/8/8/8/K2Q4 w - - 0 1", false).unwrap();

    let result = selector.search(&board, &SearchLimits::depth(2));

    assert_ne!(result.selection.best().unwrap(), "d1d5".parse().unwrap());
    assert_eq!(result.score, -800);
}

#[test]
fn lookahead_returns_the_forced_move() {
    let mut selector = LookaheadSelector::new();
    let board = Board::from_fen("6k1/8/8/8/8/8/5PP1/4r1K1 w - - 0 1", false).unwrap();

    let result = selector.search(&board, &SearchLimits::depth(2));

    assert_eq!(result.selection.best().unwrap(), "g1h2".parse().unwrap());
}
