//! Mobility-Based Selectors
//!
//! Scores a move by how many legal moves the resulting position allows.
//! The `Central` mode additionally rewards moves that land near the middle
//! of the board. Terminal positions are scored by the shared rule, so a
//! mate is still a mate no matter how cramped the board gets.

use cozy_chess::{Board, Color, Move};
use engine_core::{
    legal_moves, mobility, random_legal_move, terminal_score, Score, SearchLimits, SearchResult,
    Selection, Selector, CHECKMATE,
};


/// Which mobility flavor to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobilityMode {
    /// Raw legal-move count of the resulting position
    Count,
    /// Move count plus a bonus for central destination squares
    Central,
}

/// Selector that maximizes mobility one ply ahead.
#[derive(Debug, Clone)]
pub struct MobilitySelector {
    mode: MobilityMode,
    nodes: u64,
}

impl MobilitySelector {
    pub fn new() -> Self {
        Self::with_mode(MobilityMode::Count)
    }

    pub fn with_mode(mode: MobilityMode) -> Self {
        Self { mode, nodes: 0 }
    }

    fn move_score(&self, after: &Board, mv: Move, perspective: Color) -> Score {
        if let Some(score) = terminal_score(after, perspective) {
            return score;
        }
        match self.mode {
            MobilityMode::Count => mobility(after),
            MobilityMode::Central => mobility(after) + central_bonus(mv),
        }
    }
}

impl Default for MobilitySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for MobilitySelector {
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
            let mut after = board.clone();
            after.play(mv);
            let score = self.move_score(&after, mv, perspective);
            self.nodes += 1;
            if score > max_score {
                max_score = score;
                best = Some(mv);
            }
        }

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
        match self.mode {
            MobilityMode::Count => "Mobility v1.0",
            MobilityMode::Central => "Mobility-Central v1.0",
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Bonus for destinations near the middle of the board.
///
/// Coordinates are doubled so the center distance stays integral: the four
/// center squares score 6, the corners 0.
fn central_bonus(mv: Move) -> Score {
    let file = mv.to.file() as i32;
    let rank = mv.to.rank() as i32;
    let df = (2 * file - 7).abs();
    let dr = (2 * rank - 7).abs();
    (14 - (df + dr)) / 2
}
