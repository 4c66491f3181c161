pub mod cancel;
pub mod eval;
pub mod movegen;
pub mod score;

// Re-export the shared plumbing (not strategy-specific)
pub use cancel::*;
pub use eval::*;
pub use movegen::*;
pub use score::*;

use cozy_chess::{Board, Move};

// =============================================================================
// Selector trait — implemented by all move-selection strategies
// =============================================================================

/// Outcome of a selector run.
///
/// "No legal moves" and "search was cancelled" are distinct results; callers
/// that need to react to an abort must never see it folded into `NoMove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The move judged best by the strategy
    Best(Move),
    /// The position has no legal moves (checkmate or stalemate)
    NoMove,
    /// The search observed a cancellation request and unwound early
    Cancelled,
}

impl Selection {
    /// The chosen move, if one was produced.
    pub fn best(self) -> Option<Move> {
        match self {
            Selection::Best(mv) => Some(mv),
            _ => None,
        }
    }

    pub fn is_cancelled(self) -> bool {
        matches!(self, Selection::Cancelled)
    }
}

/// Result of a selector run
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The selected move, or why there is none
    pub selection: Selection,
    /// Score of the chosen line from the mover's point of view
    pub score: Score,
    /// Search depth used, in plies
    pub depth: u8,
    /// Number of nodes visited (for stats)
    pub nodes: u64,
}

/// Trait that all move selectors implement.
///
/// This allows swapping between the simple strategies (random, greedy,
/// mobility, one-ply lookahead) and the primary alpha-beta search, and
/// playing any pair of them against each other.
pub trait Selector: Send {
    /// Pick a move for the side to move in `board`.
    ///
    /// Must return `Selection::NoMove` when the position has no legal moves,
    /// and must never return a move that is illegal in `board`. The board is
    /// borrowed immutably; exploration happens on clones.
    fn search(&mut self, board: &Board, limits: &SearchLimits) -> SearchResult;

    /// Returns the selector's name for reporting
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
