//! Strategy Arena
//!
//! Wires the individual selector crates behind one closed strategy set and
//! plays them against each other.

pub mod match_runner;
pub mod results;

pub use match_runner::{quick_match, ArenaConfig, MatchConfig, MatchRunner, Pairing};
pub use results::{ArenaResults, GameResult, MatchEntry, MatchResult};

use std::fmt;
use std::str::FromStr;

use cozy_chess::Board;
use engine_core::{SearchLimits, Selection, Selector};
use greedy_engine::GreedySelector;
use lookahead_engine::LookaheadSelector;
use minimax_engine::AlphaBetaSelector;
use mobility_engine::{MobilityMode, MobilitySelector};
use random_engine::RandomSelector;
use serde::{Deserialize, Serialize};

/// The closed set of move-selection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Random,
    Greedy,
    Mobility,
    MobilityAdvanced,
    Lookahead,
    AlphaBeta,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Random,
        Strategy::Greedy,
        Strategy::Mobility,
        Strategy::MobilityAdvanced,
        Strategy::Lookahead,
        Strategy::AlphaBeta,
    ];

    /// Build a fresh selector for this strategy.
    pub fn build(self) -> Box<dyn Selector> {
        match self {
            Strategy::Random => Box::new(RandomSelector::new()),
            Strategy::Greedy => Box::new(GreedySelector::new()),
            Strategy::Mobility => Box::new(MobilitySelector::new()),
            Strategy::MobilityAdvanced => {
                Box::new(MobilitySelector::with_mode(MobilityMode::Central))
            }
            Strategy::Lookahead => Box::new(LookaheadSelector::new()),
            Strategy::AlphaBeta => Box::new(AlphaBetaSelector::new()),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "greedy" => Ok(Strategy::Greedy),
            "mobility" => Ok(Strategy::Mobility),
            "mobility-advanced" | "mobility_advanced" => Ok(Strategy::MobilityAdvanced),
            "lookahead" => Ok(Strategy::Lookahead),
            "alphabeta" | "alpha-beta" | "minimax" => Ok(Strategy::AlphaBeta),
            _ => Err(format!("unknown strategy: {}", s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
            Strategy::Mobility => "mobility",
            Strategy::MobilityAdvanced => "mobility-advanced",
            Strategy::Lookahead => "lookahead",
            Strategy::AlphaBeta => "alpha-beta",
        };
        write!(f, "{}", name)
    }
}

/// Pick a move for the side to move in `board` with the given strategy.
pub fn select_move(board: &Board, strategy: Strategy, limits: &SearchLimits) -> Selection {
    strategy.build().search(board, limits).selection
}
