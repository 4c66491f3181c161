//! Match runner for playing games between strategies

use cozy_chess::{Board, Color};
use engine_core::{is_checkmate, CancelToken, SearchLimits, Selection, Selector};
use serde::{Deserialize, Serialize};

use crate::results::{GameResult, MatchResult};
use crate::Strategy;

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for the selectors
    pub depth: u8,
    /// Maximum moves per game before declaring draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// A full arena run loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub settings: MatchConfig,
    pub pairings: Vec<Pairing>,
}

/// One head-to-head pairing in an arena run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pairing {
    pub first: Strategy,
    pub second: Strategy,
}

/// Runs matches between two strategies
pub struct MatchRunner {
    config: MatchConfig,
    cancel: CancelToken,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self::with_cancel(config, CancelToken::new())
    }

    /// A runner whose games can be aborted externally through `cancel`.
    pub fn with_cancel(config: MatchConfig, cancel: CancelToken) -> Self {
        Self { config, cancel }
    }

    /// Run a match between two strategies.
    ///
    /// Returns the result from the first strategy's side.
    pub fn run_match(&self, first: Strategy, second: Strategy) -> MatchResult {
        let mut selector1 = first.build();
        let mut selector2 = second.build();
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let first_is_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if first_is_white {
                self.play_game(selector1.as_mut(), selector2.as_mut())
            } else {
                // Flip result since the first strategy is black
                match self.play_game(selector2.as_mut(), selector1.as_mut()) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    other => other,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
                GameResult::Aborted => {
                    result.aborted = true;
                    break;
                }
            }

            if self.config.verbose {
                let color = if first_is_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    _ => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns the result from white's side
    fn play_game(&self, white: &mut dyn Selector, black: &mut dyn Selector) -> GameResult {
        let mut board = Board::default();
        white.new_game();
        black.new_game();

        for _move_num in 0..self.config.max_moves {
            let limits = SearchLimits::with_cancel(self.config.depth, self.cancel.clone());

            let result = if board.side_to_move() == Color::White {
                white.search(&board, &limits)
            } else {
                black.search(&board, &limits)
            };

            match result.selection {
                Selection::Best(mv) => board.play(mv),
                Selection::Cancelled => return GameResult::Aborted,
                Selection::NoMove => {
                    return if is_checkmate(&board) {
                        // Current side is mated
                        if board.side_to_move() == Color::White {
                            GameResult::Loss
                        } else {
                            GameResult::Win
                        }
                    } else {
                        GameResult::Draw // Stalemate
                    };
                }
            }

            // 50-move rule
            if board.halfmove_clock() >= 100 {
                return GameResult::Draw;
            }
        }

        // Max moves reached
        GameResult::Draw
    }
}

/// Quick utility to run a single match
pub fn quick_match(first: Strategy, second: Strategy, num_games: u32, depth: u8) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(first, second)
}
