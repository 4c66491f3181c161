//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of a single game from the first player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
    /// The game was cut short by a cancellation request
    Aborted,
}

/// Aggregate result of a match from the first strategy's side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// True if the match stopped early on a cancellation request
    pub aborted: bool,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Match score in [0, 1]: wins plus half a point per draw.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total as f64
    }
}

/// A single match entry in an arena run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub white: String,
    pub black: String,
    pub result: MatchResult,
}

/// Complete results of an arena run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaResults {
    /// Name/description of the run
    pub name: String,
    /// Participating strategies
    pub participants: Vec<String>,
    /// All match results
    pub matches: Vec<MatchEntry>,
}

impl ArenaResults {
    pub fn new(name: &str, participants: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, white: &str, black: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            white: white.to_string(),
            black: black.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Arena: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n\n", self.participants.join(", ")));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
            "Strategy 1", "Strategy 2", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}{}\n",
                entry.white,
                entry.black,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws,
                if entry.result.aborted { " (aborted)" } else { "" }
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
