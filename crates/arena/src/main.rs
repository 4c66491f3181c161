//! Arena CLI
//!
//! Play matches between move-selection strategies and report the tallies.

use anyhow::{Context, Result};
use arena::{ArenaConfig, ArenaResults, MatchConfig, MatchRunner, Strategy};
use std::env;

const RESULTS_FILE: &str = "arena_results.json";

fn print_usage() {
    println!("Strategy Arena");
    println!();
    println!("Usage:");
    println!("  arena match <first> <second> [--games N] [--depth D]");
    println!("  arena gauntlet <challenger> [--games N] [--depth D]");
    println!("  arena run <config.toml>");
    println!("  arena list");
    println!();
    println!("Strategies:");
    for strategy in Strategy::ALL {
        println!("  {}", strategy);
    }
    println!();
    println!("Examples:");
    println!("  arena match alphabeta greedy --games 20 --depth 4");
    println!("  arena gauntlet alphabeta --games 10 --depth 3");
}

fn parse_strategy(spec: &str) -> Option<Strategy> {
    match spec.parse() {
        Ok(strategy) => Some(strategy),
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}

/// Parse trailing `--games N` / `--depth D` arguments.
fn parse_options(args: &[String], config: &mut MatchConfig) {
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.depth = args[i + 1].parse().unwrap_or(config.depth);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
}

fn save_results(results: &ArenaResults) {
    if let Err(e) = results.save(RESULTS_FILE.as_ref()) {
        eprintln!("Warning: Failed to save results: {}", e);
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two strategies");
        print_usage();
        return;
    }

    let (Some(first), Some(second)) = (parse_strategy(&args[0]), parse_strategy(&args[1])) else {
        return;
    };

    let mut config = MatchConfig::default();
    parse_options(&args[2..], &mut config);

    println!("=== Match: {} vs {} ===", first, second);
    println!("Games: {}, Depth: {}", config.num_games, config.depth);
    println!();

    let runner = MatchRunner::new(config);
    let result = runner.run_match(first, second);

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        first, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut results = ArenaResults::new(
        &format!("Match: {} vs {}", first, second),
        vec![first.to_string(), second.to_string()],
    );
    results.add_match(&first.to_string(), &second.to_string(), result);
    save_results(&results);
}

fn run_gauntlet(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger strategy");
        print_usage();
        return;
    }

    let Some(challenger) = parse_strategy(&args[0]) else {
        return;
    };

    let mut config = MatchConfig::default();
    parse_options(&args[1..], &mut config);

    let opponents: Vec<Strategy> = Strategy::ALL
        .into_iter()
        .filter(|&s| s != challenger)
        .collect();

    println!("=== Gauntlet: {} vs all ===", challenger);
    println!(
        "Games per match: {}, Depth: {}",
        config.num_games, config.depth
    );
    println!();

    let mut results = ArenaResults::new(
        &format!("Gauntlet: {}", challenger),
        std::iter::once(challenger.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
    );

    let runner = MatchRunner::new(config);
    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger, opponent);

        let result = runner.run_match(challenger, opponent);

        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        results.add_match(&challenger.to_string(), &opponent.to_string(), result);
    }

    println!();
    results.print_report();
    save_results(&results);
}

fn run_config(args: &[String]) -> Result<()> {
    let path = args.first().context("run requires a config file path")?;
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path))?;
    let config: ArenaConfig =
        toml::from_str(&contents).with_context(|| format!("failed to parse config {}", path))?;

    let participants: Vec<String> = config
        .pairings
        .iter()
        .flat_map(|p| [p.first.to_string(), p.second.to_string()])
        .collect();
    let mut results = ArenaResults::new(&format!("Run: {}", path), participants);

    let runner = MatchRunner::new(config.settings.clone());
    for pairing in &config.pairings {
        println!("\n--- {} vs {} ---", pairing.first, pairing.second);
        let result = runner.run_match(pairing.first, pairing.second);
        results.add_match(
            &pairing.first.to_string(),
            &pairing.second.to_string(),
            result,
        );
    }

    println!();
    results.print_report();
    save_results(&results);
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "run" => {
            if let Err(e) = run_config(&args[2..]) {
                eprintln!("Error: {:#}", e);
            }
        }
        "list" => {
            for strategy in Strategy::ALL {
                println!("{}", strategy);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
