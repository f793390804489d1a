//! Autopilot simulator CLI.
//!
//! Plays many headless games with a scripted pilot to check how the
//! physics and gap generation feel together.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                   # Default: 200 runs
//!   cargo run --bin simulate -- -n 50 -t 6000  # 50 short runs
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use anyhow::{Context, Result};
use flappy::simulator::{run_simulation, SimConfig};
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    let default_level = if config.verbosity >= 2 { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              FLAPPY AUTOPILOT SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!("  Flap Margin:    {}", config.flap_margin);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    if config.verbosity > 0 {
        println!("{}", report.to_text());
    }

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json)
            .with_context(|| format!("failed to write JSON report {}", filename))?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run = args[i + 1].parse().unwrap_or(36_000);
                    i += 1;
                }
            }
            "-m" | "--margin" => {
                if i + 1 < args.len() {
                    config.flap_margin = args[i + 1].parse().unwrap_or(20.0);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--quick" => {
                let seed = config.seed.unwrap_or(0);
                config = SimConfig::quick(seed);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Flappy Autopilot Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of games to play (default: 200)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --ticks <T>     Max ticks per game (default: 36,000)");
    println!("    -m, --margin <M>    Pilot flap margin in world units (default: 20)");
    println!("    -v, --verbose       Log every game");
    println!("    -q, --quiet         Skip the text report");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick check (20 seeded runs of 6,000 ticks)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                   # Default run");
    println!("    cargo run --bin simulate -- -n 50 -t 6000  # 50 short runs");
    println!("    cargo run --bin simulate -- --seed 42      # Reproducible");
    println!("    cargo run --bin simulate -- --quick        # Quick check");
}
