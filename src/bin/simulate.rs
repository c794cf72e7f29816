//! Skill-check balance simulator CLI.
//!
//! Plays seeded attempts with a scripted angler and reports outcomes per
//! difficulty.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 200 tracker runs per difficulty
//!   cargo run --bin simulate -- -n 50 -s idle         # 50 idle runs per difficulty
//!   cargo run --bin simulate -- -d master --seed 42   # Reproducible Master run
//!   cargo run --bin simulate -- --json                # Print JSON instead of text

use angler::fishing::FishingDifficulty;
use angler::simulator::{run_simulation, AnglerStrategy, SimConfig};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    let reports = match run_simulation(&config) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            process::exit(1);
        }
    };

    if json {
        for report in &reports {
            match report.to_json() {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Could not encode report: {}", e);
                    process::exit(1);
                }
            }
        }
        return;
    }

    if config.prints_banner() {
        print_banner(&config);
    }

    for report in &reports {
        println!("{}", report.to_text());
    }
}

fn print_banner(config: &SimConfig) {
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              ANGLER SKILL-CHECK SIMULATOR                     ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {} per difficulty", config.num_runs);
    println!("  Angler:         {}", config.strategy.name());
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(config.num_runs);
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--max-ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run =
                        args[i + 1].parse().unwrap_or(config.max_ticks_per_run);
                    i += 1;
                }
            }
            "-d" | "--difficulty" => {
                if i + 1 < args.len() {
                    match FishingDifficulty::from_name(&args[i + 1]) {
                        Some(d) => config.difficulties = vec![d],
                        None => {
                            eprintln!("Unknown difficulty: {}", args[i + 1]);
                            process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "-s" | "--strategy" => {
                if i + 1 < args.len() {
                    match AnglerStrategy::from_name(&args[i + 1]) {
                        Some(s) => config.strategy = s,
                        None => {
                            eprintln!("Unknown strategy: {} (idle, hold, tracker)", args[i + 1]);
                            process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "-v" | "--verbose" => config.verbosity = 2,
            "-q" | "--quiet" => config.verbosity = 0,
            "--json" => json = true,
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'simulate --help' for usage.");
                process::exit(1);
            }
        }
        i += 1;
    }

    (config, json)
}

fn print_help() {
    println!("Angler Skill-Check Simulator\n");
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --runs <N>          Attempts per difficulty (default 200)");
    println!("  -d, --difficulty <D>    Only simulate one difficulty (novice..master)");
    println!("  -s, --strategy <S>      Angler: idle, hold, tracker (default tracker)");
    println!("  -t, --max-ticks <N>     Abort an attempt after N ticks");
    println!("      --seed <N>          Seed for reproducible runs");
    println!("      --json              Print JSON reports");
    println!("  -v, --verbose           Print every run");
    println!("  -q, --quiet             Reports only, no banner");
    println!("  -h, --help              Show this help message");
}
