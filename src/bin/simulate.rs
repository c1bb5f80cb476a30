//! Balance simulator CLI.
//!
//! Runs Monte Carlo encounter simulations and prints a summary.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 1000 random-pack runs
//!   cargo run --bin simulate -- -n 100 --seed 42 # reproducible small batch
//!   cargo run --bin simulate -- --fixed-pack     # the Goblin/Brute/Raider trio

use oathbound::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("Oathbound balance simulator");
    println!();
    println!("Configuration:");
    println!("  Runs:        {}", config.num_runs);
    println!("  Round cap:   {}", config.max_rounds_per_run);
    println!("  Packs:       {}", if config.randomize_packs { "random 3-5" } else { "fixed trio" });
    println!("  Auto-equip:  {}", if config.auto_equip { "on" } else { "off" });
    if let Some(seed) = config.seed {
        println!("  Seed:        {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--rounds" => {
                if i + 1 < args.len() {
                    config.max_rounds_per_run = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "--fixed-pack" => config.randomize_packs = false,
            "--no-auto-equip" => config.auto_equip = false,
            "--json" => {}
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --runs <N>     Number of encounters (default 1000)");
    println!("      --seed <N>     RNG seed for reproducible runs");
    println!("      --rounds <N>   Round cap per encounter (default 1000)");
    println!("      --fixed-pack   Fight the fixed Goblin/Brute/Raider trio");
    println!("      --no-auto-equip  Keep the starter weapon equipped");
    println!("      --json         Also write a timestamped JSON report");
    println!("  -h, --help         Show this help");
}
