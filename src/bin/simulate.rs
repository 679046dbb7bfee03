//! Balance simulator CLI.
//!
//! Runs Monte Carlo progression simulations and prints an aggregate report.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 100 runs to stage 100
//!   cargo run --bin simulate -- -n 50 --stage 25  # 50 runs to stage 25
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use gatefall::build_info;
use gatefall::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-V" || a == "--version") {
        println!(
            "gatefall simulate {} ({})",
            build_info::BUILD_DATE,
            build_info::BUILD_COMMIT
        );
        return;
    }

    let (config, show_level_curve) = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              GATEFALL BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Target Stage:   {}", config.target_stage);
    println!("  Spend Drops:    {}", config.spend_currencies);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    if (config.tick_seconds - 1.0).abs() > f64::EPSILON {
        println!("  Tick Length:    {}s", config.tick_seconds);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Show detailed level curve if requested
    if show_level_curve {
        println!("{}", report.level_curve_text());
    }

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut show_level_curve = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "--stage" => {
                if i + 1 < args.len() {
                    config.target_stage = args[i + 1].parse().unwrap_or(100);
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
                    config.max_ticks_per_run = args[i + 1].parse().unwrap_or(86_400);
                    i += 1;
                }
            }
            "--dt" => {
                if i + 1 < args.len() {
                    config.tick_seconds = args[i + 1].parse().unwrap_or(1.0);
                    i += 1;
                }
            }
            "--no-spend" => {
                config.spend_currencies = false;
            }
            "--level-curve" => {
                show_level_curve = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::stage_pacing_test(50);
            }
            "--economy" => {
                config = SimConfig::economy_analysis(50);
            }
            _ => {}
        }
        i += 1;
    }

    (config, show_level_curve)
}

fn print_help() {
    println!("Gatefall Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 100)");
    println!("    --stage <S>         Target stage to reach (default: 100)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --ticks <T>     Max ticks per run (default: 86,400)");
    println!("    --dt <SECS>         Simulated seconds per tick (default: 1.0)");
    println!("    --no-spend          Hoard gacha drops instead of spending them");
    println!("    --level-curve       Show detailed level-up pacing");
    println!("    -v, --verbose       Verbose output");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick pacing check (20 runs to stage 50)");
    println!("    --economy           Week-long economy run (50 runs)");
    println!("    -V, --version       Show build version");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                      # Default run");
    println!("    cargo run --bin simulate -- -n 50 --stage 25  # 50 runs to stage 25");
    println!("    cargo run --bin simulate -- --seed 42         # Reproducible");
    println!("    cargo run --bin simulate -- --quick           # Quick pacing check");
    println!("    cargo run --bin simulate -- --economy --json  # Economy run, JSON out");
}
