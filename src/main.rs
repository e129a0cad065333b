//! CLI entry point for Dice Map Sim

use clap::{Parser, ValueEnum};
use dice_map_sim_lib::{
    config::SimulationConfig,
    export::{distribution_csv, raw_csv},
    simulation::{run_and_aggregate, run_and_aggregate_seeded, SimulationOutcome},
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "dice-map-sim")]
#[command(version = "1.0")]
#[command(about = "Monte-Carlo simulator for dice-driven coverage of a circular block map", long_about = None)]
struct Args {
    /// Path to a simulation configuration file (YAML or JSON); overrides the
    /// individual parameter flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of dice rolled per step
    #[arg(short, long, default_value = "1")]
    dice: u32,

    /// Faces per die
    #[arg(short, long, default_value = "6")]
    faces: u32,

    /// Number of blocks on the map
    #[arg(short, long, default_value = "10")]
    blocks: u32,

    /// Number of trials to run
    #[arg(short, long, default_value = "10000")]
    trials: u32,

    /// Seed for a reproducible (sequential) run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Use parallel processing
    #[arg(short, long, default_value = "false")]
    parallel: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Show timing information
    #[arg(long, default_value = "false")]
    timing: bool,

    /// Write the raw steps table to this CSV file
    #[arg(long)]
    raw_out: Option<PathBuf>,

    /// Write the distribution table to this CSV file
    #[arg(long)]
    dist_out: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match SimulationConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        },
        None => SimulationConfig {
            dice_count: args.dice,
            faces_per_die: args.faces,
            block_count: args.blocks,
            trial_count: args.trials,
            ..Default::default()
        },
    };

    let start = Instant::now();
    let outcome = match args.seed {
        Some(seed) => run_and_aggregate_seeded(&config, seed),
        None => run_and_aggregate(&config, args.parallel),
    };
    let elapsed = start.elapsed();

    let outcome = match outcome {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(path) = &args.raw_out {
        if let Err(e) = std::fs::write(path, raw_csv(&outcome.raw)) {
            eprintln!("Error writing raw CSV: {}", e);
            std::process::exit(1);
        }
    }
    if let Some(path) = &args.dist_out {
        if let Err(e) = std::fs::write(path, distribution_csv(&outcome.distribution)) {
            eprintln!("Error writing distribution CSV: {}", e);
            std::process::exit(1);
        }
    }

    match args.output {
        OutputFormat::Text => print_text(&config, &outcome, args.timing, elapsed),
        OutputFormat::Json => print_json(&config, &outcome, elapsed),
    }
}

fn print_text(
    config: &SimulationConfig,
    outcome: &SimulationOutcome,
    timing: bool,
    elapsed: std::time::Duration,
) {
    let summary = &outcome.distribution.summary;

    println!("=== Dice Map Simulation Results ===");
    println!(
        "Map: {} blocks, {}d{} per step",
        config.block_count, config.dice_count, config.faces_per_die
    );
    println!("Trials: {}", summary.trials);
    println!();
    println!("Average Steps: {:.2} ± {:.2}", summary.mean, summary.std_dev);
    println!("Step Range: {} - {}", summary.min, summary.max);
    println!();
    println!("--- Completion Probability by Steps ---");
    println!("{:>8} {:>12} {:>12}", "steps", "probability", "cumulative");
    for entry in &outcome.distribution.entries {
        println!(
            "{:>8} {:>12.5} {:>12.5}",
            entry.steps, entry.probability, entry.cumulative
        );
    }

    if timing {
        println!();
        println!("--- Performance ---");
        println!("Total time: {:.3}s", elapsed.as_secs_f64());
        println!(
            "Per trial: {:.3}ms",
            elapsed.as_secs_f64() * 1000.0 / summary.trials as f64
        );
        println!(
            "Trials/sec: {:.0}",
            summary.trials as f64 / elapsed.as_secs_f64()
        );
    }
}

fn print_json(config: &SimulationConfig, outcome: &SimulationOutcome, elapsed: std::time::Duration) {
    let summary = &outcome.distribution.summary;
    let output = serde_json::json!({
        "config": config,
        "elapsed_seconds": elapsed.as_secs_f64(),
        "summary": {
            "trials": summary.trials,
            "mean_steps": summary.mean,
            "std_steps": summary.std_dev,
            "min_steps": summary.min,
            "max_steps": summary.max,
        },
        "distribution": outcome.distribution.entries,
    });
    match serde_json::to_string_pretty(&output) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}
