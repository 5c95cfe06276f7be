// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `mindiff`: minimize the difference between a target and one-per-row sums.
//!
//! Reads a matrix (one row per line, values separated by whitespace or commas)
//! from a file or stdin and prints the minimum difference.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use minimize_difference::{Matrix, Minimizer, SearchConfig, Strategy};

#[derive(Parser, Debug)]
#[command(name = "mindiff")]
#[command(about = "Choose one element per matrix row to land as close as possible to a target")]
struct Args {
    /// Matrix file; reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Target sum.
    #[arg(short, long, allow_hyphen_values = true)]
    target: i32,

    /// backtrack, parallel or reachable-sums.
    #[arg(short, long, default_value = "backtrack")]
    strategy: Strategy,

    /// Disable bound-based pruning.
    #[arg(long)]
    no_prune: bool,

    /// Keep searching after an exact match.
    #[arg(long)]
    exhaustive: bool,

    /// Also print the chosen element of each row.
    #[arg(short, long)]
    witness: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("cannot read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let text = read_input(args.input.as_ref())?;
    let matrix: Matrix = text.parse().context("invalid matrix")?;
    info!(
        rows = matrix.nrows(),
        columns = matrix.ncols(),
        combinations = matrix.combinations(),
        "matrix loaded"
    );

    let config = SearchConfig::default()
        .with_strategy(args.strategy)
        .with_pruning(!args.no_prune)
        .with_stop_on_exact(!args.exhaustive);
    let minimizer = Minimizer::new(&matrix).with_config(config);

    let (solution, statistics) = minimizer.solve_with_statistics(args.target);
    info!(%statistics, "search statistics");

    println!("{}", solution.difference);
    if args.witness {
        let values: Vec<String> = solution.values.iter().map(i32::to_string).collect();
        println!("{} = {}", values.join(" + "), solution.sum());
    }

    Ok(())
}
