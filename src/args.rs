use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::constants::DEFAULT_DATA_PATH;

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "F1 ELO",
    about = "Driver and constructor ratings from Formula 1 race results",
    long_about = "Rates Formula 1 drivers and constructors from pre-processed race results \
    and simulates placing a driver at a different constructor"
)]
pub struct Args {
    /// Pre-processed race results, one row per driver per race
    #[arg(
        short,
        long,
        env = "F1_ELO_DATA_PATH",
        default_value = DEFAULT_DATA_PATH,
        help = "Path to the race results CSV"
    )]
    pub data_path: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Command {
    /// Print the leaderboard after loading
    Ratings {
        /// Only print the top N entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Rank constructors instead of drivers
        #[arg(short, long, action = clap::ArgAction::SetTrue)]
        constructors: bool
    },
    /// Place a driver at a constructor and print how the driver's rating moves
    WhatIf {
        #[arg(short, long)]
        driver: String,

        #[arg(short, long)]
        constructor: String,

        /// Further simulations to run afterwards, in order
        #[arg(value_parser = parse_pair, value_name = "DRIVER=CONSTRUCTOR")]
        more: Vec<(String, String)>
    },
    /// Write the graph elements as JSON for the graph view
    Export {
        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Simulations to apply before exporting, in order
        #[arg(short = 'w', long = "what-if", value_parser = parse_pair, value_name = "DRIVER=CONSTRUCTOR")]
        what_if: Vec<(String, String)>
    }
}

/// Parses `DRIVER=CONSTRUCTOR`. Names may contain spaces but not `=`.
pub fn parse_pair(value: &str) -> Result<(String, String), String> {
    let (driver, constructor) = value
        .split_once('=')
        .ok_or_else(|| format!("expected DRIVER=CONSTRUCTOR, got '{}'", value))?;

    let driver = driver.trim();
    let constructor = constructor.trim();

    if driver.is_empty() || constructor.is_empty() || constructor.contains('=') {
        return Err(format!("expected DRIVER=CONSTRUCTOR, got '{}'", value));
    }

    Ok((driver.to_string(), constructor.to_string()))
}
