use std::path::PathBuf;

use carbon_market_core::model::SectorId;
use carbon_market_core::solver::SearchBounds;
use clap::{Parser, Subcommand};

use crate::params::{parse_price, parse_target_override};

#[derive(Parser, Debug)]
#[command(name = "carbon-market")]
#[command(about = "Cap-and-trade carbon market simulator")]
pub struct Cli {
    /// YAML parameter file (default: built-in baseline)
    #[arg(short, long, global = true)]
    pub params: Option<PathBuf>,

    /// Override a sector's target intensity, e.g. --target Steel=2.1
    #[arg(short, long = "target", value_name = "SECTOR=VALUE", global = true, value_parser = parse_target_override)]
    pub targets: Vec<(SectorId, f64)>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Evaluate the market at a fixed carbon price
    Simulate {
        #[arg(long, allow_negative_numbers = true, value_parser = parse_price)]
        price: f64,
    },
    /// Search for the market-clearing carbon price
    Equilibrium {
        #[arg(long, default_value_t = SearchBounds::DEFAULT_MIN, allow_negative_numbers = true, value_parser = parse_price)]
        min: f64,
        #[arg(long, default_value_t = SearchBounds::DEFAULT_MAX, allow_negative_numbers = true, value_parser = parse_price)]
        max: f64,
        /// Include every evaluated price point
        #[arg(long)]
        track: bool,
    },
    /// Evaluate an evenly spaced price grid
    Sweep {
        #[arg(long, default_value_t = SearchBounds::DEFAULT_MIN, allow_negative_numbers = true, value_parser = parse_price)]
        min: f64,
        #[arg(long, default_value_t = SearchBounds::DEFAULT_MAX, allow_negative_numbers = true, value_parser = parse_price)]
        max: f64,
        #[arg(long, default_value_t = 21)]
        steps: usize,
    },
    /// Evaluate the output/intensity strategy quadrants per sector
    Strategy {
        #[arg(long, allow_negative_numbers = true, value_parser = parse_price)]
        price: f64,
    },
    /// Run one scenario per price and compare them
    Compare {
        #[arg(long = "price", required = true, num_args = 1.., allow_negative_numbers = true, value_parser = parse_price)]
        prices: Vec<f64>,
    },
    /// Print the effective parameter tables as YAML
    Defaults,
}
