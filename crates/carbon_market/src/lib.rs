//! Command-line front end for `carbon_market_core`
//!
//! Loads a parameter file (or the built-in baseline), applies target
//! overrides, runs one command and renders the result. Logging goes to stderr
//! or a log file so stdout carries only the report.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod params;

pub use cli::{Cli, Command};
pub use commands::run;
pub use logging::init_logging;
