use carbon_market::{Cli, init_logging, run};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_file.as_deref())?;

    tracing::debug!(command = ?cli.command, "Starting");
    let output = run(&cli)?;
    println!("{output}");

    Ok(())
}
