use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging.
///
/// Logs go to stderr, or are appended to `log_file` when one is given, so that
/// stdout carries nothing but the JSON result. The level can be controlled via
/// the `level` parameter or the `RUST_LOG` environment variable.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> color_eyre::Result<()> {
    let default_filter = format!("carbon_market={level},carbon_market_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()?;
            tracing::info!(log_path = %path.display(), "Logging initialized");
        }
        None => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .try_init()?;
        }
    }

    Ok(())
}
