//! Tracing setup for the TipCalc binary.

use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Arc,
};

use anyhow::{Context as _, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the tracing subscriber. Call once at startup.
///
/// * Honours `RUST_LOG` when set; otherwise uses `default_filter`.
/// * Stdout is ANSI-colored only when attached to a terminal, and carries
///   no timestamps or target names to keep interactive output clean.
/// * When `log_file` is given, records are also appended there without
///   ANSI escapes and with timestamps.
pub fn init(
    default_filter: &str,
    log_file: Option<&Path>,
) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter '{default_filter}'"))?;

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_ansi(io::stdout().is_terminal())
        .without_time()
        .with_target(false);

    let file_layer = log_file
        .map(|path| -> Result<_> {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;

            Ok(tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file)))
        })
        .transpose()?;

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(())
}
