//! Tracing subscriber setup for the CLI

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` with
/// `verbose` and `warn` without. Logs never go to stdout, which carries
/// `--json` output.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
