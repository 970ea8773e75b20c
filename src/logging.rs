//! Tracing subscriber setup for the command-line runner

use tracing_subscriber::{prelude::*, EnvFilter};

use algaesim_core::{AlgaeError, AlgaeResult};

/// Filter applied when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over the `verbose` default. Stdout stays free
/// for the JSON report.
pub fn init_logging(verbose: bool) -> AlgaeResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| AlgaeError::Config(format!("Failed to set up tracing subscriber: {}", e)))
}
