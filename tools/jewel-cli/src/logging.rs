//! Diagnostic logging setup.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber. Logs go to stderr so listings on stdout
/// stay pipeable.
///
/// `RUST_LOG` takes precedence over the configured level; `--verbose`
/// raises the fallback to `debug`.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = fmt().with_writer(std::io::stderr).with_env_filter(filter);
    // A subscriber may already be installed; keep it.
    let _ = match config.format {
        LogFormat::Human => builder.with_target(false).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
