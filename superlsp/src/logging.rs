//! Tracing setup
//!
//! Logs always go to stderr: stdout carries the LSP stream.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{LspError, Result};

/// Install the global subscriber.
///
/// Filter resolution: `log_level` if given, else `RUST_LOG`, else `info`.
/// Calling this again after a subscriber is installed is not an error.
pub fn init_logger(log_level: Option<&str>, no_color: bool) -> Result<()> {
    let filter = build_filter(log_level)?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_filter(filter);

    match tracing_subscriber::registry().with(stderr_layer).try_init() {
        Ok(()) => Ok(()),
        Err(e)
            if e.to_string().contains("already been set")
                || e.to_string().contains("already initialized") =>
        {
            Ok(())
        }
        Err(e) => Err(LspError::logging(e.to_string())),
    }
}

fn build_filter(log_level: Option<&str>) -> Result<EnvFilter> {
    match log_level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| LspError::logging(format!("invalid log level `{level}`: {e}"))),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}
