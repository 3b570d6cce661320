use crate::error::{ClusterPointsError, Result};
use tracing_subscriber::EnvFilter;

/// Log level implied by `-q` / `-v` when `RUST_LOG` is unset.
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the global subscriber. Logs go to stderr; stdout carries reports.
pub fn init(verbose: u8, quiet: bool) -> Result<()> {
    let level = default_level(verbose, quiet);
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            ClusterPointsError::Telemetry(format!("invalid log filter '{level}': {e}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| ClusterPointsError::Telemetry(e.to_string()))
}
