//! Command-line logging flags and `tracing` initialization shared by the server binaries.
//!
//! Logs always go to stderr: stdout carries the MCP protocol.

use crate::error::{RestToolsError, Result};
use clap::{Args, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct LoggingArgs {
    /// Log filter directive (`info`, `debug`, `rest_mcp_tools=debug`). `RUST_LOG` wins when set.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`RestToolsError::Config`] if the filter directive is invalid or a global subscriber is
/// already installed.
pub fn init_tracing(args: &LoggingArgs) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.log_level).map_err(|e| {
            RestToolsError::Config(format!("Invalid log level '{}': {e}", args.log_level))
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false);

    let installed = match args.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| RestToolsError::Config(format!("failed to install tracing subscriber: {e}")))
}
