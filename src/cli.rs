// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::OutputFormat;

/// Command-line arguments for `taskwave`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskwave",
    version,
    about = "Order tasks by dependencies, due date and effort.",
    long_about = None
)]
pub struct CliArgs {
    /// Scheduling request to read (JSON, or TOML with a `.toml` extension).
    ///
    /// `-` reads JSON from stdin.
    #[arg(long, short, value_name = "PATH", default_value = "-")]
    pub input: String,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Taskwave.toml` in the current directory is used when it
    /// exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Output format; overrides `[output].format`.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Also print the waves the order was assembled from.
    #[arg(long)]
    pub explain: bool,

    /// Validate the request and report its shape, without printing an order.
    #[arg(long)]
    pub check: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKWAVE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
