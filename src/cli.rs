// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;

/// Command-line arguments for `threadsim`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "threadsim",
    version,
    about = "Simulate many-to-one, many-to-many and one-to-one threading models and print a Gantt chart.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the run config (TOML).
    ///
    /// Ignored with `--interactive`.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Ask for the run parameters on stdin instead of reading a config file.
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Where to write the Gantt chart (overrides `[output].gantt_chart`).
    #[arg(long, value_name = "PATH")]
    pub gantt_file: Option<PathBuf>,

    /// Execution log to append to (overrides `[output].execution_log`).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `THREADSIM_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate and print the run parameters, but don't simulate or write
    /// anything.
    #[arg(long)]
    pub dry_run: bool,
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
