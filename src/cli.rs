// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;

/// Command-line arguments for `consul-sentinel`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "consul-sentinel",
    version,
    about = "Load and check a consul-sentinel configuration file.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (HCL or HCL-JSON).
    ///
    /// Default: `sentinel.hcl` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SENTINEL_LOG`, then the config's `log_level`, is used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the resolved configuration as TOML (token redacted).
    #[arg(long)]
    pub dump: bool,
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
