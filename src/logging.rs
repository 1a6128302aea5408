// src/logging.rs

//! Logging setup for `consul-sentinel` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `SENTINEL_LOG` environment variable (e.g. "info", "debug")
//! 3. `log_level` from the loaded configuration
//! 4. default to `info`
//!
//! Logs are sent to STDERR so that stdout only carries the summary / dump.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;
use crate::handlers::{ActivationEvent, Verbosity};

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>, config_level: Option<&str>) -> Result<()> {
    let level = resolve_level(
        cli_level,
        std::env::var("SENTINEL_LOG").ok().as_deref(),
        config_level,
    );

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}

/// Emit one `info` line per enabled handler.
pub fn log_activation(events: &[ActivationEvent]) {
    for event in events {
        info!("{event}");
    }
}

fn resolve_level(
    cli_level: Option<LogLevel>,
    env_level: Option<&str>,
    config_level: Option<&str>,
) -> tracing::Level {
    if let Some(lvl) = cli_level {
        return level_from_log_level(lvl);
    }
    env_level
        .and_then(parse_level_str)
        .or_else(|| config_level.and_then(parse_level_str))
        .unwrap_or(tracing::Level::INFO)
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    s.trim().parse::<Verbosity>().ok().map(tracing::Level::from)
}
