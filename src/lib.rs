// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod handlers;
pub mod logging;

use std::fmt;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::loader::{parse_config_file, LoadedConfig};
use crate::fs::RealFileSystem;
use crate::handlers::AlertHandler;

pub use crate::config::{default_config, parse_config, Config, ServiceConfig, WatchMode};
pub use crate::errors::ConfigError;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (from disk, via `RealFileSystem`)
/// - logging setup, using the config's `log_level` as a fallback
/// - reporting of enabled handlers
/// - summary or `--dump` output
pub fn run(args: CliArgs) -> Result<()> {
    let loaded = parse_config_file(&RealFileSystem, &args.config)
        .with_context(|| format!("invalid configuration in {}", args.config.display()))?;

    logging::init_logging(args.log_level, Some(loaded.config.log_level.as_str()))?;
    logging::log_activation(&loaded.events);

    if args.dump {
        print!("{}", render_dump(&loaded.config)?);
        return Ok(());
    }

    print!("{}", Summary(&loaded));
    debug!("summary complete");
    Ok(())
}

/// The resolved configuration as TOML. The token is never included.
fn render_dump(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("rendering resolved configuration")
}

/// Human-readable overview of the resolved configuration.
struct Summary<'a>(&'a LoadedConfig);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loaded = self.0;
        let cfg = &loaded.config;

        writeln!(f, "consul-sentinel configuration")?;
        writeln!(f, "  consul_address = {}", cfg.consul_address)?;
        let token = if cfg.token.is_some() { "(set)" } else { "(none)" };
        writeln!(f, "  token = {token}")?;
        writeln!(f, "  dev_mode = {}", cfg.dev_mode)?;
        writeln!(f, "  node_watch = {}", cfg.node_watch)?;
        writeln!(f, "  service_watch = {}", cfg.service_watch)?;
        writeln!(f, "  change_threshold = {}", cfg.change_threshold)?;
        writeln!(f, "  log_level = {}", cfg.log_level)?;
        writeln!(f)?;

        writeln!(f, "services ({}):", cfg.services.len())?;
        for service in cfg.services.iter() {
            writeln!(f, "  - {}", service.name)?;
            writeln!(f, "      change_threshold: {}", service.change_threshold)?;
            if service.distinct_tags {
                writeln!(f, "      distinct_tags: true")?;
            }
            if !service.ignored_tags.is_empty() {
                writeln!(f, "      ignored_tags: {:?}", service.ignored_tags)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "handlers ({}):", loaded.handlers.len())?;
        for handler in loaded.handlers.iter() {
            match handler {
                AlertHandler::Stdout(h) => writeln!(f, "  - stdout (level {})", h.level)?,
                AlertHandler::Email(h) => writeln!(f, "  - email -> {:?}", h.recipients)?,
                AlertHandler::PagerDuty(h) => writeln!(
                    f,
                    "  - pagerduty (service key {}, max retries {})",
                    if h.service_key.is_some() { "set" } else { "missing" },
                    h.max_retries
                )?,
            }
        }
        Ok(())
    }
}
