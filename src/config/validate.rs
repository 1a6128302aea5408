// src/config/validate.rs

use std::str::FromStr;

use crate::config::model::{Config, RawConfig, WatchMode};
use crate::errors::{ConfigError, Result};
use crate::handlers::Verbosity;

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    /// Resolve defaults, then check the enumerated settings.
    ///
    /// Defaults are applied once, by [`RawConfig::resolve`]; nothing here
    /// falls back to a default of its own.
    fn try_from(raw: RawConfig) -> std::result::Result<Self, Self::Error> {
        let resolved = raw.resolve();

        let node_watch = parse_watch_mode("node_watch", &resolved.node_watch)?;
        let service_watch = parse_watch_mode("service_watch", &resolved.service_watch)?;
        validate_log_level(&resolved.log_level)?;

        Ok(Config {
            consul_address: resolved.consul_address,
            token: resolved.token,
            dev_mode: resolved.dev_mode,
            node_watch,
            service_watch,
            change_threshold: resolved.change_threshold,
            log_level: resolved.log_level,
            services: resolved.services,
            handlers: resolved.handlers,
        })
    }
}

fn parse_watch_mode(field: &str, value: &str) -> Result<WatchMode> {
    WatchMode::from_str(value).map_err(|reason| ConfigError::validation(field, value, reason))
}

/// The original spelling is kept; only the name is checked.
fn validate_log_level(level: &str) -> Result<()> {
    Verbosity::from_str(level)
        .map(|_| ())
        .map_err(|reason| ConfigError::validation("log_level", level, reason))
}
