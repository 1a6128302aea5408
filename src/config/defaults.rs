// src/config/defaults.rs

//! Default values for every optional setting.
//!
//! A default applies when the setting is missing *or* holds the zero value
//! of its type (`0`, `""`). Watch modes are filled in here but validated
//! later, in `validate.rs`.

use std::collections::BTreeSet;

use crate::config::model::{HandlerConfig, RawConfig, RawServiceConfig, ServiceConfig};

pub const DEFAULT_CONSUL_ADDRESS: &str = "localhost:8500";
pub const DEFAULT_CHANGE_THRESHOLD: u32 = 60;
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_WATCH_MODE: &str = "local";

/// Every setting present, nothing validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub consul_address: String,
    pub token: Option<String>,
    pub dev_mode: bool,
    pub node_watch: String,
    pub service_watch: String,
    pub change_threshold: u32,
    pub log_level: String,
    pub services: Vec<ServiceConfig>,
    pub handlers: HandlerConfig,
}

impl RawConfig {
    /// Apply the default for every unset setting.
    ///
    /// Services without their own `change_threshold` inherit the global one
    /// after the global default has been applied. The service list is
    /// rebuilt, so the inherited thresholds are what later lookups see.
    pub fn resolve(self) -> ResolvedConfig {
        let change_threshold = non_zero(self.change_threshold).unwrap_or(DEFAULT_CHANGE_THRESHOLD);

        let services = self
            .services
            .into_iter()
            .map(|service| ServiceConfig {
                name: service.name,
                change_threshold: non_zero(service.change_threshold).unwrap_or(change_threshold),
                distinct_tags: service.distinct_tags.unwrap_or(false),
                ignored_tags: service.ignored_tags.into_iter().collect::<BTreeSet<_>>(),
            })
            .collect();

        ResolvedConfig {
            consul_address: or_default(self.consul_address, DEFAULT_CONSUL_ADDRESS),
            token: non_empty(self.token),
            dev_mode: self.dev_mode.unwrap_or(false),
            node_watch: or_default(self.node_watch, DEFAULT_WATCH_MODE),
            service_watch: or_default(self.service_watch, DEFAULT_WATCH_MODE),
            change_threshold,
            log_level: or_default(self.log_level, DEFAULT_LOG_LEVEL),
            services,
            handlers: self.handlers,
        }
    }

    /// [`RawConfig::resolve`], expressed as a `RawConfig` with every setting
    /// present. Applying this twice gives the same result as applying it
    /// once.
    pub fn resolve_defaults(self) -> RawConfig {
        RawConfig::from(self.resolve())
    }
}

impl From<ResolvedConfig> for RawConfig {
    fn from(resolved: ResolvedConfig) -> Self {
        RawConfig {
            consul_address: Some(resolved.consul_address),
            token: resolved.token,
            dev_mode: Some(resolved.dev_mode),
            node_watch: Some(resolved.node_watch),
            service_watch: Some(resolved.service_watch),
            change_threshold: Some(resolved.change_threshold),
            log_level: Some(resolved.log_level),
            services: resolved
                .services
                .into_iter()
                .map(|service| RawServiceConfig {
                    name: service.name,
                    change_threshold: Some(service.change_threshold),
                    distinct_tags: Some(service.distinct_tags),
                    ignored_tags: service.ignored_tags.into_iter().collect(),
                })
                .collect(),
            handlers: resolved.handlers,
        }
    }
}

fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v != 0)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn or_default(value: Option<String>, default: &str) -> String {
    non_empty(value).unwrap_or_else(|| default.to_string())
}
