// src/config/model.rs

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::decode;

/// Configuration exactly as decoded from the document.
///
/// Every optional setting is an `Option`, so "not present in the document"
/// is explicit. The default resolver still treats `Some(0)` and `Some("")`
/// as unset, so an explicit zero value cannot be told apart from a missing
/// one.
///
/// ```hcl
/// consul_address   = "consul.service:8500"
/// node_watch       = "global"
/// change_threshold = 30
///
/// service "api" {
///   change_threshold = 10
///   ignored_tags     = ["canary"]
/// }
///
/// handlers {
///   stdout { log_level = "info" }
///   email  { recipients = ["ops@example.com"] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub consul_address: Option<String>,
    pub token: Option<String>,
    pub dev_mode: Option<bool>,
    pub node_watch: Option<String>,
    pub service_watch: Option<String>,
    pub change_threshold: Option<u32>,
    pub log_level: Option<String>,

    /// `service "<name>" { ... }` blocks, in document order.
    #[serde(rename = "service", deserialize_with = "decode::labelled_services")]
    pub services: Vec<RawServiceConfig>,

    /// Contents of the `handlers { ... }` block(s).
    #[serde(deserialize_with = "decode::merged_handlers")]
    pub handlers: HandlerConfig,
}

/// A `service "<name>"` block before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawServiceConfig {
    /// Block label; filled in by the decoder.
    #[serde(skip)]
    pub name: String,
    pub change_threshold: Option<u32>,
    pub distinct_tags: Option<bool>,
    pub ignored_tags: Vec<String>,
}

/// Raw handler definitions grouped by delivery kind.
///
/// These are the definitions as written; [`crate::handlers::build_handlers`]
/// turns them into the uniform [`crate::handlers::AlertHandler`] collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    #[serde(deserialize_with = "decode::one_or_many")]
    pub stdout: Vec<StdoutHandlerConfig>,
    #[serde(deserialize_with = "decode::one_or_many")]
    pub email: Vec<EmailHandlerConfig>,
    #[serde(deserialize_with = "decode::one_or_many")]
    pub pagerduty: Vec<PagerDutyHandlerConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StdoutHandlerConfig {
    /// Minimum verbosity to print; `warn` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailHandlerConfig {
    pub recipients: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerDutyHandlerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
}

/// Fully resolved and validated configuration.
///
/// Only produced through `Config::try_from(RawConfig)`, which applies
/// defaults before checking the enumerated settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub consul_address: String,

    /// ACL token; never written out by the `--dump` output.
    #[serde(skip_serializing)]
    pub token: Option<String>,

    pub dev_mode: bool,
    pub node_watch: WatchMode,
    pub service_watch: WatchMode,
    pub change_threshold: u32,
    pub log_level: String,

    #[serde(rename = "service")]
    pub services: Vec<ServiceConfig>,

    pub handlers: HandlerConfig,
}

impl Config {
    /// Find the override block for `name`.
    ///
    /// Names are not required to be unique; the first match wins.
    pub fn service_config(&self, name: &str) -> Option<&ServiceConfig> {
        self.services.iter().find(|service| service.name == name)
    }

    /// Threshold for `name`, falling back to the global one when the service
    /// has no override block.
    pub fn change_threshold_for(&self, name: &str) -> u32 {
        self.service_config(name)
            .map(|service| service.change_threshold)
            .unwrap_or(self.change_threshold)
    }
}

/// Per-service override with its threshold already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceConfig {
    pub name: String,
    pub change_threshold: u32,
    pub distinct_tags: bool,
    pub ignored_tags: BTreeSet<String>,
}

impl ServiceConfig {
    pub fn is_tag_ignored(&self, tag: &str) -> bool {
        self.ignored_tags.contains(tag)
    }
}

/// Scope of a watched resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchMode {
    /// Only the agent's own node / services.
    #[default]
    Local,
    /// Every node / service in the cluster.
    Global,
}

impl WatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchMode::Local => "local",
            WatchMode::Global => "global",
        }
    }
}

impl fmt::Display for WatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(WatchMode::Local),
            "global" => Ok(WatchMode::Global),
            _ => Err("expected \"local\" or \"global\"".to_string()),
        }
    }
}

impl From<Config> for RawConfig {
    /// Turn a resolved configuration back into its raw form, with every
    /// setting explicitly present.
    fn from(config: Config) -> Self {
        RawConfig {
            consul_address: Some(config.consul_address),
            token: config.token,
            dev_mode: Some(config.dev_mode),
            node_watch: Some(config.node_watch.as_str().to_string()),
            service_watch: Some(config.service_watch.as_str().to_string()),
            change_threshold: Some(config.change_threshold),
            log_level: Some(config.log_level),
            services: config
                .services
                .into_iter()
                .map(|service| RawServiceConfig {
                    name: service.name,
                    change_threshold: Some(service.change_threshold),
                    distinct_tags: Some(service.distinct_tags),
                    ignored_tags: service.ignored_tags.into_iter().collect(),
                })
                .collect(),
            handlers: config.handlers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_mode_is_case_sensitive() {
        assert_eq!("local".parse::<WatchMode>(), Ok(WatchMode::Local));
        assert_eq!("global".parse::<WatchMode>(), Ok(WatchMode::Global));
        assert!("Global".parse::<WatchMode>().is_err());
        assert!("regional".parse::<WatchMode>().is_err());
    }

    #[test]
    fn service_lookup_returns_first_match() {
        let service = |name: &str, threshold| ServiceConfig {
            name: name.to_string(),
            change_threshold: threshold,
            distinct_tags: false,
            ignored_tags: BTreeSet::new(),
        };
        let config = Config {
            consul_address: "localhost:8500".to_string(),
            token: None,
            dev_mode: false,
            node_watch: WatchMode::Local,
            service_watch: WatchMode::Local,
            change_threshold: 60,
            log_level: "INFO".to_string(),
            services: vec![service("api", 5), service("web", 7), service("api", 9)],
            handlers: HandlerConfig::default(),
        };

        assert_eq!(config.service_config("api").map(|s| s.change_threshold), Some(5));
        assert!(config.service_config("db").is_none());
        assert_eq!(config.change_threshold_for("web"), 7);
        assert_eq!(config.change_threshold_for("db"), 60);
    }
}
