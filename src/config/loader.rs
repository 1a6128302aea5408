// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::decode::decode;
use crate::config::model::{Config, RawConfig};
use crate::errors::{ConfigError, Result};
use crate::fs::FileSystem;
use crate::handlers::{build_handlers, ActivationEvent, AlertHandler};

/// Output of a successful [`parse_config`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,

    /// stdout handlers, then email, then pagerduty; document order within
    /// each kind.
    pub handlers: Vec<AlertHandler>,

    /// One event per handler, in the same order. Nothing is logged while
    /// parsing; see [`crate::logging::log_activation`].
    pub events: Vec<ActivationEvent>,
}

impl LoadedConfig {
    pub fn into_parts(self) -> (Config, Vec<AlertHandler>) {
        (self.config, self.handlers)
    }
}

/// Read `path` through `fs` and run [`parse_config`] on its contents.
///
/// Read failures are returned as [`ConfigError::Io`] with the underlying
/// error untouched.
pub fn parse_config_file(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<LoadedConfig> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "read config file");

    parse_config(&contents)
}

/// Full pipeline: decode, apply defaults, validate, build handlers.
///
/// Either everything succeeds or only the first error is returned; a
/// partially processed configuration never escapes.
pub fn parse_config(raw: &str) -> Result<LoadedConfig> {
    let raw_config = decode(raw)?;
    let config = Config::try_from(raw_config)?;
    let (handlers, events) = build_handlers(&config.handlers)?;

    Ok(LoadedConfig {
        config,
        handlers,
        events,
    })
}

/// The configuration of an empty document: every default, no handlers.
///
/// Cannot fail: an empty `RawConfig` resolves to the default watch mode and
/// log level, which are valid names (`default_names_are_valid` in
/// `validate.rs`), and it defines no handlers to build.
pub fn default_config() -> (Config, Vec<AlertHandler>) {
    match Config::try_from(RawConfig::default()) {
        Ok(config) => (config, Vec::new()),
        Err(err) => unreachable!("built-in defaults failed validation: {err}"),
    }
}

/// Config file used when none is given on the command line.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("sentinel.hcl")
}
