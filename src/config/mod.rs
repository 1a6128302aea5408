// src/config/mod.rs

//! Configuration ingestion for the sentinel.
//!
//! Responsibilities:
//! - Decode an HCL (or HCL-JSON) document into `RawConfig` (`decode.rs`).
//! - Fill unset settings with defaults (`defaults.rs`).
//! - Validate enumerated settings into a typed `Config` (`validate.rs`).
//! - Tie it together with handler construction (`loader.rs`).

pub mod decode;
pub mod defaults;
pub mod loader;
pub mod model;
pub mod validate;

pub use decode::decode;
pub use loader::{
    default_config, default_config_path, parse_config, parse_config_file, LoadedConfig,
};
pub use model::{
    Config, EmailHandlerConfig, HandlerConfig, PagerDutyHandlerConfig, RawConfig, RawServiceConfig,
    ServiceConfig, StdoutHandlerConfig, WatchMode,
};
