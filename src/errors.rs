// src/errors.rs

//! Crate-wide error type.
//!
//! Every failure aborts the whole pipeline, so callers only ever see one of
//! these or a fully built configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error loading config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HCL syntax error: {0}")]
    Syntax(#[from] hcl::Error),

    #[error("JSON syntax error: {0}")]
    JsonSyntax(#[from] serde_json::Error),

    #[error("Error decoding `{field}`: {reason}")]
    Decode { field: String, reason: String },

    #[error("Unrecognized {field} setting: {value} ({reason})")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn decode(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Decode {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn validation(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::Validation {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Malformed or type-mismatched input document.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            ConfigError::Syntax(_) | ConfigError::JsonSyntax(_) | ConfigError::Decode { .. }
        )
    }

    /// Recognized field carrying an out-of-range value.
    pub fn is_validation(&self) -> bool {
        matches!(self, ConfigError::Validation { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, ConfigError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
