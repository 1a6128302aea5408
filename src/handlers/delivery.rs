// src/handlers/delivery.rs

//! What each handler would send for an alert.
//!
//! Nothing here performs I/O; the descriptors are handed to whatever
//! actually talks to the terminal, the mail server or PagerDuty.

use std::fmt;

use crate::handlers::level::Verbosity;

/// Health status reported by a Consul check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Passing,
    Warning,
    Critical,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Passing => "passing",
            CheckStatus::Warning => "warning",
            CheckStatus::Critical => "critical",
        }
    }

    /// Level at which a change to this status is reported.
    pub fn severity(&self) -> Verbosity {
        match self {
            CheckStatus::Passing => Verbosity::Info,
            CheckStatus::Warning => Verbosity::Warn,
            CheckStatus::Critical => Verbosity::Error,
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A check that changed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub node: String,
    /// `None` for node-level checks.
    pub service: Option<String>,
    pub check: String,
    pub status: CheckStatus,
    pub output: String,
}

impl Alert {
    /// `node/service/check`, or `node/check` for node-level checks.
    pub fn key(&self) -> String {
        match &self.service {
            Some(service) => format!("{}/{}/{}", self.node, service, self.check),
            None => format!("{}/{}", self.node, self.check),
        }
    }

    pub fn summary(&self) -> String {
        format!("{} is now {}", self.key(), self.status)
    }
}

/// Channel-specific payload for one alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Log {
        level: Verbosity,
        message: String,
    },
    Email {
        recipients: Vec<String>,
        subject: String,
        body: String,
    },
    PagerDuty {
        service_key: Option<String>,
        incident_key: String,
        description: String,
        max_retries: u32,
    },
}
