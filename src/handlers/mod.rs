// src/handlers/mod.rs

//! Alert handlers built from the `handlers { ... }` block.
//!
//! Responsibilities:
//! - Validate handler settings (currently only the stdout log level).
//! - Turn raw definitions into one ordered `Vec<AlertHandler>`.
//! - Describe each activation as an [`ActivationEvent`] instead of logging,
//!   so the caller decides how to report it.

pub mod delivery;
pub mod level;

use std::fmt;

pub use delivery::{Alert, CheckStatus, Delivery};
pub use level::Verbosity;

use crate::config::model::{
    EmailHandlerConfig, HandlerConfig, PagerDutyHandlerConfig, StdoutHandlerConfig,
};
use crate::errors::{ConfigError, Result};

/// Verbosity used by a stdout handler without `log_level`.
pub const DEFAULT_STDOUT_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertHandler {
    Stdout(StdoutHandler),
    Email(EmailHandler),
    PagerDuty(PagerDutyHandler),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StdoutHandler {
    pub level: Verbosity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailHandler {
    pub recipients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerDutyHandler {
    pub service_key: Option<String>,
    pub max_retries: u32,
}

impl AlertHandler {
    pub fn kind(&self) -> &'static str {
        match self {
            AlertHandler::Stdout(_) => "stdout",
            AlertHandler::Email(_) => "email",
            AlertHandler::PagerDuty(_) => "pagerduty",
        }
    }

    /// Build the payload this handler would deliver for `alert`.
    ///
    /// Returns `None` when the handler filters the alert out (a stdout
    /// handler whose threshold is below the alert's severity).
    pub fn delivery(&self, alert: &Alert) -> Option<Delivery> {
        match self {
            AlertHandler::Stdout(handler) => {
                let level = alert.status.severity();
                handler.level.admits(level).then(|| Delivery::Log {
                    level,
                    message: format!("{}: {}", alert.summary(), alert.output),
                })
            }
            AlertHandler::Email(handler) => Some(Delivery::Email {
                recipients: handler.recipients.clone(),
                subject: format!("[consul] {}", alert.summary()),
                body: alert.output.clone(),
            }),
            AlertHandler::PagerDuty(handler) => Some(Delivery::PagerDuty {
                service_key: handler.service_key.clone(),
                incident_key: alert.key(),
                description: alert.summary(),
                max_retries: handler.max_retries,
            }),
        }
    }
}

/// A handler was enabled while processing the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationEvent {
    /// `log_level` is the name as configured (`"warning"` stays
    /// `"warning"`), or `warn` when the handler has none.
    Stdout { log_level: String },
    Email { recipients: Vec<String> },
    PagerDuty,
}

impl fmt::Display for ActivationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationEvent::Stdout { log_level } => {
                write!(f, "Handler stdout enabled with loglevel {log_level}")
            }
            ActivationEvent::Email { recipients } => {
                write!(f, "Handler email enabled with recipients: {recipients:?}")
            }
            ActivationEvent::PagerDuty => f.write_str("Handler pagerduty enabled"),
        }
    }
}

/// Build the handler collection: all stdout handlers, then all email
/// handlers, then all pagerduty handlers, each group in document order.
pub fn build_handlers(cfg: &HandlerConfig) -> Result<(Vec<AlertHandler>, Vec<ActivationEvent>)> {
    let total = cfg.stdout.len() + cfg.email.len() + cfg.pagerduty.len();
    let mut handlers = Vec::with_capacity(total);
    let mut events = Vec::with_capacity(total);

    for (idx, def) in cfg.stdout.iter().enumerate() {
        let (handler, log_level) = stdout_handler(idx, def)?;
        events.push(ActivationEvent::Stdout { log_level });
        handlers.push(AlertHandler::Stdout(handler));
    }

    for def in cfg.email.iter() {
        let handler = email_handler(def);
        events.push(ActivationEvent::Email {
            recipients: handler.recipients.clone(),
        });
        handlers.push(AlertHandler::Email(handler));
    }

    for def in cfg.pagerduty.iter() {
        events.push(ActivationEvent::PagerDuty);
        handlers.push(AlertHandler::PagerDuty(pagerduty_handler(def)));
    }

    Ok((handlers, events))
}

/// The handler plus the level name it was configured with.
fn stdout_handler(idx: usize, def: &StdoutHandlerConfig) -> Result<(StdoutHandler, String)> {
    let name = def
        .log_level
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_STDOUT_LEVEL);

    let level = name.parse::<Verbosity>().map_err(|reason| {
        ConfigError::validation(format!("handlers.stdout[{idx}].log_level"), name, reason)
    })?;

    Ok((StdoutHandler { level }, name.to_string()))
}

fn email_handler(def: &EmailHandlerConfig) -> EmailHandler {
    EmailHandler {
        recipients: def.recipients.clone(),
    }
}

fn pagerduty_handler(def: &PagerDutyHandlerConfig) -> PagerDutyHandler {
    PagerDutyHandler {
        service_key: def.service_key.clone(),
        max_retries: def.max_retries.unwrap_or(0),
    }
}
