// src/handlers/level.rs

use std::fmt;
use std::str::FromStr;

/// Recognized log level names, most severe first.
///
/// The ordering follows severity: `Panic < Fatal < ... < Trace`, so a
/// threshold `t` admits every level `l` with `l <= t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    Panic,
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Panic => "panic",
            Verbosity::Fatal => "fatal",
            Verbosity::Error => "error",
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }

    /// Whether a message at `level` passes this threshold.
    pub fn admits(&self, level: Verbosity) -> bool {
        level <= *self
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "panic" => Ok(Verbosity::Panic),
            "fatal" => Ok(Verbosity::Fatal),
            "error" => Ok(Verbosity::Error),
            "warn" | "warning" => Ok(Verbosity::Warn),
            "info" => Ok(Verbosity::Info),
            "debug" => Ok(Verbosity::Debug),
            "trace" => Ok(Verbosity::Trace),
            _ => Err("not a valid log level".to_string()),
        }
    }
}

impl From<Verbosity> for tracing::Level {
    fn from(level: Verbosity) -> Self {
        match level {
            Verbosity::Panic | Verbosity::Fatal | Verbosity::Error => tracing::Level::ERROR,
            Verbosity::Warn => tracing::Level::WARN,
            Verbosity::Info => tracing::Level::INFO,
            Verbosity::Debug => tracing::Level::DEBUG,
            Verbosity::Trace => tracing::Level::TRACE,
        }
    }
}
