//! Leveled, user-facing alerts.
//!
//! The engine never prints directly. Every component receives an [`Alerts`]
//! handle which applies the configured [`LogLevel`] threshold and forwards
//! surviving messages to an [`AlertSink`]. The CLI installs a terminal sink;
//! tests and embedders can use [`RecordingSink`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Minimum verbosity for alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including warnings.
    #[default]
    Verbose,
    /// Errors only.
    Error,
    /// Errors plus informational and success messages.
    Info,
    /// Nothing at all.
    Silent,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Verbose,
        LogLevel::Error,
        LogLevel::Info,
        LogLevel::Silent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Verbose => "verbose",
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Silent => "silent",
        }
    }

    /// Whether an alert of `kind` is shown at this level.
    pub fn allows(self, kind: AlertKind) -> bool {
        match kind {
            AlertKind::Error => matches!(self, LogLevel::Verbose | LogLevel::Error | LogLevel::Info),
            AlertKind::Warn => matches!(self, LogLevel::Verbose),
            AlertKind::Notice | AlertKind::Info | AlertKind::Success => {
                matches!(self, LogLevel::Verbose | LogLevel::Info)
            }
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown log level '{s}' (expected verbose, error, info or silent)"))
    }
}

/// Severity of a single alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Warn,
    Notice,
    Info,
    Success,
}

/// Destination for alerts that passed the level gate.
pub trait AlertSink: Send + Sync {
    fn emit(&self, kind: AlertKind, message: &str);
}

/// Level-gated handle passed to every component.
#[derive(Clone)]
pub struct Alerts {
    level: LogLevel,
    sink: Arc<dyn AlertSink>,
}

impl Alerts {
    pub fn new(level: LogLevel, sink: Arc<dyn AlertSink>) -> Self {
        Self { level, sink }
    }

    /// Alerts that go nowhere.
    pub fn silent() -> Self {
        Self::new(LogLevel::Silent, Arc::new(RecordingSink::default()))
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.emit(AlertKind::Error, message.as_ref());
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.emit(AlertKind::Warn, message.as_ref());
    }

    pub fn notice(&self, message: impl AsRef<str>) {
        self.emit(AlertKind::Notice, message.as_ref());
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.emit(AlertKind::Info, message.as_ref());
    }

    pub fn success(&self, message: impl AsRef<str>) {
        self.emit(AlertKind::Success, message.as_ref());
    }

    fn emit(&self, kind: AlertKind, message: &str) {
        if self.level.allows(kind) {
            self.sink.emit(kind, message);
        }
    }
}

impl fmt::Debug for Alerts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alerts").field("level", &self.level).finish_non_exhaustive()
    }
}

/// Sink that keeps every alert in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    entries: Arc<Mutex<Vec<(AlertKind, String)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(AlertKind, String)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, message)| message).collect()
    }

    /// Messages of one kind, in emission order.
    pub fn of_kind(&self, kind: AlertKind) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, message)| message)
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|(_, message)| message.contains(needle))
    }
}

impl AlertSink for RecordingSink {
    fn emit(&self, kind: AlertKind, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((kind, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded(level: LogLevel) -> (Alerts, RecordingSink) {
        let sink = RecordingSink::new();
        (Alerts::new(level, Arc::new(sink.clone())), sink)
    }

    fn emit_all(alerts: &Alerts) {
        alerts.error("e");
        alerts.warn("w");
        alerts.notice("n");
        alerts.info("i");
        alerts.success("s");
    }

    #[test]
    fn test_verbose_shows_everything() {
        let (alerts, sink) = recorded(LogLevel::Verbose);
        emit_all(&alerts);
        assert_eq!(sink.messages(), vec!["e", "w", "n", "i", "s"]);
    }

    #[test]
    fn test_error_level_shows_errors_only() {
        let (alerts, sink) = recorded(LogLevel::Error);
        emit_all(&alerts);
        assert_eq!(sink.messages(), vec!["e"]);
    }

    #[test]
    fn test_info_level_hides_warnings() {
        let (alerts, sink) = recorded(LogLevel::Info);
        emit_all(&alerts);
        assert_eq!(sink.messages(), vec!["e", "n", "i", "s"]);
    }

    #[test]
    fn test_silent_suppresses_all() {
        let (alerts, sink) = recorded(LogLevel::Silent);
        emit_all(&alerts);
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("silent".parse::<LogLevel>(), Ok(LogLevel::Silent));
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::default(), LogLevel::Verbose);
    }
}
