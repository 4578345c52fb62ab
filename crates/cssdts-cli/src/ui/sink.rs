use cssdts::{AlertKind, AlertSink};
use owo_colors::OwoColorize;
use std::io::Write;

/// Prints engine alerts to stdout, one line per alert.
#[derive(Debug, Clone, Copy)]
pub struct TerminalSink {
    colors: bool,
}

impl TerminalSink {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }
}

impl AlertSink for TerminalSink {
    fn emit(&self, kind: AlertKind, message: &str) {
        let line = paint(kind, message, self.colors);
        // A closed stdout (e.g. `| head`) must not abort generation.
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }
}

/// Color a message by alert kind: red errors, yellow warnings, dimmed
/// notices, green successes, plain info.
pub fn paint(kind: AlertKind, message: &str, colors: bool) -> String {
    if !colors {
        return message.to_string();
    }
    match kind {
        AlertKind::Error => message.red().to_string(),
        AlertKind::Warn => message.yellow().to_string(),
        AlertKind::Notice => message.dimmed().to_string(),
        AlertKind::Info => message.to_string(),
        AlertKind::Success => message.green().to_string(),
    }
}
