//! Terminal output.
//!
//! Engine alerts are printed by [`TerminalSink`]; [`info`] covers the hint
//! line the CLI itself prints in watch mode.

mod messages;
mod sink;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::info;
pub use sink::{paint, TerminalSink};

/// Check if color output should be enabled.
///
/// `NO_COLOR` wins over `FORCE_COLOR`; otherwise stdout must be a terminal.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::Term::stdout().features().colors_supported()
}

static COLORS: AtomicBool = AtomicBool::new(false);

/// Decide once whether terminal output is colored.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

/// Result of the last [`init_colors`] call.
pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
