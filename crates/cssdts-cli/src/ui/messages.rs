//! Status lines printed by the CLI itself, on stderr.

use super::colors_enabled;
use owo_colors::OwoColorize;

pub fn info(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_without_colors() {
        info("Press Ctrl+C to stop");
    }
}
