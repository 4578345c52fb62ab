//! Conversion from CLI errors to miette reports.

use crate::error::{CliError, ConfigError};
use cssdts::CssDtsError;
use ::miette::Report;

/// Convert a [`CliError`] into a report for the top-level `main`.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::Parse { path, message }) => ::miette::miette!(
            "Invalid config file {}\n{}\n\nHint: Check option names (camelCase) and value types",
            path.display(),
            message
        ),
        CliError::Engine(e) => engine_error_to_miette(e),
        _ => ::miette::miette!("{}", err),
    }
}

/// Engine errors that reach the CLI are fatal setup problems, not per-file
/// failures, so each gets a hint about the usual cause.
pub fn engine_error_to_miette(err: CssDtsError) -> Report {
    match err {
        CssDtsError::Glob { pattern, source } => ::miette::miette!(
            "Invalid glob pattern '{}': {}\n\nHint: Wrap the pattern in quotes so the shell does not expand it",
            pattern,
            source
        ),
        CssDtsError::Watch(e) => ::miette::miette!(
            "File watcher error: {}\n\nHint: Check the system limit on watched files",
            e
        ),
        other => ::miette::miette!("{}", other),
    }
}
