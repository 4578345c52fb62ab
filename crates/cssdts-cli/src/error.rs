//! Error handling for the cssdts CLI.
//!
//! [`CliError`] is what command code returns. Engine failures arrive as
//! [`cssdts::CssDtsError`], config problems as [`ConfigError`]; both convert
//! automatically. Messages end with a `Hint:` line where there is an obvious
//! next step for the user.
//!
//! ```rust,no_run
//! use cssdts_cli::error::{Result, ResultExt};
//! use std::path::PathBuf;
//!
//! fn working_dir() -> Result<PathBuf> {
//!     std::env::current_dir().context("Failed to read the working directory")
//! }
//! ```

mod miette;

pub use self::miette::cli_error_to_miette;

use cssdts::CssDtsError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading, merging or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised by the generation engine
    #[error("{0}")]
    Engine(#[from] CssDtsError),

    /// Failures outside the engine, with context prepended
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("Config file not found: {}\n\nHint: Create cssdts.config.toml or cssdts.config.json, or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// The config file could not be parsed into options
    #[error("Invalid config file {}: {message}\n\nHint: Check option names (camelCase) and value types", .path.display())]
    Parse {
        /// File that failed to load
        path: PathBuf,
        /// Parser or type error
        message: String,
    },

    /// Mutually exclusive options were specified
    #[error("Conflicting options: {0}\n\nHint: These options cannot be used together")]
    ConflictingOptions(String),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| CliError::Custom(format!("{}: {}", msg, e)))
    }
}
