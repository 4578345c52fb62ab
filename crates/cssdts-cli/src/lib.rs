//! Command-line interface for cssdts.
//!
//! The engine lives in the `cssdts` crate. This crate owns everything that
//! touches the terminal or the process:
//!
//! - [`cli`] - clap argument definitions
//! - [`config`] - config file loading and option merging
//! - [`commands`] - mode dispatch (generate, diff, watch)
//! - [`error`] - CLI error types with hints
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - colored terminal output for engine alerts

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
