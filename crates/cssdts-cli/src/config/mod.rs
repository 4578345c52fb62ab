//! Options from the command line, a config file and the environment.
//!
//! Sources, highest priority first:
//! 1. command-line flags
//! 2. `CSSDTS_*` environment variables
//! 3. config file (`--config`, else `cssdts.config.toml`, else `cssdts.config.json`)
//! 4. built-in defaults
//!
//! Flags and file are each read into a [`PartialOptions`]; [`merge_options`]
//! resolves them into the engine's [`cssdts::ConfigOptions`].

mod conversions;
mod loading;
mod merge;
mod types;
mod validation;

pub use loading::{find_config_file, load_config, CONFIG_FILE_NAMES};
pub use merge::merge_options;
pub use types::{OneOrMany, PartialOptions};
pub use validation::validate;
