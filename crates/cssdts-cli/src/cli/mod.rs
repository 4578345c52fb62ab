//! Command-line interface definition.
//!
//! `cssdts <PATTERN> [OPTIONS]`. Every option is optional so that a config
//! file can supply it; boolean switches are `Option<bool>` and accept an
//! explicit `--flag=false` to override a config file.

mod tests;
mod validation;

use clap::Parser;
use cssdts::{ExportType, LogLevel, NameFormat, QuoteType};
use std::path::PathBuf;

pub use validation::{parse_key_val, parse_type_name};

/// Generate TypeScript declarations for CSS module stylesheets
#[derive(Parser, Debug)]
#[command(
    name = "cssdts",
    version,
    about = "Generate TypeScript declarations for CSS module stylesheets",
    long_about = "cssdts writes a .d.ts file next to each stylesheet matched by PATTERN,\n\
                  declaring the class names the stylesheet exports as a CSS module.\n\
                  Run once, check in CI with --list-different, or keep files in sync with --watch."
)]
pub struct Cli {
    /// Glob pattern (quote it) or directory of stylesheets
    ///
    /// A directory is widened to `<dir>/**/*.scss`.
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Class name transform (repeatable; `all` applies every transform)
    #[arg(short = 'n', long, visible_alias = "nameFormat", value_name = "FORMAT")]
    pub name_format: Vec<NameFormat>,

    /// Export style: named declarations or a default-exported record
    #[arg(short = 'e', long, visible_alias = "exportType", value_name = "TYPE")]
    pub export_type: Option<ExportType>,

    /// Name of the exported class-name union type (default export only)
    #[arg(long, visible_alias = "exportTypeName", value_name = "NAME", value_parser = parse_type_name)]
    pub export_type_name: Option<String>,

    /// Name of the exported record type (default export only)
    #[arg(long, visible_alias = "exportTypeInterface", value_name = "NAME", value_parser = parse_type_name)]
    pub export_type_interface: Option<String>,

    /// Quote style for record keys (default export only)
    #[arg(short = 'q', long, visible_alias = "quoteType", value_name = "QUOTE")]
    pub quote_type: Option<QuoteType>,

    /// Text placed at the top of every generated file
    #[arg(long, value_name = "TEXT")]
    pub banner: Option<String>,

    /// Write `style.d.scss.ts` instead of `style.scss.d.ts`
    #[arg(
        long,
        visible_alias = "allowArbitraryExtensions",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub allow_arbitrary_extensions: Option<bool>,

    /// Watch for changes and regenerate
    #[arg(short = 'w', long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub watch: Option<bool>,

    /// In watch mode, do not process files that already exist
    #[arg(
        long,
        visible_alias = "ignoreInitial",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub ignore_initial: Option<bool>,

    /// Check that declarations are up to date; exit 1 if any are not
    #[arg(
        short = 'l',
        long,
        visible_alias = "listDifferent",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub list_different: Option<bool>,

    /// Skip stylesheets whose declaration file is newer
    #[arg(
        short = 'u',
        long,
        visible_alias = "updateStaleOnly",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub update_stale_only: Option<bool>,

    /// Write declarations under this folder, mirroring source paths
    #[arg(short = 'o', long, visible_alias = "outputFolder", value_name = "DIR")]
    pub output_folder: Option<PathBuf>,

    /// Glob of files to skip (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Alert verbosity: verbose, error, info or silent
    #[arg(short = 'L', long, visible_alias = "logLevel", value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Extra directory for resolving imports (repeatable)
    #[arg(short = 'i', long, visible_alias = "includePaths", value_name = "DIR")]
    pub include_path: Vec<PathBuf>,

    /// Exact import alias, e.g. `~theme=theme` (repeatable)
    #[arg(short = 'a', long, value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub alias: Vec<(String, String)>,

    /// Import prefix alias, e.g. `@/=src/` (repeatable)
    #[arg(long, visible_alias = "aliasPrefix", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub alias_prefix: Vec<(String, String)>,

    /// Stylesheet text prepended to every file before compiling
    #[arg(short = 'd', long, visible_alias = "additionalData", value_name = "TEXT")]
    pub additional_data: Option<String>,

    /// Config file (default: cssdts.config.toml or cssdts.config.json)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug diagnostics on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, visible_alias = "noColor")]
    pub no_color: bool,
}
