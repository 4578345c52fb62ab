//! # cssdts
//!
//! Keeps `.d.ts` declaration files next to CSS module stylesheets in sync
//! with the class names those stylesheets export.
//!
//! ## Overview
//!
//! For each stylesheet matched by a glob, the [`Pipeline`]:
//!
//! 1. compiles it ([`StyleCompiler`]), resolving imports through the
//!    [`ImporterChain`]
//! 2. extracts the exported names ([`ClassNameExtractor`])
//! 3. applies the configured [`NameFormat`]s
//! 4. renders declarations and writes them next to the source (or under an
//!    output folder)
//!
//! It runs once ([`Pipeline::generate`]), as a check
//! ([`Pipeline::list_different`]) or continuously ([`Pipeline::watch`]).
//!
//! ```no_run
//! use cssdts::{Alerts, ConfigOptions, Pipeline};
//!
//! # async fn run() -> cssdts::Result<()> {
//! let pipeline = Pipeline::new(ConfigOptions::default(), Alerts::silent());
//! pipeline.generate("src/**/*.scss").await?;
//! # Ok(())
//! # }
//! ```

pub mod alerts;
pub mod compiler;
pub mod declaration;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod glob;
pub mod importer;
pub mod names;
pub mod options;
pub mod output_path;
pub mod pipeline;
pub mod watch;

pub use alerts::{AlertKind, AlertSink, Alerts, LogLevel, RecordingSink};
pub use compiler::{CompileRequest, SassCompiler, StyleCompiler};
pub use declaration::{render_declarations, RenderOptions};
pub use discovery::{list_files, list_files_and_perform_sanity_checks};
pub use error::{CssDtsError, Result};
pub use extract::{ClassNameExtractor, LightningCssExtractor};
pub use glob::{base_directory, PatternMatcher};
pub use importer::{AliasImporter, ImportContext, Importer, ImporterChain};
pub use names::{transform_class_names, NameFormat};
pub use options::{ConfigOptions, ExportType, QuoteType};
pub use output_path::type_definition_path;
pub use pipeline::{is_up_to_date, DiffReport, Pipeline, Verdict, VerdictStatus};
pub use watch::{Dispatcher, WatchEvent, WatchSession};
