//! The per-file pipeline and the batch operations built on it.
//!
//! A [`Pipeline`] bundles the resolved options with the collaborators used
//! for every file: compiler, extractor, importer chain and alert handle. It
//! is cheap to clone, so watch handlers each get their own copy.

mod batch;
mod stale;
mod write;

pub use batch::{DiffReport, Verdict, VerdictStatus};
pub use stale::is_up_to_date;

use crate::alerts::Alerts;
use crate::compiler::{CompileRequest, SassCompiler, StyleCompiler};
use crate::declaration::{render_declarations, RenderOptions};
use crate::error::Result;
use crate::extract::{ClassNameExtractor, LightningCssExtractor};
use crate::importer::{AliasImporter, ImporterChain};
use crate::names::transform_class_names;
use crate::options::ConfigOptions;
use crate::output_path::type_definition_path;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct Pipeline {
    options: Arc<ConfigOptions>,
    alerts: Alerts,
    compiler: Arc<dyn StyleCompiler>,
    extractor: Arc<dyn ClassNameExtractor>,
    importers: ImporterChain,
    cwd: PathBuf,
}

impl Pipeline {
    /// Pipeline with the built-in compiler and extractor, rooted at the
    /// process working directory.
    pub fn new(options: ConfigOptions, alerts: Alerts) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let importers = ImporterChain::new(AliasImporter::from_options(&options), ImporterChain::default());
        Self {
            options: Arc::new(options),
            alerts,
            compiler: Arc::new(SassCompiler),
            extractor: Arc::new(LightningCssExtractor),
            importers,
            cwd,
        }
    }

    pub fn with_compiler(mut self, compiler: Arc<dyn StyleCompiler>) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn ClassNameExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Append user importers after the alias importer.
    pub fn with_importers(mut self, importers: impl Into<ImporterChain>) -> Self {
        self.importers = ImporterChain::new(AliasImporter::from_options(&self.options), importers);
        self
    }

    /// Directory that relative patterns, stylesheets, output folders and
    /// alias fallbacks are resolved against. Defaults to the process working
    /// directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    pub fn options(&self) -> &ConfigOptions {
        &self.options
    }

    pub fn alerts(&self) -> &Alerts {
        &self.alerts
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Compile, extract and case-transform the names exported by `file`.
    pub async fn file_to_class_names(&self, file: &Path) -> Result<Vec<String>> {
        let css = self
            .compiler
            .compile(CompileRequest {
                file,
                source: None,
                additional_data: self.options.additional_data.as_deref(),
                importers: &self.importers,
                include_paths: &self.options.include_paths,
                cwd: &self.cwd,
            })
            .await?;
        let extracted = self.extractor.extract(&css, file).await?;
        let names = transform_class_names(&extracted, &self.options.name_format);
        debug!(file = %file.display(), count = names.len(), "Resolved class names");
        Ok(names)
    }

    /// The declaration text for `file`, or `None` when it exports nothing.
    pub async fn render(&self, file: &Path) -> Result<Option<String>> {
        let names = self.file_to_class_names(file).await?;
        Ok(render_declarations(
            &names,
            RenderOptions::from(self.options.as_ref()),
            &self.alerts,
        ))
    }

    /// `path` joined onto the pipeline cwd unless it is already absolute.
    pub(crate) fn resolve(&self, path: &Path) -> PathBuf {
        self.cwd.join(path)
    }

    pub fn type_definition_path(&self, file: &Path) -> PathBuf {
        type_definition_path(
            file,
            self.options.output_folder.as_deref(),
            self.options.allow_arbitrary_extensions,
            &self.cwd,
        )
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("options", &self.options)
            .field("importers", &self.importers)
            .field("cwd", &self.cwd)
            .finish_non_exhaustive()
    }
}
