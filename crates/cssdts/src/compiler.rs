//! Stylesheet compilation.
//!
//! [`StyleCompiler`] is the seam for swapping the preprocessor. The built-in
//! [`SassCompiler`] runs `grass` over the file with the configured prelude and
//! include paths. Reads go through [`ChainFs`], which lets the importer chain
//! claim import specifiers (aliases, user importers) before Sass resolves the
//! rest itself, so every class reachable from a file ends up in the CSS
//! handed to the extractor.

use crate::error::{CssDtsError, IoResultExt, Result};
use crate::importer::{ImportContext, ImporterChain};
use async_trait::async_trait;
use path_clean::PathClean;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Comments and strings are matched so that their contents are skipped; only
/// the `@import`/`@use`/`@forward` alternative captures.
static STATEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)/\*.*?\*/|//[^\n]*|'(?:[^'\\\n]|\\.)*'|"(?:[^"\\\n]|\\.)*"|@(import|use|forward)\b([^;{]*)"#,
    )
    .expect("statement pattern is a valid regex")
});

static QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"'([^'\n]*)'|"([^"\n]*)""#).expect("quoted string pattern is a valid regex")
});

/// Everything a compiler needs for one file.
#[derive(Debug, Clone, Copy)]
pub struct CompileRequest<'a> {
    /// Entry stylesheet, relative paths are taken against `cwd`
    pub file: &'a Path,
    /// Inline source text; the file is read when `None`
    pub source: Option<&'a str>,
    /// Prelude prepended to the source, followed by a newline
    pub additional_data: Option<&'a str>,
    pub importers: &'a ImporterChain,
    pub include_paths: &'a [PathBuf],
    pub cwd: &'a Path,
}

#[async_trait]
pub trait StyleCompiler: Send + Sync {
    /// Produce CSS text for `request.file`.
    async fn compile(&self, request: CompileRequest<'_>) -> Result<String>;
}

/// Sass/SCSS/CSS compilation with `grass`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SassCompiler;

#[async_trait]
impl StyleCompiler for SassCompiler {
    async fn compile(&self, request: CompileRequest<'_>) -> Result<String> {
        let entry = request.cwd.join(request.file).clean();
        debug!(file = %entry.display(), "Compiling stylesheet");

        let source = match request.source {
            Some(source) => source.to_string(),
            None => match request.importers.load(&entry) {
                Some(loaded) => loaded.at_path(&entry)?,
                None => tokio::fs::read_to_string(&entry).await.at_path(&entry)?,
            },
        };
        let source = match request.additional_data {
            Some(prelude) if !prelude.is_empty() => format!("{prelude}\n{source}"),
            _ => source,
        };
        let source = rewrite_imports(&source, &entry, request.importers, request.cwd);

        let load_paths: Vec<PathBuf> = request
            .include_paths
            .iter()
            .map(|include| request.cwd.join(include).clean())
            .collect();
        let fs = ChainFs {
            importers: request.importers.clone(),
            cwd: request.cwd.to_path_buf(),
            entry: entry.clone(),
            entry_source: source,
        };

        let compiled = tokio::task::spawn_blocking(move || {
            let options = load_paths.iter().fold(
                grass::Options::default().fs(&fs).quiet(true),
                |options, path| options.load_path(path),
            );
            grass::from_path(&fs.entry, &options).map_err(|e| e.to_string())
        })
        .await;

        match compiled {
            Ok(Ok(css)) => Ok(css),
            Ok(Err(message)) => Err(CssDtsError::Compile {
                file: request.file.to_path_buf(),
                message,
            }),
            Err(join) => Err(CssDtsError::Compile {
                file: request.file.to_path_buf(),
                message: join.to_string(),
            }),
        }
    }
}

/// Filesystem view handed to `grass`.
///
/// The entry file reads back as the prepared source (prelude included, even
/// when the file only exists as inline text). Files the importer chain can
/// load are served from it. Every file read has its chain-claimed import
/// specifiers rewritten to absolute paths.
#[derive(Debug)]
struct ChainFs {
    importers: ImporterChain,
    cwd: PathBuf,
    entry: PathBuf,
    entry_source: String,
}

impl grass::Fs for ChainFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path == self.entry || path.is_file() || self.importers.load(path).is_some()
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        if path == self.entry {
            return Ok(self.entry_source.clone().into_bytes());
        }
        let contents = match self.importers.load(path) {
            Some(loaded) => loaded?,
            None => std::fs::read_to_string(path)?,
        };
        Ok(rewrite_imports(&contents, path, &self.importers, &self.cwd).into_bytes())
    }
}

/// Imports that are left to Sass untouched.
fn is_passthrough(specifier: &str) -> bool {
    specifier.starts_with("http://")
        || specifier.starts_with("https://")
        || specifier.starts_with("//")
        || specifier.starts_with("url(")
        || specifier.starts_with("sass:")
}

/// Replace every import specifier the chain canonicalizes with the absolute
/// path it resolves to. Specifiers the chain does not claim stay as written
/// and are resolved by Sass against the importing file and the load paths.
///
/// `@import` takes a comma-separated list; `@use` and `@forward` take one
/// URL. Statements inside comments are ignored.
pub(crate) fn rewrite_imports(
    source: &str,
    importer: &Path,
    chain: &ImporterChain,
    cwd: &Path,
) -> String {
    let ctx = ImportContext::new(Some(importer), cwd);
    let mut out = String::with_capacity(source.len());
    let mut last = 0;

    for caps in STATEMENT_RE.captures_iter(source) {
        let (Some(rule), Some(args)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let limit = if rule.as_str() == "import" { usize::MAX } else { 1 };

        for quoted in QUOTED_RE.captures_iter(args.as_str()).take(limit) {
            let Some(specifier) = quoted.get(1).or_else(|| quoted.get(2)) else {
                continue;
            };
            if is_passthrough(specifier.as_str()) {
                continue;
            }
            let Some(canonical) = chain.canonicalize(specifier.as_str(), &ctx) else {
                continue;
            };
            let canonical = cwd.join(canonical).clean();
            trace!(
                specifier = specifier.as_str(),
                resolved = %canonical.display(),
                "Rewriting import"
            );

            out.push_str(&source[last..args.start() + specifier.start()]);
            out.push_str(&canonical.to_string_lossy().replace('\\', "/"));
            last = args.start() + specifier.end();
        }
    }

    out.push_str(&source[last..]);
    out
}
