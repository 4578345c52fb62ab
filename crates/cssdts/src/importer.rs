//! Import resolution for stylesheet compilation.
//!
//! An [`ImporterChain`] is an ordered list of [`Importer`]s. The first one
//! that returns a path wins; `None` means "no opinion, ask the next one".
//! The [`AliasImporter`] built from the configured aliases is always first.

use crate::options::ConfigOptions;
use path_clean::PathClean;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

/// Where an import is being resolved from.
#[derive(Debug, Clone, Copy)]
pub struct ImportContext<'a> {
    /// The stylesheet containing the import, if it came from a file
    pub containing_file: Option<&'a Path>,
    /// Working directory used when there is no containing file
    pub cwd: &'a Path,
}

impl<'a> ImportContext<'a> {
    pub fn new(containing_file: Option<&'a Path>, cwd: &'a Path) -> Self {
        Self {
            containing_file,
            cwd,
        }
    }

    /// Directory of the containing file, else the working directory.
    pub fn base_dir(&self) -> PathBuf {
        match self.containing_file.and_then(Path::parent) {
            Some(dir) if !dir.as_os_str().is_empty() => self.cwd.join(dir),
            _ => self.cwd.to_path_buf(),
        }
    }
}

/// A single import resolver.
pub trait Importer: Send + Sync {
    /// Map `specifier` to a path, or `None` to defer to the next importer.
    ///
    /// The returned path may omit the extension or partial prefix; the
    /// compiler expands it the way Sass does (extension, partial prefix,
    /// index file).
    fn canonicalize(&self, specifier: &str, ctx: &ImportContext<'_>) -> Option<PathBuf>;

    /// Provide the contents for a canonicalized path instead of reading it
    /// from disk.
    fn load(&self, _path: &Path) -> Option<std::io::Result<String>> {
        None
    }
}

impl<F> Importer for F
where
    F: Fn(&str, &ImportContext<'_>) -> Option<PathBuf> + Send + Sync,
{
    fn canonicalize(&self, specifier: &str, ctx: &ImportContext<'_>) -> Option<PathBuf> {
        self(specifier, ctx)
    }
}

/// Exact and prefix aliases.
///
/// An exact alias always beats a prefix alias. Among prefix aliases the
/// longest matching prefix wins.
#[derive(Debug, Clone, Default)]
pub struct AliasImporter {
    aliases: BTreeMap<String, String>,
    alias_prefixes: BTreeMap<String, String>,
    include_paths: Vec<PathBuf>,
}

impl AliasImporter {
    pub fn new(
        aliases: BTreeMap<String, String>,
        alias_prefixes: BTreeMap<String, String>,
        include_paths: Vec<PathBuf>,
    ) -> Self {
        Self {
            aliases,
            alias_prefixes,
            include_paths,
        }
    }

    pub fn from_options(options: &ConfigOptions) -> Self {
        Self::new(
            options.aliases.clone(),
            options.alias_prefixes.clone(),
            options.include_paths.clone(),
        )
    }

    fn resolve_exact(&self, target: &str, ctx: &ImportContext<'_>) -> PathBuf {
        for include in &self.include_paths {
            let candidate = ctx.cwd.join(include).join(target).clean();
            if find_stylesheet(&candidate).is_some() {
                return candidate;
            }
        }
        ctx.base_dir().join(target).clean()
    }

    fn longest_prefix(&self, specifier: &str) -> Option<(&str, &str)> {
        self.alias_prefixes
            .iter()
            .filter(|(prefix, _)| specifier.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, replacement)| (prefix.as_str(), replacement.as_str()))
    }
}

impl Importer for AliasImporter {
    fn canonicalize(&self, specifier: &str, ctx: &ImportContext<'_>) -> Option<PathBuf> {
        if let Some(target) = self.aliases.get(specifier) {
            let resolved = self.resolve_exact(target, ctx);
            trace!(specifier, resolved = %resolved.display(), "Exact alias");
            return Some(resolved);
        }

        if let Some((prefix, replacement)) = self.longest_prefix(specifier) {
            let rewritten = format!("{replacement}{}", &specifier[prefix.len()..]);
            let resolved = ctx.base_dir().join(rewritten).clean();
            trace!(specifier, prefix, resolved = %resolved.display(), "Prefix alias");
            return Some(resolved);
        }

        None
    }
}

/// Ordered list of importers.
#[derive(Clone, Default)]
pub struct ImporterChain {
    importers: Vec<Arc<dyn Importer>>,
}

impl ImporterChain {
    /// Alias importer first, then `extra` in order.
    pub fn new(alias: AliasImporter, extra: impl Into<ImporterChain>) -> Self {
        let mut importers: Vec<Arc<dyn Importer>> = vec![Arc::new(alias)];
        importers.extend(extra.into().importers);
        Self { importers }
    }

    pub fn push(&mut self, importer: Arc<dyn Importer>) {
        self.importers.push(importer);
    }

    pub fn len(&self) -> usize {
        self.importers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.importers.is_empty()
    }

    pub fn canonicalize(&self, specifier: &str, ctx: &ImportContext<'_>) -> Option<PathBuf> {
        self.importers
            .iter()
            .find_map(|importer| importer.canonicalize(specifier, ctx))
    }

    pub fn load(&self, path: &Path) -> Option<std::io::Result<String>> {
        self.importers.iter().find_map(|importer| importer.load(path))
    }
}

impl fmt::Debug for ImporterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImporterChain")
            .field("len", &self.importers.len())
            .finish()
    }
}

impl From<Arc<dyn Importer>> for ImporterChain {
    fn from(importer: Arc<dyn Importer>) -> Self {
        Self {
            importers: vec![importer],
        }
    }
}

impl From<Vec<Arc<dyn Importer>>> for ImporterChain {
    fn from(importers: Vec<Arc<dyn Importer>>) -> Self {
        Self { importers }
    }
}

/// Paths tried, in order, when resolving `path` to a stylesheet.
pub fn stylesheet_candidates(path: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![path.to_path_buf()];
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return candidates;
    };
    let dir = path.parent().unwrap_or(Path::new(""));

    for ext in ["scss", "sass", "css"] {
        candidates.push(dir.join(format!("{name}.{ext}")));
    }
    if !name.starts_with('_') {
        for ext in ["scss", "sass"] {
            candidates.push(dir.join(format!("_{name}.{ext}")));
        }
    }
    candidates.push(path.join("index.scss"));
    candidates.push(path.join("_index.scss"));
    candidates
}

/// First existing file among [`stylesheet_candidates`].
pub fn find_stylesheet(path: &Path) -> Option<PathBuf> {
    stylesheet_candidates(path)
        .into_iter()
        .find(|candidate| candidate.is_file())
}
