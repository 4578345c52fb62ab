//! Expand a glob pattern into the list of stylesheets to process.

use crate::alerts::Alerts;
use crate::error::Result;
use crate::glob::{has_wildcard, normalize, PatternMatcher};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Files matching `pattern` and none of `ignore`, sorted. A relative
/// pattern is taken against `cwd` and its matches are reported relative to
/// it, the way the pattern spells them.
///
/// An empty result is reported as an error alert and a single match as a
/// warning (usually an unquoted glob the shell already expanded). Neither
/// is fatal.
pub fn list_files_and_perform_sanity_checks(
    pattern: &str,
    ignore: &[String],
    cwd: &Path,
    alerts: &Alerts,
) -> Result<Vec<PathBuf>> {
    let files = list_files(pattern, ignore, cwd)?;

    if files.is_empty() {
        alerts.error("No files found.");
    } else if files.len() == 1 {
        alerts.warn(format!(
            "Only 1 file found for {pattern}. If using a glob pattern (eg: dir/**/*.scss) make sure to wrap in quotes (eg: \"dir/**/*.scss\")."
        ));
    }

    Ok(files)
}

pub fn list_files(pattern: &str, ignore: &[String], cwd: &Path) -> Result<Vec<PathBuf>> {
    let matcher = PatternMatcher::new(pattern, ignore)?;

    if !has_wildcard(pattern) {
        let path = Path::new(pattern);
        if cwd.join(path).is_file() && !matcher.is_ignored(path) {
            return Ok(vec![path.to_path_buf()]);
        }
        return Ok(Vec::new());
    }

    let base = matcher.base_directory();
    let root = cwd.join(&base);
    debug!(pattern, root = %root.display(), "Discovering files");

    let mut files: Vec<PathBuf> = WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let walked = entry.path();
            match walked.strip_prefix(&root) {
                Ok(rest) if base.is_relative() => normalize(&base.join(rest)).to_path_buf(),
                _ => normalize(walked).to_path_buf(),
            }
        })
        .filter(|path| matcher.is_match(path))
        .collect();

    files.sort();
    files.dedup();
    Ok(files)
}
