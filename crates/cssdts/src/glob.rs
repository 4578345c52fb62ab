//! Glob helpers shared by discovery and watch mode.

use crate::error::{CssDtsError, Result};
use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

const WILDCARDS: [char; 4] = ['*', '?', '[', '{'];

/// Byte index of the first glob meta-character in `pattern`.
pub fn first_wildcard(pattern: &str) -> Option<usize> {
    pattern.find(WILDCARDS)
}

pub fn has_wildcard(pattern: &str) -> bool {
    first_wildcard(pattern).is_some()
}

/// The real directory that contains every file `pattern` can match.
///
/// This is the directory made of all path segments before the one holding
/// the first wildcard, or the parent directory when there is no wildcard.
/// Falls back to `.` when that would be empty.
pub fn base_directory(pattern: &str) -> String {
    let Some(index) = first_wildcard(pattern) else {
        return match Path::new(pattern).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().into_owned(),
            _ => ".".to_string(),
        };
    };

    let mut segments = Vec::new();
    let mut start = 0;
    for segment in pattern.split('/') {
        let end = start + segment.len();
        if index >= start && index <= end {
            break;
        }
        segments.push(segment);
        start = end + 1;
    }

    let base = segments.join("/");
    if base.is_empty() {
        if pattern.starts_with('/') && !segments.is_empty() {
            "/".to_string()
        } else {
            ".".to_string()
        }
    } else {
        base
    }
}

/// Drop a leading `./` so walker output and user patterns compare equal.
pub fn normalize(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}

fn normalize_pattern(pattern: &str) -> &str {
    pattern.strip_prefix("./").unwrap_or(pattern)
}

fn build_glob(pattern: &str) -> Result<Glob> {
    GlobBuilder::new(normalize_pattern(pattern))
        .literal_separator(true)
        .build()
        .map_err(|source| CssDtsError::Glob {
            pattern: pattern.to_string(),
            source,
        })
}

fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            continue;
        }
        builder.add(build_glob(trimmed)?);
    }
    builder.build().map_err(|source| CssDtsError::Glob {
        pattern: patterns.join(", "),
        source,
    })
}

/// "matches the pattern and none of the ignore patterns".
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: String,
    include: GlobMatcher,
    ignore: GlobSet,
}

impl PatternMatcher {
    pub fn new(pattern: &str, ignore: &[String]) -> Result<Self> {
        Ok(Self {
            pattern: pattern.to_string(),
            include: build_glob(pattern)?.compile_matcher(),
            ignore: build_ignore_set(ignore)?,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn base_directory(&self) -> PathBuf {
        PathBuf::from(base_directory(&self.pattern))
    }

    pub fn is_match(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.include.is_match(path) && !self.ignore.is_match(path)
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        self.ignore.is_match(normalize(path))
    }
}
