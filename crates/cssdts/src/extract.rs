//! Exported-name extraction from compiled CSS.

use crate::error::{CssDtsError, Result};
use async_trait::async_trait;
use lightningcss::css_modules;
use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::trace;

static COMPOSES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"composes\s*:[^;}]*;?").expect("composes pattern is a valid regex")
});

#[async_trait]
pub trait ClassNameExtractor: Send + Sync {
    /// Names exported by `css` when loaded as a CSS module.
    async fn extract(&self, css: &str, file: &Path) -> Result<Vec<String>>;
}

/// Extracts CSS module exports (classes, ids, keyframes) with lightningcss.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightningCssExtractor;

#[async_trait]
impl ClassNameExtractor for LightningCssExtractor {
    async fn extract(&self, css: &str, file: &Path) -> Result<Vec<String>> {
        let stripped = strip_composes(css);
        let filename = file.to_string_lossy().to_string();

        let stylesheet = StyleSheet::parse(
            &stripped,
            ParserOptions {
                filename: filename.clone(),
                css_modules: Some(css_modules::Config::default()),
                ..Default::default()
            },
        )
        .map_err(|e| CssDtsError::Extract {
            file: file.to_path_buf(),
            message: e.to_string(),
        })?;

        let result = stylesheet
            .to_css(PrinterOptions::default())
            .map_err(|e| CssDtsError::Extract {
                file: file.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut names: Vec<String> = result
            .exports
            .map(|exports| exports.into_keys().collect())
            .unwrap_or_default();
        names.sort();
        trace!(file = %filename, count = names.len(), "Extracted exports");
        Ok(names)
    }
}

/// Remove `composes:` declarations; they reference other modules and do not
/// introduce names of their own.
fn strip_composes(css: &str) -> std::borrow::Cow<'_, str> {
    COMPOSES_RE.replace_all(css, "")
}
