//! `generate` and `list_different` over a discovered file list.

use super::Pipeline;
use crate::discovery::list_files_and_perform_sanity_checks;
use crate::error::{IoResultExt, Result};
use futures::future::join_all;
use std::path::{Path, PathBuf};

/// Outcome of checking one file in diff mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerdictStatus {
    /// Output matches, or no output is needed
    Valid,
    /// Output should exist but does not
    Missing,
    /// Output exists with different content
    Mismatch,
    /// Checking failed; counted as invalid
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub file: PathBuf,
    pub status: VerdictStatus,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        self.status == VerdictStatus::Valid
    }
}

/// All verdicts from one `list_different` run, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    pub verdicts: Vec<Verdict>,
}

impl DiffReport {
    pub fn invalid(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.is_valid())
    }

    pub fn has_invalid(&self) -> bool {
        self.invalid().next().is_some()
    }

    /// Process exit status for this report.
    pub fn exit_code(&self) -> u8 {
        if self.has_invalid() {
            1
        } else {
            0
        }
    }
}

impl Pipeline {
    /// Write declarations for every file matching `pattern`.
    ///
    /// Per-file failures are reported as alerts and never fail the batch.
    pub async fn generate(&self, pattern: &str) -> Result<()> {
        let files = list_files_and_perform_sanity_checks(
            pattern,
            &self.options.ignore,
            &self.cwd,
            &self.alerts,
        )?;
        if files.is_empty() {
            return Ok(());
        }

        self.alerts.success(format!(
            "Found {} file{}. Generating type definitions...",
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        ));

        join_all(files.iter().map(|file| self.write_file(file))).await;
        Ok(())
    }

    /// Compare existing declarations with what would be generated, without
    /// writing anything.
    pub async fn list_different(&self, pattern: &str) -> Result<DiffReport> {
        let files = list_files_and_perform_sanity_checks(
            pattern,
            &self.options.ignore,
            &self.cwd,
            &self.alerts,
        )?;
        let verdicts = join_all(files.iter().map(|file| self.check_file(file))).await;
        Ok(DiffReport { verdicts })
    }

    /// Verdict for a single file, reported through alerts as it is found.
    pub async fn check_file(&self, file: &Path) -> Verdict {
        let status = match self.try_check_file(file).await {
            Ok(status) => status,
            Err(err) => {
                self.alerts.error(format!(
                    "An error occurred checking {}:\n{err}",
                    file.display()
                ));
                VerdictStatus::Failed(err.to_string())
            }
        };

        match status {
            VerdictStatus::Missing => self.alerts.error(format!(
                "[INVALID TYPES] Type file needs to be generated for {}",
                file.display()
            )),
            VerdictStatus::Mismatch => self.alerts.error(format!(
                "[INVALID TYPES] Check type definitions for {}",
                file.display()
            )),
            VerdictStatus::Valid | VerdictStatus::Failed(_) => {}
        }

        Verdict {
            file: file.to_path_buf(),
            status,
        }
    }

    async fn try_check_file(&self, file: &Path) -> Result<VerdictStatus> {
        let Some(expected) = self.render(file).await? else {
            return Ok(VerdictStatus::Valid);
        };

        let output = self.resolve(&self.type_definition_path(file));
        let existing = match tokio::fs::read(&output).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(VerdictStatus::Missing);
            }
            Err(e) => return Err(e).at_path(&output),
        };

        if existing == expected.as_bytes() {
            Ok(VerdictStatus::Valid)
        } else {
            Ok(VerdictStatus::Mismatch)
        }
    }
}
