//! Writing and removing one declaration file.
//!
//! Both operations absorb their own failures: an error becomes an alert
//! naming the file and the caller carries on with the next one.

use super::{is_up_to_date, Pipeline};
use crate::error::{IoResultExt, Result};
use std::path::Path;
use tracing::debug;

impl Pipeline {
    /// Regenerate the declaration file for `file`.
    pub async fn write_file(&self, file: &Path) {
        if let Err(err) = self.try_write_file(file).await {
            self.alerts.error(format!(
                "An error occurred generating type definitions for {}:\n{err}",
                file.display()
            ));
        }
    }

    /// Delete the declaration file that belongs to `file`, if there is one.
    pub async fn remove_file(&self, file: &Path) {
        let output = self.type_definition_path(file);
        if let Err(err) = self.remove_output(&output).await {
            self.alerts.error(format!(
                "An error occurred removing {}:\n{err}",
                output.display()
            ));
        }
    }

    async fn try_write_file(&self, file: &Path) -> Result<()> {
        let output = self.type_definition_path(file);
        let target = self.resolve(&output);

        let Some(content) = self.render(file).await? else {
            if tokio::fs::try_exists(&target).await.at_path(&target)? {
                self.remove_output(&output).await?;
            } else {
                self.alerts
                    .notice(format!("[NO GENERATED TYPES] {}", file.display()));
            }
            return Ok(());
        };

        if self.options.update_stale_only
            && is_up_to_date(&self.resolve(file), &target, &content).await?
        {
            debug!(output = %output.display(), "Up to date, skipping write");
            return Ok(());
        }

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.at_path(parent)?;
        }
        tokio::fs::write(&target, content.as_bytes())
            .await
            .at_path(&target)?;
        self.alerts
            .success(format!("[GENERATED TYPES] {}", output.display()));
        Ok(())
    }

    /// Delete `output`, reporting it as written. Relative paths are taken
    /// against the pipeline cwd.
    async fn remove_output(&self, output: &Path) -> Result<()> {
        let target = self.resolve(output);
        if !tokio::fs::try_exists(&target).await.at_path(&target)? {
            return Ok(());
        }
        tokio::fs::remove_file(&target).await.at_path(&target)?;
        self.alerts.success(format!("[REMOVED] {}", output.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::alerts::{AlertKind, Alerts, LogLevel, RecordingSink};
    use crate::options::ConfigOptions;
    use crate::pipeline::Pipeline;
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn pipeline(dir: &TempDir, options: ConfigOptions) -> (Pipeline, RecordingSink) {
        let sink = RecordingSink::new();
        let alerts = Alerts::new(LogLevel::Verbose, Arc::new(sink.clone()));
        (Pipeline::new(options, alerts).with_cwd(dir.path()), sink)
    }

    #[tokio::test]
    async fn test_writes_declarations() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("style.scss");
        fs::write(&source, ".some-class { color: red; }").unwrap();

        let (pipeline, sink) = pipeline(&dir, ConfigOptions::default());
        pipeline.write_file(&source).await;

        let written = fs::read_to_string(dir.path().join("style.scss.d.ts")).unwrap();
        assert_eq!(written, "export declare const someClass: string;\n");
        assert_eq!(sink.of_kind(AlertKind::Success).len(), 1);
        assert!(sink.contains("[GENERATED TYPES]"));
    }

    #[tokio::test]
    async fn test_nothing_to_declare_notice() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("empty.scss");
        fs::write(&source, "body { margin: 0; }").unwrap();

        let (pipeline, sink) = pipeline(&dir, ConfigOptions::default());
        pipeline.write_file(&source).await;

        assert!(!dir.path().join("empty.scss.d.ts").exists());
        let notices = sink.of_kind(AlertKind::Notice);
        assert_eq!(notices.len(), 1);
        assert!(notices[0].starts_with("[NO GENERATED TYPES]"));
    }

    #[tokio::test]
    async fn test_nothing_to_declare_removes_existing_output() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("empty.scss");
        let output = dir.path().join("empty.scss.d.ts");
        fs::write(&source, "body { margin: 0; }").unwrap();
        fs::write(&output, "export declare const old: string;\n").unwrap();

        let (pipeline, sink) = pipeline(&dir, ConfigOptions::default());
        pipeline.write_file(&source).await;

        assert!(!output.exists());
        assert!(sink.contains("[REMOVED]"));
    }

    #[tokio::test]
    async fn test_compile_error_is_reported_not_raised() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("broken.scss");
        fs::write(&source, "@import 'does-not-exist';\n.a { color: red; }").unwrap();

        let (pipeline, sink) = pipeline(&dir, ConfigOptions::default());
        pipeline.write_file(&source).await;

        let errors = sink.of_kind(AlertKind::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("An error occurred generating type definitions for"));
        assert!(errors[0].contains("failed to compile"));
        assert!(!dir.path().join("broken.scss.d.ts").exists());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("gone.scss");
        let output = dir.path().join("gone.scss.d.ts");
        fs::write(&output, "x").unwrap();

        let (pipeline, sink) = pipeline(&dir, ConfigOptions::default());
        pipeline.remove_file(&source).await;
        pipeline.remove_file(&source).await;

        assert!(!output.exists());
        assert_eq!(sink.entries().len(), 1);
        assert!(sink.contains("[REMOVED]"));
    }

    #[tokio::test]
    async fn test_output_folder_creates_directories() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("src/nested/style.scss");
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        fs::write(&source, ".a { color: red; }").unwrap();

        let options = ConfigOptions {
            output_folder: Some("__generated__".into()),
            ..ConfigOptions::default()
        };
        let (pipeline, _sink) = pipeline(&dir, options);
        pipeline.write_file(&source).await;

        assert!(dir
            .path()
            .join("__generated__/src/nested/style.scss.d.ts")
            .exists());
    }

    #[tokio::test]
    async fn test_relative_source_is_taken_against_cwd() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("styles")).unwrap();
        fs::write(dir.path().join("styles/card.scss"), ".card { color: red; }").unwrap();

        let (pipeline, sink) = pipeline(&dir, ConfigOptions::default());
        pipeline.write_file(Path::new("styles/card.scss")).await;

        let output = dir.path().join("styles/card.scss.d.ts");
        assert!(output.exists());
        assert!(sink.contains("[GENERATED TYPES] styles/card.scss.d.ts"));

        pipeline.remove_file(Path::new("styles/card.scss")).await;
        assert!(!output.exists());
        assert!(sink.contains("[REMOVED] styles/card.scss.d.ts"));
    }
}
