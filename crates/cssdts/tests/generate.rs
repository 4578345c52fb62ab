//! End-to-end tests for batch generation and diff mode.

use cssdts::{
    AlertKind, Alerts, ConfigOptions, ExportType, ImportContext, Importer, LogLevel, NameFormat,
    Pipeline, QuoteType, RecordingSink, VerdictStatus,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let write = |file: &str, contents: &str| {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    };

    write(
        "src/style.scss",
        "@import 'partials/base';\n.some-class { color: red; }\n.other-class { color: blue; }\n",
    );
    write("src/partials/_base.scss", ".base-reset { margin: 0; }\n");
    write("src/empty.scss", "body { margin: 0; }\n");
    dir
}

fn pipeline(dir: &TempDir, options: ConfigOptions) -> (Pipeline, RecordingSink) {
    let sink = RecordingSink::new();
    let alerts = Alerts::new(LogLevel::Verbose, Arc::new(sink.clone()));
    (Pipeline::new(options, alerts).with_cwd(dir.path()), sink)
}

fn pattern(dir: &TempDir) -> String {
    format!("{}/src/*.scss", dir.path().display())
}

fn output(dir: &TempDir) -> PathBuf {
    dir.path().join("src/style.scss.d.ts")
}

#[tokio::test]
async fn test_generate_named_exports() {
    let dir = project();
    let (pipeline, sink) = pipeline(&dir, ConfigOptions::default());

    pipeline.generate(&pattern(&dir)).await.unwrap();

    let content = fs::read_to_string(output(&dir)).unwrap();
    insta::assert_snapshot!(content, @r"
export declare const baseReset: string;
export declare const otherClass: string;
export declare const someClass: string;
");
    assert!(!dir.path().join("src/empty.scss.d.ts").exists());
    assert!(sink.contains("Found 2 files. Generating type definitions..."));
    assert_eq!(sink.of_kind(AlertKind::Notice).len(), 1);
}

#[tokio::test]
async fn test_generate_default_export_with_banner() {
    let dir = project();
    let options = ConfigOptions {
        export_type: ExportType::Default,
        quote_type: QuoteType::Double,
        name_format: vec![NameFormat::Kebab],
        banner: "// generated by cssdts".to_string(),
        ..ConfigOptions::default()
    };
    let (pipeline, _sink) = pipeline(&dir, options);

    pipeline.generate(&pattern(&dir)).await.unwrap();

    let content = fs::read_to_string(output(&dir)).unwrap();
    insta::assert_snapshot!(content, @r#"
// generated by cssdts
export type Styles = {
  "base-reset": string;
  "other-class": string;
  "some-class": string;
};

export type ClassNames = keyof Styles;

declare const styles: Styles;

export default styles;
"#);
}

#[tokio::test]
async fn test_name_format_union() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.scss"), ".fooBar { color: red; }").unwrap();
    let options = ConfigOptions {
        export_type: ExportType::Default,
        name_format: vec![NameFormat::Kebab, NameFormat::Snake],
        ..ConfigOptions::default()
    };
    let (pipeline, _sink) = pipeline(&dir, options);

    let names = pipeline
        .file_to_class_names(&dir.path().join("a.scss"))
        .await
        .unwrap();
    assert_eq!(names, vec!["foo-bar", "foo_bar"]);
}

#[tokio::test]
async fn test_generate_twice_is_idempotent() {
    let dir = project();
    let (pipeline, sink) = pipeline(&dir, ConfigOptions::default());

    pipeline.generate(&pattern(&dir)).await.unwrap();
    let first = fs::read_to_string(output(&dir)).unwrap();
    pipeline.generate(&pattern(&dir)).await.unwrap();
    let second = fs::read_to_string(output(&dir)).unwrap();

    assert_eq!(first, second);
    assert!(sink.of_kind(AlertKind::Error).is_empty());
}

#[tokio::test]
async fn test_update_stale_only_skips_fresh_output() {
    let dir = project();
    let options = ConfigOptions {
        update_stale_only: true,
        ..ConfigOptions::default()
    };
    let (pipeline, sink) = pipeline(&dir, options);

    pipeline.generate(&pattern(&dir)).await.unwrap();
    let generated = sink.of_kind(AlertKind::Success).len();

    let now = SystemTime::now();
    for source in ["src/style.scss", "src/partials/_base.scss"] {
        fs::File::options()
            .write(true)
            .open(dir.path().join(source))
            .unwrap()
            .set_modified(now - Duration::from_secs(120))
            .unwrap();
    }

    pipeline.generate(&pattern(&dir)).await.unwrap();
    let successes = sink.of_kind(AlertKind::Success);
    // Only the second "Found ..." line, no "[GENERATED TYPES]".
    assert_eq!(successes.len(), generated + 1);
    assert!(successes.last().unwrap().starts_with("Found"));
}

#[tokio::test]
async fn test_arbitrary_extensions_and_output_folder() {
    let dir = project();
    let options = ConfigOptions {
        allow_arbitrary_extensions: true,
        output_folder: Some(PathBuf::from("__generated__")),
        ..ConfigOptions::default()
    };
    let (pipeline, _sink) = pipeline(&dir, options);

    pipeline.generate(&pattern(&dir)).await.unwrap();

    assert!(dir
        .path()
        .join("__generated__/src/style.d.scss.ts")
        .exists());
    assert!(!output(&dir).exists());
}

#[tokio::test]
async fn test_list_different_up_to_date_then_missing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("only.scss"), ".only { color: red; }").unwrap();
    let pattern = format!("{}/only.scss", dir.path().display());
    let (pipeline, sink) = pipeline(&dir, ConfigOptions::default());

    pipeline.generate(&pattern).await.unwrap();
    let report = pipeline.list_different(&pattern).await.unwrap();
    assert!(!report.has_invalid());
    assert_eq!(report.exit_code(), 0);

    fs::remove_file(dir.path().join("only.scss.d.ts")).unwrap();
    let report = pipeline.list_different(&pattern).await.unwrap();
    assert_eq!(report.invalid().count(), 1);
    assert_eq!(report.verdicts[0].status, VerdictStatus::Missing);
    assert_eq!(report.exit_code(), 1);

    let invalid: Vec<String> = sink
        .of_kind(AlertKind::Error)
        .into_iter()
        .filter(|m| m.starts_with("[INVALID TYPES]"))
        .collect();
    assert_eq!(invalid.len(), 1);
    assert!(invalid[0].contains("needs to be generated"));
}

#[tokio::test]
async fn test_aliases_and_user_importers() {
    let dir = TempDir::new().unwrap();
    let write = |file: &str, contents: &str| {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    };
    write("lib/_theme.scss", ".theme-dark { color: red; }\n");
    write("vendor/buttons.scss", ".btn-primary { color: red; }\n");
    write("virtual/marker.scss", "");
    write(
        "src/app.scss",
        "@import '~theme';\n@import '@vendor/buttons';\n@import 'virtual:icons';\n.app { color: red; }\n",
    );

    fn virtual_icons(specifier: &str, ctx: &ImportContext<'_>) -> Option<PathBuf> {
        (specifier == "virtual:icons").then(|| ctx.cwd.join("virtual/marker.scss"))
    }

    struct IconLoader;
    impl Importer for IconLoader {
        fn canonicalize(&self, _specifier: &str, _ctx: &ImportContext<'_>) -> Option<PathBuf> {
            None
        }
        fn load(&self, path: &Path) -> Option<std::io::Result<String>> {
            path.ends_with("virtual/marker.scss")
                .then(|| Ok(".icon-star { color: red; }\n".to_string()))
        }
    }

    let options = ConfigOptions {
        aliases: [("~theme".to_string(), "theme".to_string())].into(),
        alias_prefixes: [("@vendor/".to_string(), "../vendor/".to_string())].into(),
        include_paths: vec![PathBuf::from("lib")],
        ..ConfigOptions::default()
    };
    let (pipeline, sink) = pipeline(&dir, options);
    let pipeline = pipeline.with_importers(vec![
        Arc::new(virtual_icons) as Arc<dyn Importer>,
        Arc::new(IconLoader),
    ]);

    let names = pipeline
        .file_to_class_names(&dir.path().join("src/app.scss"))
        .await
        .unwrap();
    assert_eq!(names, vec!["app", "btnPrimary", "iconStar", "themeDark"]);
    assert!(sink.entries().is_empty());
}

#[tokio::test]
async fn test_sass_variables_and_parent_selectors_are_declared() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("block.scss");
    fs::write(
        &file,
        "$c: red;\n.block { color: $c; &__elem { color: blue; } &--mod { color: green; } }\n",
    )
    .unwrap();
    let (pipeline, sink) = pipeline(&dir, ConfigOptions::default());

    pipeline.write_file(&file).await;

    let content = fs::read_to_string(dir.path().join("block.scss.d.ts")).unwrap();
    insta::assert_snapshot!(content, @r"
export declare const block: string;
export declare const blockElem: string;
export declare const blockMod: string;
");
    assert!(sink.of_kind(AlertKind::Error).is_empty());
}

#[tokio::test]
async fn test_relative_pattern_resolves_against_pipeline_cwd() {
    let dir = project();
    let (pipeline, sink) = pipeline(&dir, ConfigOptions::default());

    pipeline.generate("src/*.scss").await.unwrap();

    assert!(output(&dir).exists());
    assert!(sink.contains("Found 2 files. Generating type definitions..."));
    assert!(sink.contains("[GENERATED TYPES] src/style.scss.d.ts"));
    assert!(sink.of_kind(AlertKind::Error).is_empty());

    let report = pipeline.list_different("src/*.scss").await.unwrap();
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.verdicts[0].file, PathBuf::from("src/empty.scss"));
}
