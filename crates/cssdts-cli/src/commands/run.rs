use crate::cli::Cli;
use crate::config::{load_config, merge_options, validate, PartialOptions};
use crate::error::{Result, ResultExt};
use crate::ui::{self, TerminalSink};
use cssdts::{Alerts, ConfigOptions, Pipeline};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

/// Execute the CLI: resolve options from every source, then [`run`].
pub async fn execute(args: Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to read the working directory")?;

    let file = load_config(args.config.as_deref(), &cwd)?;
    let options = merge_options(PartialOptions::from(&args), file);
    validate(&options)?;
    debug!(?options, "Resolved options");

    let alerts = Alerts::new(options.log_level, Arc::new(TerminalSink::new(ui::colors_enabled())));
    let pipeline = Pipeline::new(options, alerts).with_cwd(&cwd);

    run(&args.pattern, pipeline).await
}

/// Run the mode selected by the pipeline's options.
///
/// - `listDifferent`: check only; exit code 1 when any file is out of date
/// - `watch`: process changes until Ctrl+C
/// - otherwise: generate once
pub async fn run(pattern: &str, pipeline: Pipeline) -> Result<ExitCode> {
    let pattern = widen_pattern(pattern, pipeline.cwd());
    let options: &ConfigOptions = pipeline.options();

    if options.list_different {
        let report = pipeline.list_different(&pattern).await?;
        return Ok(ExitCode::from(report.exit_code()));
    }

    if options.watch {
        let mut session = pipeline.watch(&pattern)?;
        if options.log_level.allows(cssdts::AlertKind::Info) {
            ui::info("Press Ctrl+C to stop");
        }
        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for Ctrl+C")?;
        session.close();
        return Ok(ExitCode::SUCCESS);
    }

    pipeline.generate(&pattern).await?;
    Ok(ExitCode::SUCCESS)
}

/// A pattern naming an existing directory becomes `<dir>/**/*.scss`.
pub fn widen_pattern(pattern: &str, cwd: &Path) -> String {
    if cwd.join(pattern).is_dir() {
        let widened = format!("{}/**/*.scss", pattern.trim_end_matches('/'));
        debug!(pattern, widened, "Widened directory pattern");
        widened
    } else {
        pattern.to_string()
    }
}
