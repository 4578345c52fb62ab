//! Watch mode.
//!
//! A glob cannot be subscribed to directly, so the session watches the glob's
//! base directory recursively and re-applies the pattern to every event path.

mod event;
mod session;

pub use event::WatchEvent;
pub use session::WatchSession;

use crate::error::Result;
use crate::glob::PatternMatcher;
use crate::pipeline::Pipeline;
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;
use tracing::trace;

/// Decides which event paths belong to the watched pattern and routes them
/// to the write or remove pipeline.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    matcher: PatternMatcher,
    pipeline: Pipeline,
    relative: bool,
}

impl Dispatcher {
    pub fn new(pattern: &str, pipeline: Pipeline) -> Result<Self> {
        let matcher = PatternMatcher::new(pattern, &pipeline.options().ignore)?;
        Ok(Self {
            relative: Path::new(pattern).is_relative(),
            matcher,
            pipeline,
        })
    }

    /// Directory to subscribe to, made absolute against the pipeline cwd.
    pub fn watch_root(&self) -> PathBuf {
        self.pipeline.cwd().join(self.matcher.base_directory())
    }

    /// The path as the pattern sees it, or `None` if it does not match.
    ///
    /// Absolute event paths are made relative to the cwd when the pattern
    /// itself is relative.
    pub fn matching_path(&self, path: &Path) -> Option<PathBuf> {
        let candidate = if self.relative && path.is_absolute() {
            path.strip_prefix(self.pipeline.cwd()).unwrap_or(path)
        } else {
            path
        };
        self.matcher
            .is_match(candidate)
            .then(|| candidate.to_path_buf())
    }

    /// Run the handler for `event` as its own task. Non-matching paths are
    /// dropped without a trace in the alerts.
    pub fn dispatch(&self, event: WatchEvent) -> Option<JoinHandle<()>> {
        let Some(path) = self.matching_path(event.path()) else {
            trace!(path = %event.path().display(), "Ignoring unmatched path");
            return None;
        };
        let event = event.with_path(path);
        let pipeline = self.pipeline.clone();

        Some(tokio::spawn(async move {
            pipeline
                .alerts()
                .info(format!("{} {}", event.label(), event.path().display()));
            match &event {
                WatchEvent::Change(path) | WatchEvent::Add(path) => pipeline.write_file(path).await,
                WatchEvent::Unlink(path) => pipeline.remove_file(path).await,
            }
        }))
    }
}

impl Pipeline {
    /// Start a watch session for `pattern`.
    ///
    /// Must be called from within a Tokio runtime. Unless `ignore_initial`
    /// is set, files already present are processed as if just added.
    pub fn watch(&self, pattern: &str) -> Result<WatchSession> {
        WatchSession::start(pattern, self.clone())
    }
}
