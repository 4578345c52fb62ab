use super::{Dispatcher, WatchEvent};
use crate::discovery::list_files_and_perform_sanity_checks;
use crate::error::Result;
use crate::pipeline::Pipeline;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// A live subscription to filesystem changes for one pattern.
///
/// Dropping the session or calling [`WatchSession::close`] releases the
/// watcher. Handlers already started keep running to completion.
pub struct WatchSession {
    watcher: Option<RecommendedWatcher>,
    pump: JoinHandle<()>,
    root: PathBuf,
}

impl WatchSession {
    pub(super) fn start(pattern: &str, pipeline: Pipeline) -> Result<Self> {
        let files = list_files_and_perform_sanity_checks(
            pattern,
            &pipeline.options().ignore,
            pipeline.cwd(),
            pipeline.alerts(),
        )?;
        let ignore_initial = pipeline.options().ignore_initial;
        pipeline.alerts().success("Watching files...");

        let dispatcher = Dispatcher::new(pattern, pipeline)?;
        let root = existing_ancestor(&dispatcher.watch_root());
        debug!(pattern, root = %root.display(), "Starting watcher");

        let (tx, mut rx) = mpsc::unbounded_channel::<WatchEvent>();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                for change in WatchEvent::from_notify(&event) {
                    // Receiver gone means the session is closing.
                    let _ = tx.send(change);
                }
            }
            Err(e) => warn!("Watcher error: {e}"),
        })?;
        watcher.watch(&root, RecursiveMode::Recursive)?;

        if !ignore_initial {
            for file in files {
                dispatcher.dispatch(WatchEvent::Add(file));
            }
        }

        let pump = tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                dispatcher.dispatch(event);
            }
            debug!("Watch event stream ended");
        });

        Ok(Self {
            watcher: Some(watcher),
            pump,
            root,
        })
    }

    /// The directory being watched: the pattern's base directory, or its
    /// nearest existing ancestor.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_closed(&self) -> bool {
        self.watcher.is_none()
    }

    /// Stop receiving events.
    pub fn close(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            drop(watcher);
            self.pump.abort();
            debug!(root = %self.root.display(), "Watch session closed");
        }
    }
}

/// `dir` itself, or its closest ancestor that exists when it does not.
/// Events under the ancestor still pass through the pattern, so the session
/// picks the base directory up once it is created.
fn existing_ancestor(dir: &Path) -> PathBuf {
    match dir.ancestors().find(|candidate| candidate.is_dir()) {
        Some(found) if found != dir => {
            debug!(missing = %dir.display(), watching = %found.display(), "Base directory missing");
            found.to_path_buf()
        }
        _ => dir.to_path_buf(),
    }
}

impl Drop for WatchSession {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for WatchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchSession")
            .field("root", &self.root)
            .field("closed", &self.is_closed())
            .finish()
    }
}
