use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind};
use std::path::{Path, PathBuf};

/// A filesystem change, reduced to the three cases the pipeline reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    Change(PathBuf),
    Add(PathBuf),
    Unlink(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::Change(p) | WatchEvent::Add(p) | WatchEvent::Unlink(p) => p,
        }
    }

    /// Same kind of event for a different path.
    pub fn with_path(&self, path: PathBuf) -> Self {
        match self {
            WatchEvent::Change(_) => WatchEvent::Change(path),
            WatchEvent::Add(_) => WatchEvent::Add(path),
            WatchEvent::Unlink(_) => WatchEvent::Unlink(path),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WatchEvent::Change(_) => "[CHANGED]",
            WatchEvent::Add(_) => "[ADDED]",
            WatchEvent::Unlink(_) => "[REMOVED]",
        }
    }

    /// Translate a notify event. Renames become an unlink of the old path
    /// and an add of the new one; access and other events are dropped.
    pub fn from_notify(event: &Event) -> Vec<WatchEvent> {
        let paths = event.paths.iter().cloned();
        match event.kind {
            EventKind::Create(_) => paths.map(WatchEvent::Add).collect(),
            EventKind::Remove(_) => paths.map(WatchEvent::Unlink).collect(),
            EventKind::Modify(ModifyKind::Name(mode)) => match mode {
                RenameMode::From => paths.map(WatchEvent::Unlink).collect(),
                RenameMode::To => paths.map(WatchEvent::Add).collect(),
                RenameMode::Both => {
                    let mut out = Vec::with_capacity(2);
                    if let Some(from) = event.paths.first() {
                        out.push(WatchEvent::Unlink(from.clone()));
                    }
                    if let Some(to) = event.paths.get(1) {
                        out.push(WatchEvent::Add(to.clone()));
                    }
                    out
                }
                _ => paths
                    .map(|p| {
                        if p.exists() {
                            WatchEvent::Add(p)
                        } else {
                            WatchEvent::Unlink(p)
                        }
                    })
                    .collect(),
            },
            EventKind::Modify(_) => paths.map(WatchEvent::Change).collect(),
            _ => Vec::new(),
        }
    }
}
