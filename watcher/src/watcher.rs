//! Filesystem watcher over the pages directory.

use std::path::PathBuf;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::error::{Result, WatcherError};
use crate::event::{MapEvent, MapEventKind};

/// Watches the pages directory and emits [`MapEvent`]s.
///
/// The watcher reports future events only; pre-existing files never show
/// up as an initial backlog. It is the single long-lived stateful object
/// of watch mode: acquired at watch-start, released on [`stop`] or drop.
///
/// [`stop`]: MetaWatcher::stop
pub struct MetaWatcher {
    /// Directory being watched.
    root: PathBuf,

    /// Internal notify watcher, present while watching.
    watcher: Option<RecommendedWatcher>,

    /// Event sender handed to the notify callback.
    event_tx: mpsc::Sender<MapEvent>,

    /// Event receiver, taken once by the driver.
    event_rx: Option<mpsc::Receiver<MapEvent>>,
}

impl MetaWatcher {
    /// Create a watcher for the given directory. Nothing is watched until
    /// [`start`](MetaWatcher::start) is called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(256);

        Self {
            root: root.into(),
            watcher: None,
            event_tx,
            event_rx: Some(event_rx),
        }
    }

    /// Start watching the directory recursively.
    pub fn start(&mut self) -> Result<()> {
        if self.watcher.is_some() {
            return Err(WatcherError::AlreadyWatching(
                self.root.display().to_string(),
            ));
        }

        if !self.root.is_dir() {
            return Err(WatcherError::DirectoryNotFound(
                self.root.display().to_string(),
            ));
        }

        let event_tx = self.event_tx.clone();
        let mut watcher = notify::recommended_watcher(
            move |res: std::result::Result<notify::Event, notify::Error>| match res {
                Ok(event) => {
                    let Some(kind) = MapEventKind::from_notify(event.kind) else {
                        return;
                    };
                    for path in event.paths {
                        if event_tx.blocking_send(MapEvent::new(kind, path)).is_err() {
                            error!("event channel closed, dropping watch event");
                        }
                    }
                }
                Err(e) => {
                    error!("watch error: {e}");
                }
            },
        )?;

        watcher.watch(&self.root, RecursiveMode::Recursive)?;
        self.watcher = Some(watcher);
        info!("watching {}", self.root.display());

        Ok(())
    }

    /// Take the event receiver. Returns `None` after the first call.
    pub fn take_events(&mut self) -> Option<mpsc::Receiver<MapEvent>> {
        self.event_rx.take()
    }

    /// Whether the watcher is currently running.
    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }

    /// Stop watching and release the watch handle.
    pub fn stop(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            let _ = watcher.unwatch(&self.root);
            info!("stopped watching {}", self.root.display());
        }
    }
}
