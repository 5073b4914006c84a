//! Error types for the watch driver.

use thiserror::Error;

/// Result type alias for watcher operations.
pub type Result<T> = std::result::Result<T, WatcherError>;

/// Errors that can occur while watching the pages directory.
#[derive(Error, Debug)]
pub enum WatcherError {
    /// The watched directory does not exist.
    #[error("directory not found: {0}")]
    DirectoryNotFound(String),

    /// The watcher was already started.
    #[error("watcher already running for: {0}")]
    AlreadyWatching(String),

    /// Notify error.
    #[error("notify error: {0}")]
    Notify(#[from] notify::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
