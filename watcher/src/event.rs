//! Watch events over the pages directory.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A filesystem event relevant to map regeneration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapEvent {
    /// The kind of event.
    pub kind: MapEventKind,

    /// Path to the affected file or directory.
    pub path: PathBuf,

    /// When the event was observed.
    pub timestamp: DateTime<Utc>,
}

impl MapEvent {
    /// Create a new event stamped with the current time.
    pub fn new(kind: MapEventKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Kind of map event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapEventKind {
    /// A file was added.
    Added,

    /// A file was removed.
    Removed,

    /// A file's content or name changed.
    Changed,
}

impl MapEventKind {
    /// Map a raw `notify` event kind, dropping events that cannot change
    /// the generated map (access and metadata-only modifications).
    pub fn from_notify(kind: notify::EventKind) -> Option<Self> {
        use notify::EventKind;
        use notify::event::ModifyKind;

        match kind {
            EventKind::Create(_) => Some(Self::Added),
            EventKind::Remove(_) => Some(Self::Removed),
            EventKind::Modify(ModifyKind::Metadata(_)) => None,
            EventKind::Modify(_) => Some(Self::Changed),
            EventKind::Access(_) | EventKind::Any | EventKind::Other => None,
        }
    }
}

impl fmt::Display for MapEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
        };
        f.write_str(label)
    }
}
