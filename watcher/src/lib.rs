//! # Metadata Watch Driver
//!
//! Continuous-operation mode for the map generator: watch the pages
//! directory and regenerate the metadata map whenever descriptor files
//! are added, removed, or changed.
//!
//! The [`MetaWatcher`] turns raw `notify` events into [`MapEvent`]s on a
//! channel; [`driver::drive`] consumes them one batch at a time, so at
//! most one regeneration runs at once and rapid event bursts collapse
//! into a single pass.

pub mod driver;
pub mod error;
pub mod event;
pub mod watcher;

pub use driver::drive;
pub use error::{Result, WatcherError};
pub use event::{MapEvent, MapEventKind};
pub use watcher::MetaWatcher;
