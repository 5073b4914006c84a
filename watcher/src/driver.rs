//! Serialized regeneration loop.
//!
//! The driver owns a single regeneration slot: events that arrive while
//! a run is in flight accumulate on the channel and are drained into the
//! next pass, so runs never overlap and never race each other's writes.

use std::future::Future;

use tokio::sync::mpsc;
use tracing::info;

use crate::event::MapEvent;

/// Consume events until the channel closes, invoking `regenerate` once
/// per batch. Events that arrive while a regeneration is running are
/// coalesced into the next pass.
pub async fn drive<F, Fut>(mut events: mpsc::Receiver<MapEvent>, mut regenerate: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    while let Some(event) = events.recv().await {
        let mut batch = 1usize;
        while events.try_recv().is_ok() {
            batch += 1;
        }

        info!(
            "descriptor {} at {} ({batch} event(s)), regenerating map",
            event.kind,
            event.path.display()
        );
        regenerate().await;
    }
}
