use std::time::Duration;

use flume::Sender;
use tokio::task::JoinHandle;

use crate::event::events::Event;

/// Spawns the 1-second progress clock feeding [`Event::ProgressTick`] into the
/// app's event channel. The caller keys the handle through its task manager so
/// starting playback replaces (and aborts) any previous clock; at most one is
/// ever live. The clock is not torn down on pause, the transport simply
/// ignores ticks while paused.
pub fn spawn_tick_clock(event_tx: Sender<Event>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // The first tick of a tokio interval completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            if event_tx.send_async(Event::ProgressTick).await.is_err() {
                break;
            }
        }
    })
}
