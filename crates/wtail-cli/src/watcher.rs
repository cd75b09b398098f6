use std::path::Path;

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

/// The write-notification subscription could not be set up.
///
/// Fatal at startup, like a failed file open.
#[derive(Debug, thiserror::Error)]
#[error("failed to watch {path}: {source}")]
pub struct WatchError {
    pub path: String,
    #[source]
    pub source: notify::Error,
}

/// Keeps the platform watcher alive for as long as the tail runs.
///
/// Dropping this unsubscribes, which closes the wake channel and in
/// turn shuts the cursor down.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

/// Subscribe to write events on `path`, bridged into a single-slot
/// wake channel.
///
/// The bridge uses `try_send` and drops the signal when the slot is
/// already occupied: any number of writes before the consumer wakes
/// coalesce into one pending signal, which is sufficient because the
/// cursor always drains to short-read once woken. At least one signal
/// per write burst is the only guarantee the cursor relies on.
///
/// # Errors
///
/// Returns [`WatchError`] if the watcher cannot be created or the
/// path cannot be subscribed.
pub fn watch(path: &Path) -> Result<(FileWatcher, mpsc::Receiver<()>), WatchError> {
    let (wake_tx, wake_rx) = mpsc::channel(1);
    let wrap = |source| WatchError {
        path: path.display().to_string(),
        source,
    };

    let mut watcher = notify::recommended_watcher(move |event: Result<Event, notify::Error>| {
        match event {
            Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                // Slot full means a signal is already pending; drop.
                let _ = wake_tx.try_send(());
            }
            Ok(_) => {}
            Err(err) => tracing::warn!("watch event error: {err}"),
        }
    })
    .map_err(wrap)?;

    watcher
        .watch(path, RecursiveMode::NonRecursive)
        .map_err(wrap)?;

    Ok((FileWatcher { _watcher: watcher }, wake_rx))
}
