use crate::config::Config;
use crate::error::{EngineError, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::mpsc::channel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// Watching has started; callers typically do a full run here.
    Started,
    /// Matching files were created or modified during one debounce window.
    Changed(Vec<PathBuf>),
}

/// Watch the configured roots and call `on_event` for every debounced batch
/// of created or modified files.
///
/// This function blocks until the watcher shuts down.
///
/// # Errors
/// Returns an error if the watcher cannot be created or a root cannot be watched.
pub fn watch_loop<F>(config: &Config, mut on_event: F) -> Result<()>
where
    F: FnMut(WatchEvent),
{
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = tx.send(res);
    })?;

    for root in &config.walk.roots {
        if !root.exists() {
            return Err(EngineError::Config(format!("path does not exist: {}", root.display())));
        }
        watcher.watch(root, RecursiveMode::Recursive)?;
    }

    log::info!("watching {} path(s) for changes", config.walk.roots.len());
    on_event(WatchEvent::Started);

    let mut pending = BTreeSet::new();
    while let Ok(first) = rx.recv() {
        collect(first, config, &mut pending);

        // Debounce, then drain whatever arrived meanwhile
        std::thread::sleep(config.watch_interval);
        while let Ok(next) = rx.try_recv() {
            collect(next, config, &mut pending);
        }

        if !pending.is_empty() {
            on_event(WatchEvent::Changed(std::mem::take(&mut pending).into_iter().collect()));
        }
    }

    log::warn!("watcher channel closed");
    Ok(())
}

fn collect(res: notify::Result<Event>, config: &Config, pending: &mut BTreeSet<PathBuf>) {
    match res {
        Ok(event) => pending.extend(relevant_paths(event, config)),
        Err(err) => log::warn!("watcher error: {err}"),
    }
}

/// Paths of a create/modify event that pass the extension filter.
fn relevant_paths(event: Event, config: &Config) -> impl Iterator<Item = PathBuf> + '_ {
    let relevant = matches!(event.kind, EventKind::Any | EventKind::Create(_) | EventKind::Modify(_));
    event
        .paths
        .into_iter()
        .filter(move |p| relevant && config.matches_extension(p))
}
