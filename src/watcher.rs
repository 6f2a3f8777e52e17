//! Report file watching.
//!
//! The upstream pipeline regenerates res.json in place; watching it lets
//! the dashboard pick up a new report without restarting.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

/// Set up a file watcher that flags `needs_reload` whenever the report file
/// changes. Returns `None` when watching is unavailable; the dashboard still
/// works, it just won't auto-refresh.
pub fn setup_report_watcher(
    report_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    // Canonicalize for reliable comparison; editors and the upstream
    // pipeline often replace the file rather than writing in place.
    let canonical = report_path.canonicalize().unwrap_or_else(|_| report_path.clone());
    let file_name = report_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            let Ok(event) = res else { return };
            let matches = event.paths.iter().any(|p| {
                if let Ok(c) = p.canonicalize() {
                    if c == canonical {
                        return true;
                    }
                }
                // Fall back to filename comparison for replaced files
                match (&file_name, p.file_name()) {
                    (Some(expected), Some(actual)) => expected == actual,
                    _ => false,
                }
            });
            if matches {
                if let Ok(mut flag) = needs_reload.lock() {
                    *flag = true;
                }
            }
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            // Watch the parent directory since replacement creates a new
            // inode. A bare filename has an empty parent; that means the
            // current directory.
            let target = match report_path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            };
            watcher.watch(&target, RecursiveMode::NonRecursive).ok()?;
            Some(watcher)
        }
        Err(_) => None,
    }
}
