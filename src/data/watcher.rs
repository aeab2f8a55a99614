//! Polling watcher for the status file.
//!
//! The expert advisor rewrites the file in place each bar, so a poll may
//! race a half-finished write. Every read or parse failure is treated as
//! "not readable yet": the outcome is skipped, the recorded modification
//! time is left alone, and the next tick retries.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};

use crate::config::HUD;
use crate::data::status::StatusSnapshot;

/// Result of one refresh attempt. Error detail is logged and discarded;
/// callers only need to know whether there is a new snapshot to display.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The file changed and parsed; show this snapshot.
    Updated(StatusSnapshot),
    /// Modification time matches the last successful read; nothing to do.
    Unchanged,
    /// No status file yet; the expert advisor has not exported one.
    Missing,
    /// The file changed but could not be read or parsed (typically a
    /// mid-write race). Keep the previous display and retry next tick.
    Skipped,
}

/// Watches `<files_dir>/hud_status.json` by modification time.
pub struct StatusWatcher {
    path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl StatusWatcher {
    pub fn new(files_dir: &Path) -> Self {
        Self {
            path: files_dir.join(HUD.status_file_name),
            last_modified: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// One bounded unit of work: stat, compare, and at most one read+parse.
    ///
    /// The modification time is recorded only after a successful parse, so
    /// a payload that was caught mid-write is retried even if the writer
    /// never touches the file again.
    pub fn poll(&mut self) -> RefreshOutcome {
        let Ok(metadata) = std::fs::metadata(&self.path) else {
            return RefreshOutcome::Missing;
        };
        let Ok(modified) = metadata.modified() else {
            // No mtime on this filesystem; treat like an unreadable file.
            return RefreshOutcome::Skipped;
        };

        if self.last_modified == Some(modified) {
            return RefreshOutcome::Unchanged;
        }

        match read_snapshot(&self.path) {
            Ok(snapshot) => {
                self.last_modified = Some(modified);
                RefreshOutcome::Updated(snapshot)
            }
            Err(err) => {
                log::debug!("Status file not readable yet: {:#}", err);
                RefreshOutcome::Skipped
            }
        }
    }
}

fn read_snapshot(path: &Path) -> Result<StatusSnapshot> {
    let raw = std::fs::read_to_string(path)
        .context(format!("Failed to read status file: {}", path.display()))?;
    let snapshot = serde_json::from_str(&raw)
        .context(format!("Failed to parse status file: {}", path.display()))?;
    Ok(snapshot)
}

/// Resolves the directory holding the status file.
///
/// An explicit argument wins; otherwise prefer the conventional
/// `MQL5/Files` export location under the working directory when it
/// exists, else the working directory itself.
pub fn resolve_files_dir(arg: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(dir) = arg {
        return dir.to_path_buf();
    }
    let candidate = HUD
        .default_export_subdir
        .iter()
        .fold(cwd.to_path_buf(), |dir, part| dir.join(part));
    if candidate.is_dir() {
        candidate
    } else {
        cwd.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::Duration;

    use tempfile::TempDir;

    const VALID: &str = r#"{"symbol":"EURUSD","timeframe":"H1","time":"2024-01-01 10:00"}"#;

    fn write_status(dir: &TempDir, contents: &str, mtime_secs: u64) -> PathBuf {
        let path = dir.path().join(HUD.status_file_name);
        fs::write(&path, contents).unwrap();
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(mtime_secs);
        File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(mtime)
            .unwrap();
        path
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let mut watcher = StatusWatcher::new(dir.path());

        assert_eq!(watcher.poll(), RefreshOutcome::Missing);
        assert_eq!(watcher.poll(), RefreshOutcome::Missing);
    }

    #[test]
    fn fresh_file_updates_then_holds_steady() {
        let dir = TempDir::new().unwrap();
        write_status(&dir, VALID, 1_000);
        let mut watcher = StatusWatcher::new(dir.path());

        match watcher.poll() {
            RefreshOutcome::Updated(snapshot) => assert_eq!(snapshot.symbol, "EURUSD"),
            other => panic!("expected Updated, got {:?}", other),
        }

        // Same mtime: no re-read, no re-parse.
        assert_eq!(watcher.poll(), RefreshOutcome::Unchanged);
        assert_eq!(watcher.poll(), RefreshOutcome::Unchanged);
    }

    #[test]
    fn rewrite_with_new_mtime_is_picked_up() {
        let dir = TempDir::new().unwrap();
        write_status(&dir, VALID, 1_000);
        let mut watcher = StatusWatcher::new(dir.path());
        assert!(matches!(watcher.poll(), RefreshOutcome::Updated(_)));

        write_status(&dir, r#"{"symbol":"GBPUSD"}"#, 2_000);
        match watcher.poll() {
            RefreshOutcome::Updated(snapshot) => assert_eq!(snapshot.symbol, "GBPUSD"),
            other => panic!("expected Updated, got {:?}", other),
        }
    }

    #[test]
    fn truncated_write_is_skipped_and_retried() {
        let dir = TempDir::new().unwrap();
        write_status(&dir, r#"{"symbol":"EURUS"#, 1_000);
        let mut watcher = StatusWatcher::new(dir.path());

        assert_eq!(watcher.poll(), RefreshOutcome::Skipped);

        // The writer finishes the file without the mtime moving forward;
        // the watcher still retries because nothing was recorded.
        write_status(&dir, VALID, 1_000);
        assert!(matches!(watcher.poll(), RefreshOutcome::Updated(_)));
        assert_eq!(watcher.poll(), RefreshOutcome::Unchanged);
    }

    #[test]
    fn explicit_directory_argument_wins() {
        let dir = TempDir::new().unwrap();
        let arg = dir.path().join("elsewhere");
        let resolved = resolve_files_dir(Some(&arg), dir.path());
        assert_eq!(resolved, arg);
    }

    #[test]
    fn default_prefers_conventional_export_subdir() {
        let dir = TempDir::new().unwrap();
        let export = dir.path().join("MQL5").join("Files");
        fs::create_dir_all(&export).unwrap();

        assert_eq!(resolve_files_dir(None, dir.path()), export);
    }

    #[test]
    fn default_falls_back_to_working_directory() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_files_dir(None, dir.path()), dir.path());
    }
}
