//! Persisted calibration value.
//!
//! The single durable piece of state in the tool: how many hours a
//! maximum-complexity story takes for this team. Stored as a small JSON
//! file under the platform config directory and reused on every start
//! until the user recalibrates.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

/// Suggested value shown when no calibration has ever been saved.
pub const DEFAULT_MAX_COMPLEXITY_HOURS: f64 = 16.0;

#[derive(Debug, Serialize, Deserialize)]
struct CalibrationFile {
    #[serde(rename = "maxComplexityHours")]
    max_complexity_hours: f64,
}

/// Read/write/clear access to the stored calibration value.
#[derive(Debug, Clone)]
pub struct CalibrationStore {
    path: PathBuf,
}

impl CalibrationStore {
    /// Store under the platform config directory
    /// (e.g. `~/.config/sprint-lens/calibration.json`).
    pub fn open_default() -> io::Result<Self> {
        let base = dirs::config_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no config directory on this platform")
        })?;
        Ok(Self::at_path(base.join("sprint-lens").join("calibration.json")))
    }

    /// Store backed by an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the stored value. A missing file is not an error; a stored
    /// value that is not a positive finite number is treated as absent.
    pub fn load(&self) -> io::Result<Option<f64>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let file: CalibrationFile = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let hours = file.max_complexity_hours;
        if hours.is_finite() && hours > 0.0 {
            Ok(Some(hours))
        } else {
            Ok(None)
        }
    }

    /// Persist a new calibration value, creating parent directories on
    /// first use.
    pub fn save(&self, hours: f64) -> io::Result<()> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("calibration must be a positive number of hours, got {hours}"),
            ));
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = CalibrationFile {
            max_complexity_hours: hours,
        };
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, content)
    }

    /// Remove the stored value. Clearing an already-empty store is fine.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> CalibrationStore {
        CalibrationStore::at_path(dir.path().join("nested").join("calibration.json"))
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.save(16.5).unwrap();
        assert_eq!(store.load().unwrap(), Some(16.5));
        // Recalibration overwrites
        store.save(40.0).unwrap();
        assert_eq!(store.load().unwrap(), Some(40.0));
    }

    #[test]
    fn test_save_rejects_non_positive() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.save(0.0).is_err());
        assert!(store.save(-3.0).is_err());
        assert!(store.save(f64::NAN).is_err());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_load_treats_bad_stored_value_as_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("calibration.json");
        std::fs::write(&path, r#"{"maxComplexityHours": -1.0}"#).unwrap();
        let store = CalibrationStore::at_path(path);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("calibration.json");
        std::fs::write(&path, "not json").unwrap();
        let store = CalibrationStore::at_path(path);
        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.clear().unwrap(); // clearing an empty store is fine
        store.save(16.0).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
