use super::files::{atomic_write, ensure_dir, read_file};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Record holding the full date -> tasks mapping
pub const ALL_TASKS_KEY: &str = "allTasks";

/// Record holding the lifetime completed-task counter
pub const TOTAL_COMPLETED_KEY: &str = "totalCompletedTasks";

/// String-valued key-value storage backed by one file per record
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open storage rooted at `dir`, creating the directory if needed
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    fn record_path(&self, key: &str) -> PathBuf {
        match key {
            ALL_TASKS_KEY => self.dir.join(format!("{}.json", key)),
            _ => self.dir.join(key),
        }
    }

    /// Read a record, `None` when it has never been written
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        read_file(self.record_path(key))
    }

    /// Replace a record atomically
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.record_path(key), value)
    }

    /// Move an unreadable record to `<file>.bad`, replacing any older backup
    pub fn set_aside(&self, key: &str) -> Result<PathBuf> {
        let path = self.record_path(key);
        let mut backup = path.clone().into_os_string();
        backup.push(".bad");
        let backup = PathBuf::from(backup);

        fs::rename(&path, &backup)
            .with_context(|| format!("Failed to move {} aside", path.display()))?;
        Ok(backup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_record_is_none() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::open(temp_dir.path()).unwrap();
        assert!(storage.get(ALL_TASKS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::open(temp_dir.path()).unwrap();

        storage.set(TOTAL_COMPLETED_KEY, "7").unwrap();
        assert_eq!(storage.get(TOTAL_COMPLETED_KEY).unwrap().as_deref(), Some("7"));
        assert!(temp_dir.path().join("totalCompletedTasks").exists());
    }

    #[test]
    fn test_tasks_record_is_json_file() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::open(temp_dir.path()).unwrap();

        storage.set(ALL_TASKS_KEY, "{}").unwrap();
        assert!(temp_dir.path().join("allTasks.json").exists());
    }

    #[test]
    fn test_open_creates_dir() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path().join("data");
        Storage::open(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_set_aside_moves_record() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::open(temp_dir.path()).unwrap();
        storage.set(ALL_TASKS_KEY, "garbage").unwrap();

        let backup = storage.set_aside(ALL_TASKS_KEY).unwrap();

        assert_eq!(backup, temp_dir.path().join("allTasks.json.bad"));
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "garbage");
        assert!(storage.get(ALL_TASKS_KEY).unwrap().is_none());
    }
}
