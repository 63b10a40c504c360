//! Storage collaborators for the leaderboard.
//!
//! The engine hands storage an opaque text blob and gets one back; it
//! does not care where the bytes live.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Load/save contract for the persisted leaderboard.
pub trait LeaderboardStorage {
    /// Read the stored text. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> io::Result<Option<String>>;

    /// Replace the stored text.
    fn save(&mut self, contents: &str) -> io::Result<()>;
}

/// Stores the leaderboard in a JSON file on disk.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStorage for JsonFileStorage {
    fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&mut self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        // Write-then-rename: readers see the old file or the new one.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)
    }
}

/// In-memory storage for tests and hosts without a filesystem.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
    fail_writes: bool,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// Make every `save` fail with a permission error.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl LeaderboardStorage for MemoryStorage {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn save(&mut self, contents: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "storage is read-only",
            ));
        }
        self.contents = Some(contents.to_owned());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.load().unwrap(), None);

        storage.save("[]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_memory_storage_failing_writes() {
        let mut storage = MemoryStorage::with_contents("[]").failing_writes();
        assert!(storage.save("x").is_err());
        assert_eq!(storage.contents(), Some("[]"));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let path = std::env::temp_dir().join(format!(
            "flip-a-pair-missing-{}.json",
            std::process::id()
        ));
        let storage = JsonFileStorage::new(&path);
        assert_eq!(storage.load().unwrap(), None);
    }
}
