// File: ./src/storage.rs
// Reads event data: an on-disk file when present, otherwise the bundled list.
use crate::model::RawEvent;
use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

/// The community event list shipped with the binary.
const BUNDLED_EVENTS: &str = include_str!("../data/community-events.json");

pub struct EventStorage;

impl EventStorage {
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    fn open_lock_file(file_path: &Path) -> Result<fs::File> {
        let lock_path = Self::get_lock_path(file_path);
        fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file: {:?}", lock_path))
    }

    /// Runs `f` while holding an exclusive lock next to `file_path`.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let file = Self::open_lock_file(file_path)?;
        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Shared (reader) variant of [`EventStorage::with_lock`].
    pub fn with_shared_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let file = Self::open_lock_file(file_path)?;
        file.lock_shared()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Parses a JSON array of event records.
    pub fn from_json_str(json: &str) -> Result<Vec<RawEvent>> {
        let events: Vec<RawEvent> =
            serde_json::from_str(json).context("Failed to parse event data")?;
        Ok(events)
    }

    pub fn bundled() -> Result<Vec<RawEvent>> {
        Self::from_json_str(BUNDLED_EVENTS).context("Bundled event data is corrupt")
    }

    /// Loads events from an existing file at `path`.
    pub fn load(path: &Path) -> Result<Vec<RawEvent>> {
        let events = Self::with_shared_lock(path, || {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read event data: {:?}", path))?;
            Self::from_json_str(&json).with_context(|| format!("In file {:?}", path))
        })?;

        log::debug!("Loaded {} events from {:?}", events.len(), path);
        Ok(events)
    }

    /// Loads `path` if it exists, otherwise the bundled list.
    pub fn load_or_bundled(path: &Path) -> Result<Vec<RawEvent>> {
        if path.exists() {
            return Self::load(path);
        }
        log::debug!("No event file at {:?}, using bundled events", path);
        Self::bundled()
    }
}
