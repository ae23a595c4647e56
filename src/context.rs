// File: ./src/context.rs
//! Where the application keeps its files.
//!
//! Three files matter: `config.toml` in the config directory, and the event
//! data (`community-events.json`) plus the telemetry log (`telemetry.jsonl`)
//! in the data directory. [`StandardContext`] resolves both directories from
//! the platform conventions or from a `--root` override; [`TestContext`] keeps
//! them in a throwaway temp directory.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const EVENTS_FILE_NAME: &str = "community-events.json";
pub const TELEMETRY_FILE_NAME: &str = "telemetry.jsonl";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    Data,
    Config,
}

impl DirKind {
    fn subdir(self) -> &'static str {
        match self {
            DirKind::Data => "data",
            DirKind::Config => "config",
        }
    }
}

/// Resolves the data and config directories; file locations derive from them.
pub trait AppContext: Send + Sync + std::fmt::Debug {
    fn dir(&self, kind: DirKind) -> Result<PathBuf>;

    fn get_data_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::Data)
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::Config)
    }

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Event data dropped next to the app; overrides the bundled list.
    fn get_events_path(&self) -> Result<PathBuf> {
        Ok(self.get_data_dir()?.join(EVENTS_FILE_NAME))
    }

    fn get_telemetry_path(&self) -> Result<PathBuf> {
        Ok(self.get_data_dir()?.join(TELEMETRY_FILE_NAME))
    }
}

fn create_dir(path: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create directory: {:?}", path))?;
    Ok(path)
}

fn under_root(root: &Path, kind: DirKind) -> Result<PathBuf> {
    create_dir(root.join(kind.subdir()))
}

#[derive(Clone, Debug, Default)]
pub struct StandardContext {
    root: Option<PathBuf>,
}

impl StandardContext {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }
}

impl AppContext for StandardContext {
    fn dir(&self, kind: DirKind) -> Result<PathBuf> {
        if let Some(root) = &self.root {
            return under_root(root, kind);
        }
        let proj = ProjectDirs::from("org", "community", "upcoming-events")
            .ok_or_else(|| anyhow::anyhow!("No home directory"))?;
        let path = match kind {
            DirKind::Data => proj.data_dir(),
            DirKind::Config => proj.config_dir(),
        };
        create_dir(path.to_path_buf())
    }
}

/// Unique temp root, removed on drop.
#[derive(Clone, Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("upcoming_events_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&root).expect("temp root for TestContext");
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn dir(&self, kind: DirKind) -> Result<PathBuf> {
        under_root(&self.root, kind)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
