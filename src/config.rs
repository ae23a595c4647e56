// File: ./src/config.rs
// Handles configuration loading and defaults.
use crate::context::AppContext;
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::model::RawEvent;
use crate::storage::EventStorage;
use crate::telemetry::TelemetryMode;
use anyhow::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_DATA_SOURCE_URL: &str =
    "https://github.com/ethereum/ethereum-org-website/blob/dev/src/data/community-events.json";

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_data_source_url() -> String {
    DEFAULT_DATA_SOURCE_URL.to_string()
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub events_file: Option<PathBuf>,
    #[serde(default = "default_data_source_url")]
    pub data_source_url: String,
    #[serde(default)]
    pub telemetry: TelemetryMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            locale: None,
            events_file: None,
            data_source_url: default_data_source_url(),
            telemetry: TelemetryMode::default(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(e) if Self::is_missing_config_error(&e) => {
                log::debug!("No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Whether an error means the config file was missing, either via the
    /// explicit message or an `io::ErrorKind::NotFound` anywhere in the chain.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// Page size with the zero case replaced by the default.
    pub fn effective_page_size(&self) -> usize {
        if self.page_size == 0 {
            log::warn!(
                "page_size = 0 would never reveal anything, using {}",
                DEFAULT_PAGE_SIZE
            );
            return DEFAULT_PAGE_SIZE;
        }
        self.page_size
    }

    /// Where the event data lives: the configured file or the data dir default.
    pub fn events_path(&self, ctx: &dyn AppContext) -> Result<PathBuf> {
        match &self.events_file {
            Some(p) => Ok(p.clone()),
            None => ctx.get_events_path(),
        }
    }

    /// The event list to project: the events file when present, else the bundled one.
    pub fn load_events(&self, ctx: &dyn AppContext) -> Result<Vec<RawEvent>> {
        let path = self.events_path(ctx)?;
        if self.events_file.is_some() && !path.exists() {
            log::warn!("Event data file {:?} not found, using bundled events", path);
        }
        EventStorage::load_or_bundled(&path)
    }
}
