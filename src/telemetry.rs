// Usage-tracking events emitted by list interactions.
use crate::context::AppContext;
use crate::storage::EventStorage;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// A categorised interaction, as analytics back-ends expect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub event_category: String,
    pub event_action: String,
    pub event_name: String,
}

impl TrackingEvent {
    pub fn load_more() -> Self {
        Self {
            event_category: "more events button".to_string(),
            event_action: "click".to_string(),
            event_name: "load more".to_string(),
        }
    }
}

/// Delivers tracking events. Callers treat delivery as best-effort.
pub trait TelemetrySink {
    fn track(&self, event: &TrackingEvent) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TelemetrySink for NoopSink {
    fn track(&self, _event: &TrackingEvent) -> Result<()> {
        Ok(())
    }
}

/// Writes each event to the log at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TelemetrySink for LogSink {
    fn track(&self, event: &TrackingEvent) -> Result<()> {
        log::info!(
            "track: category='{}' action='{}' name='{}'",
            event.event_category,
            event.event_action,
            event.event_name
        );
        Ok(())
    }
}

/// Appends events as JSON lines to a file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn from_context(ctx: &dyn AppContext) -> Result<Self> {
        Ok(Self::new(ctx.get_telemetry_path()?))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TelemetrySink for FileSink {
    fn track(&self, event: &TrackingEvent) -> Result<()> {
        let line = serde_json::to_string(event)?;
        EventStorage::with_lock(&self.path, || {
            let mut file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .with_context(|| format!("Failed to open telemetry file: {:?}", self.path))?;
            writeln!(file, "{}", line)?;
            Ok(())
        })
    }
}

/// Which sink the application wires up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelemetryMode {
    #[default]
    Log,
    File,
    Off,
}

/// The sink chosen from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredSink {
    Log(LogSink),
    File(FileSink),
    Off(NoopSink),
}

impl ConfiguredSink {
    pub fn mode(&self) -> TelemetryMode {
        match self {
            ConfiguredSink::Log(_) => TelemetryMode::Log,
            ConfiguredSink::File(_) => TelemetryMode::File,
            ConfiguredSink::Off(_) => TelemetryMode::Off,
        }
    }
}

impl TelemetrySink for ConfiguredSink {
    fn track(&self, event: &TrackingEvent) -> Result<()> {
        match self {
            ConfiguredSink::Log(s) => s.track(event),
            ConfiguredSink::File(s) => s.track(event),
            ConfiguredSink::Off(s) => s.track(event),
        }
    }
}

/// Builds the configured sink. A file sink without a usable path degrades to logging.
pub fn sink_for(mode: TelemetryMode, ctx: &dyn AppContext) -> ConfiguredSink {
    match mode {
        TelemetryMode::Log => ConfiguredSink::Log(LogSink),
        TelemetryMode::Off => ConfiguredSink::Off(NoopSink),
        TelemetryMode::File => match FileSink::from_context(ctx) {
            Ok(sink) => ConfiguredSink::File(sink),
            Err(e) => {
                log::warn!("Telemetry file unavailable, logging instead: {}", e);
                ConfiguredSink::Log(LogSink)
            }
        },
    }
}
