// Event records: the raw conference entries and their display-ready projection.
use serde::{Deserialize, Serialize};

/// A community-conference entry as it appears in the event data file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub title: String,
    pub to: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl RawEvent {
    pub fn new(title: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            title: title.to_string(),
            to: String::new(),
            location: String::new(),
            description: String::new(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        }
    }

    pub fn is_single_day(&self) -> bool {
        self.start_date == self.end_date
    }
}

/// An upcoming event ready to be shown: the raw fields plus rendered copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEvent {
    pub title: String,
    pub to: String,
    pub location: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    /// Localized date, or "start - end" for multi-day events.
    pub date: String,
    pub formatted_details: String,
}
