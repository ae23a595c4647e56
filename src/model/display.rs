// File: ./src/model/display.rs
use crate::model::event::{DisplayEvent, RawEvent};
use crate::model::parser::{PointInTime, parse_date};
use chrono::NaiveDate;

pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Turns a calendar date into text for the reader's locale.
pub trait DateFormatter {
    fn format_date(&self, date: NaiveDate) -> String;

    fn format_point(&self, point: &PointInTime) -> String {
        match point.date() {
            Some(d) => self.format_date(d),
            None => INVALID_DATE_LABEL.to_string(),
        }
    }
}

/// Formats dates with the `date_format` pattern of a resolved locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDateFormatter {
    locale: String,
}

impl LocaleDateFormatter {
    pub fn new(requested: &str) -> Self {
        Self {
            locale: crate::locale::resolve_locale(requested),
        }
    }

    /// Uses the configured locale if any, otherwise the system one.
    pub fn from_config(locale: Option<&str>) -> Self {
        match locale {
            Some(l) => Self::new(l),
            None => Self::new(&crate::locale::system_locale()),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl DateFormatter for LocaleDateFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        let pattern = rust_i18n::t!("date_format", locale = self.locale.as_str());
        date.format(&pattern).to_string()
    }
}

/// `YYYY-MM-DD` regardless of locale. Handy for machine output and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDateFormatter;

impl DateFormatter for IsoDateFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

pub trait EventDisplay {
    fn date_label(&self, formatter: &dyn DateFormatter) -> String;
    fn formatted_details(&self) -> String;
    fn to_display(&self, formatter: &dyn DateFormatter) -> DisplayEvent;
}

impl EventDisplay for RawEvent {
    fn date_label(&self, formatter: &dyn DateFormatter) -> String {
        let start = formatter.format_point(&parse_date(&self.start_date));
        if self.is_single_day() {
            return start;
        }
        let end = formatter.format_point(&parse_date(&self.end_date));
        format!("{} - {}", start, end)
    }

    fn formatted_details(&self) -> String {
        self.description.clone()
    }

    fn to_display(&self, formatter: &dyn DateFormatter) -> DisplayEvent {
        DisplayEvent {
            title: self.title.clone(),
            to: self.to.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            date: self.date_label(formatter),
            formatted_details: self.formatted_details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_day_has_no_separator() {
        let ev = RawEvent::new("Meetup", "2024-06-01", "2024-06-01");
        assert_eq!(ev.date_label(&IsoDateFormatter), "2024-06-01");
    }

    #[test]
    fn test_range_is_joined() {
        let ev = RawEvent::new("Conf", "2024-06-01", "2024-06-03");
        assert_eq!(ev.date_label(&IsoDateFormatter), "2024-06-01 - 2024-06-03");
    }

    #[test]
    fn test_same_day_by_text_only() {
        // Different text, same day: still rendered as a range.
        let ev = RawEvent::new("Conf", "2024-06-01", "2024-6-1");
        assert_eq!(ev.date_label(&IsoDateFormatter), "2024-06-01 - 2024-06-01");
    }

    #[test]
    fn test_invalid_dates_render_label() {
        let ev = RawEvent::new("Broken", "soon", "2024-06-03");
        assert_eq!(
            ev.date_label(&IsoDateFormatter),
            "Invalid Date - 2024-06-03"
        );
    }

    #[test]
    fn test_display_copies_fields() {
        let mut ev = RawEvent::new("Conf", "2024-06-01", "2024-06-03");
        ev.to = "https://conf.example".to_string();
        ev.location = "Berlin".to_string();
        ev.description = "Talks and workshops".to_string();

        let d = ev.to_display(&IsoDateFormatter);
        assert_eq!(d.title, "Conf");
        assert_eq!(d.to, "https://conf.example");
        assert_eq!(d.location, "Berlin");
        assert_eq!(d.description, "Talks and workshops");
        assert_eq!(d.formatted_details, "Talks and workshops");
        assert_eq!(d.start_date, "2024-06-01");
        assert_eq!(d.end_date, "2024-06-03");
    }
}
