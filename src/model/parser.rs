// File: ./src/model/parser.rs
//! Lenient `YYYY-MM-DD` parsing into comparable points in time.
//!
//! Parsing never fails. Segments that hold no digits, or dates outside the
//! representable calendar, produce an invalid [`PointInTime`] which compares
//! below every valid one and is never "after" anything.
use chrono::{Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt;

/// A local wall-clock instant, or an invalid one.
///
/// The derived ordering puts invalid points first, which is what the sort
/// step relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointInTime(Option<NaiveDateTime>);

impl PointInTime {
    pub const INVALID: PointInTime = PointInTime(None);

    pub fn from_local(dt: NaiveDateTime) -> Self {
        Self(Some(dt))
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn local(&self) -> Option<NaiveDateTime> {
        self.0
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0.map(|dt| dt.date())
    }

    /// Strict comparison where an invalid point on either side is never after.
    pub fn is_after(&self, other: &PointInTime) -> bool {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    }

    /// Shifts by whole calendar days; invalid stays invalid.
    pub fn minus_days(&self, days: i64) -> PointInTime {
        let shifted = self
            .0
            .zip(TimeDelta::try_days(days))
            .and_then(|(dt, delta)| dt.checked_sub_signed(delta));
        PointInTime(shifted)
    }
}

impl fmt::Display for PointInTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            None => write!(f, "Invalid Date"),
        }
    }
}

/// Reads the leading integer of `s`: optional whitespace, optional sign, digits.
/// Anything after the digits is ignored. No digits yields `None`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Builds local midnight for `year`/`month_index`/`day` the way a calendar
/// constructor does: month and day roll over into neighbouring months/years.
fn local_midnight(year: i64, month_index: i64, day: i64) -> Option<NaiveDateTime> {
    // Two-digit years are 20th century.
    let year = if (0..=99).contains(&year) {
        year + 1900
    } else {
        year
    };

    let base = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)?;
    let months = u32::try_from(month_index.unsigned_abs()).ok()?;
    let with_month = if month_index >= 0 {
        base.checked_add_months(Months::new(months))?
    } else {
        base.checked_sub_months(Months::new(months))?
    };
    let with_day = with_month.checked_add_signed(TimeDelta::try_days(day - 1)?)?;

    Some(with_day.and_time(NaiveTime::MIN))
}

/// Parses a `YYYY-MM-DD` date string into local midnight of that day.
pub fn parse_date(date_string: &str) -> PointInTime {
    let mut parts = date_string.split('-');
    let mut next = || parts.next().and_then(parse_leading_int);

    let (year, month, day) = (next(), next(), next());
    match (year, month, day) {
        (Some(y), Some(m), Some(d)) => PointInTime(local_midnight(y, m - 1, d)),
        _ => PointInTime::INVALID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> PointInTime {
        PointInTime::from_local(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_time(NaiveTime::MIN),
        )
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(parse_leading_int("2024"), Some(2024));
        assert_eq!(parse_leading_int("06"), Some(6));
        assert_eq!(parse_leading_int("  7x"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("x1"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_plain_date() {
        assert_eq!(parse_date("2024-06-01"), ymd(2024, 6, 1));
        assert_eq!(parse_date("2025-12-31"), ymd(2025, 12, 31));
    }

    #[test]
    fn test_rollover() {
        assert_eq!(parse_date("2024-13-01"), ymd(2025, 1, 1));
        assert_eq!(parse_date("2024-03-00"), ymd(2024, 2, 29));
        assert_eq!(parse_date("2023-02-30"), ymd(2023, 3, 2));
        assert_eq!(parse_date("2024-00-15"), ymd(2023, 12, 15));
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(parse_date("99-01-01"), ymd(1999, 1, 1));
    }

    #[test]
    fn test_invalid_inputs_do_not_panic() {
        for input in ["", "2024", "2024-06", "abc-06-01", "2024-xx-01", "--", "not a date"] {
            assert!(!parse_date(input).is_valid(), "{input:?} should be invalid");
        }
        assert!(!parse_date("999999999999-01-01").is_valid());
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(parse_date("2024-06-01T10:00"), ymd(2024, 6, 1));
        assert_eq!(parse_date("2024-06-01-extra"), ymd(2024, 6, 1));
    }

    #[test]
    fn test_invalid_orders_first_and_is_never_after() {
        let valid = ymd(2024, 1, 1);
        assert!(PointInTime::INVALID < valid);
        assert!(!PointInTime::INVALID.is_after(&valid));
        assert!(!valid.is_after(&PointInTime::INVALID));
        assert!(ymd(2024, 1, 2).is_after(&valid));
        assert!(!valid.is_after(&valid));
    }

    #[test]
    fn test_minus_days() {
        assert_eq!(ymd(2025, 3, 1).minus_days(1), ymd(2025, 2, 28));
        assert_eq!(PointInTime::INVALID.minus_days(1), PointInTime::INVALID);
    }
}
