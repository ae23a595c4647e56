// Source of "now" for the upcoming-events cutoff.
use crate::model::PointInTime;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Supplies the current local wall-clock instant.
pub trait Clock: std::fmt::Debug {
    fn now(&self) -> PointInTime;
}

// --- Production Implementation ---

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> PointInTime {
        PointInTime::from_local(Local::now().naive_local())
    }
}

// --- Test Implementation ---

#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    pub now: NaiveDateTime,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Midnight of the given day. Returns `None` for an impossible date.
    pub fn at_midnight(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|d| Self::new(d.and_time(NaiveTime::MIN)))
    }

    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> PointInTime {
        PointInTime::from_local(self.now)
    }
}
