// File: src/pipeline.rs
//! Filter, order and format raw events into the upcoming-events list.
//!
//! Every step is pure. [`project`] runs them in sequence with a cutoff of
//! one day before the clock's current instant.
use crate::clock::Clock;
use crate::model::{DateFormatter, DisplayEvent, EventDisplay, PointInTime, RawEvent, parse_date};

/// "Yesterday": the instant one day before `now`.
pub fn cutoff_from(now: PointInTime) -> PointInTime {
    now.minus_days(1)
}

/// Whether the event is still running after `cutoff`.
pub fn is_upcoming(event: &RawEvent, cutoff: &PointInTime) -> bool {
    parse_date(&event.end_date).is_after(cutoff)
}

pub fn filter_upcoming(events: &[RawEvent], cutoff: &PointInTime) -> Vec<RawEvent> {
    events
        .iter()
        .filter(|e| is_upcoming(e, cutoff))
        .cloned()
        .collect()
}

/// Stable sort by start date. Events with an unreadable start come first.
pub fn sort_by_start(events: &mut [RawEvent]) {
    events.sort_by_cached_key(|e| parse_date(&e.start_date));
}

pub fn format_events(events: &[RawEvent], formatter: &dyn DateFormatter) -> Vec<DisplayEvent> {
    events.iter().map(|e| e.to_display(formatter)).collect()
}

/// Runs the full pipeline against an explicit cutoff.
pub fn project_with_cutoff(
    events: &[RawEvent],
    cutoff: &PointInTime,
    formatter: &dyn DateFormatter,
) -> Vec<DisplayEvent> {
    let mut upcoming = filter_upcoming(events, cutoff);
    sort_by_start(&mut upcoming);

    log::debug!(
        "Projected {} upcoming events out of {} (cutoff {})",
        upcoming.len(),
        events.len(),
        cutoff
    );

    format_events(&upcoming, formatter)
}

pub fn project(
    events: &[RawEvent],
    clock: &dyn Clock,
    formatter: &dyn DateFormatter,
) -> Vec<DisplayEvent> {
    let cutoff = cutoff_from(clock.now());
    project_with_cutoff(events, &cutoff, formatter)
}
