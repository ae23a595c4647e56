// Tests for the filter / sort / format pipeline.
use upcoming_events::clock::{Clock, FixedClock};
use upcoming_events::model::{IsoDateFormatter, RawEvent, parse_date};
use upcoming_events::pipeline::{cutoff_from, filter_upcoming, project, sort_by_start};

fn event(title: &str, start: &str, end: &str) -> RawEvent {
    RawEvent::new(title, start, end)
}

#[test]
fn test_filter_keeps_only_events_ending_after_yesterday() {
    let clock = FixedClock::at(2025, 2, 1, 9, 0).unwrap();
    let cutoff = cutoff_from(clock.now());

    let events = vec![
        event("ended last week", "2025-01-20", "2025-01-25"),
        event("ended yesterday", "2025-01-31", "2025-01-31"),
        event("ends today", "2025-01-29", "2025-02-01"),
        event("next month", "2025-03-01", "2025-03-02"),
    ];

    let kept = filter_upcoming(&events, &cutoff);
    let titles: Vec<&str> = kept.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["ends today", "next month"]);

    // Property: membership matches the strict comparison for every event.
    for e in &events {
        let expected = parse_date(&e.end_date).is_after(&cutoff);
        assert_eq!(kept.contains(e), expected, "{}", e.title);
    }
}

#[test]
fn test_filter_drops_unreadable_end_dates() {
    let clock = FixedClock::at_midnight(2025, 2, 1).unwrap();
    let cutoff = cutoff_from(clock.now());

    let events = vec![
        event("tbd", "2025-03-01", "TBD"),
        event("half", "2025-03-01", "2025-03"),
        event("ok", "2025-03-01", "2025-03-01"),
    ];

    let kept = filter_upcoming(&events, &cutoff);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "ok");
}

#[test]
fn test_sort_orders_by_start_and_keeps_ties_in_input_order() {
    let mut events = vec![
        event("c", "2025-06-10", "2025-06-12"),
        event("a1", "2025-04-01", "2025-04-01"),
        event("b", "2025-05-01", "2025-05-03"),
        event("a2", "2025-04-01", "2025-04-09"),
        event("a3", "2025-4-1", "2025-04-02"),
    ];
    sort_by_start(&mut events);

    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["a1", "a2", "a3", "b", "c"]);

    for pair in events.windows(2) {
        assert!(parse_date(&pair[0].start_date) <= parse_date(&pair[1].start_date));
    }
}

#[test]
fn test_sort_puts_unreadable_start_first() {
    let mut events = vec![
        event("dated", "2025-04-01", "2025-04-01"),
        event("undated", "soon", "2025-04-01"),
    ];
    sort_by_start(&mut events);
    assert_eq!(events[0].title, "undated");
}

#[test]
fn test_end_to_end_example() {
    let events = vec![
        event("January meetup", "2025-01-10", "2025-01-10"),
        event("Old conference", "2024-01-01", "2024-01-02"),
        event("March summit", "2025-03-05", "2025-03-07"),
    ];

    let clock = FixedClock::at_midnight(2025, 1, 1).unwrap();
    let out = project(&events, &clock, &IsoDateFormatter);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].title, "January meetup");
    assert_eq!(out[0].date, "2025-01-10");
    assert_eq!(out[1].title, "March summit");
    assert_eq!(out[1].date, "2025-03-05 - 2025-03-07");
}

#[test]
fn test_single_day_event_drops_once_it_is_over() {
    let events = vec![
        event("January meetup", "2025-01-10", "2025-01-10"),
        event("March summit", "2025-03-05", "2025-03-07"),
    ];

    let clock = FixedClock::at_midnight(2025, 2, 1).unwrap();
    let out = project(&events, &clock, &IsoDateFormatter);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "March summit");
}

#[test]
fn test_project_copies_details() {
    let mut ev = event("Summit", "2025-03-05", "2025-03-07");
    ev.description = "Three days of talks".to_string();
    ev.location = "Lisbon".to_string();
    ev.to = "https://summit.example".to_string();

    let clock = FixedClock::at_midnight(2025, 1, 1).unwrap();
    let out = project(&[ev], &clock, &IsoDateFormatter);

    assert_eq!(out[0].formatted_details, "Three days of talks");
    assert_eq!(out[0].description, "Three days of talks");
    assert_eq!(out[0].location, "Lisbon");
    assert_eq!(out[0].to, "https://summit.example");
}
