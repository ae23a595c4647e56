// File: src/projector.rs
//! The upcoming-events component: derive the list once, then serve pages of it.
//!
//! A projector starts inactive. [`UpcomingEventsProjector::activate`] runs the
//! filter/sort/format pipeline exactly once and stores the result; later calls
//! return the stored list untouched. Pagination only ever moves the cursor.
use crate::clock::Clock;
use crate::config::Config;
use crate::model::{DateFormatter, DisplayEvent, RawEvent};
use crate::pagination::{LoadMore, PaginationCursor};
use crate::pipeline;
use crate::telemetry::TelemetrySink;
use once_cell::unsync::OnceCell;

/// One rendered list entry with its alternating-layout hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCard<'a> {
    pub event: &'a DisplayEvent,
    pub is_even: bool,
}

/// Shown instead of the list when there is nothing upcoming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyNotice {
    pub message: String,
    pub link_label: String,
    pub link: String,
}

impl EmptyNotice {
    pub fn new(link: &str) -> Self {
        Self {
            message: rust_i18n::t!("no_upcoming_events").to_string(),
            link_label: rust_i18n::t!("please_add_to_page").to_string(),
            link: link.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventListView<'a> {
    Empty(EmptyNotice),
    List {
        cards: Vec<EventCard<'a>>,
        has_more: bool,
    },
}

impl EventListView<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, EventListView::Empty(_))
    }
}

#[derive(Debug)]
pub struct UpcomingEventsProjector {
    source: Vec<RawEvent>,
    display: OnceCell<Vec<DisplayEvent>>,
    cursor: PaginationCursor,
    data_source_url: String,
}

impl UpcomingEventsProjector {
    pub fn new(source: Vec<RawEvent>, page_size: usize, data_source_url: &str) -> Self {
        Self {
            source,
            display: OnceCell::new(),
            cursor: PaginationCursor::new(page_size),
            data_source_url: data_source_url.to_string(),
        }
    }

    pub fn from_config(source: Vec<RawEvent>, config: &Config) -> Self {
        Self::new(source, config.effective_page_size(), &config.data_source_url)
    }

    /// Derives the display list on first call; afterwards a no-op.
    pub fn activate(&self, clock: &dyn Clock, formatter: &dyn DateFormatter) -> &[DisplayEvent] {
        if self.display.get().is_some() {
            log::debug!("Projector already active, keeping derived list");
        }
        self.display
            .get_or_init(|| pipeline::project(&self.source, clock, formatter))
    }

    pub fn is_active(&self) -> bool {
        self.display.get().is_some()
    }

    /// The derived list, empty until activation.
    pub fn display_events(&self) -> &[DisplayEvent] {
        self.display.get().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn revealed_count(&self) -> usize {
        self.cursor.revealed_count()
    }

    pub fn visible_slice(&self) -> &[DisplayEvent] {
        self.cursor.visible_slice(self.display_events())
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more(self.display_events().len())
    }

    /// Reveals one more page and hands the tracking event to `sink`.
    /// A failed delivery is logged and does not undo the page.
    pub fn load_more(&mut self, sink: &dyn TelemetrySink) -> LoadMore {
        let outcome = self.cursor.load_more();
        if let Err(e) = sink.track(&outcome.tracking) {
            log::warn!("Failed to deliver tracking event: {}", e);
        }
        outcome
    }

    pub fn view(&self) -> EventListView<'_> {
        if self.display_events().is_empty() {
            return EventListView::Empty(EmptyNotice::new(&self.data_source_url));
        }

        let cards = self
            .visible_slice()
            .iter()
            .enumerate()
            .map(|(idx, event)| EventCard {
                event,
                is_even: (idx + 1) % 2 == 0,
            })
            .collect();

        EventListView::List {
            cards,
            has_more: self.has_more(),
        }
    }
}
