// Incremental "load more" disclosure over an ordered list.
use crate::telemetry::TrackingEvent;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Outcome of one "load more" action: the new reveal count and the
/// tracking event the caller should hand to its telemetry sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMore {
    pub revealed_count: usize,
    pub tracking: TrackingEvent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCursor {
    page_size: usize,
    revealed_count: usize,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationCursor {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            revealed_count: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    /// The first `revealed_count` items, or all of them when fewer exist.
    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.revealed_count.min(items.len())]
    }

    /// Whether the "load more" control should be offered.
    ///
    /// Uses `<=`, so a list whose length is an exact multiple of the page
    /// size still offers one more (empty) page.
    pub fn has_more(&self, total: usize) -> bool {
        self.revealed_count <= total
    }

    pub fn load_more(&mut self) -> LoadMore {
        self.revealed_count = self.revealed_count.saturating_add(self.page_size);
        LoadMore {
            revealed_count: self.revealed_count,
            tracking: TrackingEvent::load_more(),
        }
    }
}
