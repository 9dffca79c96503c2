//! Catalog pagination: merges server pages into the record store.

use trailmap_core::error::TrailmapError;
use trailmap_core::models::LogPage;

use crate::store::LogStore;

/// Default page size requested from the catalog.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// A page request the caller should issue against the data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
}

/// Tracks catalog pagination across page loads.
///
/// At most one page request is outstanding at a time; `load_more` is a
/// no-op while one is in flight.
#[derive(Debug)]
pub struct CatalogPager {
    page_size: usize,
    total: usize,
    next_offset: Option<usize>,
    in_flight: bool,
    last_error: Option<String>,
}

impl CatalogPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            total: 0,
            next_offset: Some(0),
            in_flight: false,
            last_error: None,
        }
    }

    /// Total catalog size as last reported by the server.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.next_offset.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Last page-load failure, if the most recent load failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Request the first page again (a full reset once it arrives).
    pub fn reload(&mut self) -> Option<PageRequest> {
        self.begin(0)
    }

    /// Request the next unseen page, if any and if none is outstanding.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        let offset = self.next_offset?;
        self.begin(offset)
    }

    fn begin(&mut self, offset: usize) -> Option<PageRequest> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(PageRequest { offset, limit: self.page_size })
    }

    /// Apply a page response.
    ///
    /// An offset-0 response resets the merged list wholesale; any other
    /// offset appends. Identifiers the store has already seen keep their
    /// position and have their summary refreshed in place.
    pub fn apply_page(&mut self, store: &mut LogStore, offset: usize, page: LogPage) {
        self.in_flight = false;
        self.last_error = None;

        if offset == 0 {
            store.clear();
        }
        store.merge_summaries(page.items);

        self.total = page.total;
        self.next_offset = page.next_offset;
    }

    /// Record a failed page load. Previously merged pages stay intact.
    pub fn apply_error(&mut self, error: &TrailmapError) {
        self.in_flight = false;
        self.last_error = Some(error.to_string());
    }
}

impl Default for CatalogPager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
