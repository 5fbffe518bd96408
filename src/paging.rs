//! Incremental inventory paging.
//!
//! [`PagingController`] is a plain state machine with a split-phase API:
//! `begin_*` decides whether a fetch may start and hands out a
//! [`LoadTicket`], `complete_load` applies the fetch outcome. The owner
//! (normally the inventory service) runs the actual fetch in between and
//! may deliver completions in any order; tickets from a superseded
//! generation are discarded, so a slow page response can never overwrite
//! the state of a later refresh.

use crate::domain::{Page, StockItem};
use crate::fetch::FetchError;

/// How close to the end of the list a caller should be before it is worth
/// asking for the next page.
pub const LOAD_MORE_THRESHOLD: usize = 5;

/// Snapshot of the paging progress. Cheap to clone, safe to hand out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingState {
    /// Accumulated items, append-only across pages; reset only by refresh.
    pub items: Vec<StockItem>,
    pub is_loading: bool,
    pub has_more: bool,
    /// Listing size as reported by the last successful page.
    pub total_count: u32,
    pub error: Option<String>,
    /// 1-based page number the next load will request.
    pub next_page_number: u32,
}

impl Default for PagingState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            has_more: true,
            total_count: 0,
            error: None,
            next_page_number: 1,
        }
    }
}

impl PagingState {
    /// Scroll-proximity predicate: true when the caller has fewer than
    /// [`LOAD_MORE_THRESHOLD`] items left below `last_visible_index` and a
    /// further load would actually do something.
    pub fn near_list_end(&self, last_visible_index: usize) -> bool {
        self.has_more && !self.is_loading && last_visible_index + LOAD_MORE_THRESHOLD >= self.items.len()
    }
}

/// Permission to run one fetch, tied to the paging generation that issued
/// it. Completing with a ticket from an older generation is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
    pub page_number: u32,
    pub page_size: u32,
    refresh: bool,
}

pub struct PagingController {
    state: PagingState,
    page_size: u32,
    epoch: u64,
}

impl PagingController {
    pub fn new(page_size: u32) -> Self {
        Self {
            state: PagingState::default(),
            page_size: page_size.max(1),
            epoch: 0,
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &PagingState {
        &self.state
    }

    pub fn snapshot(&self) -> PagingState {
        self.state.clone()
    }

    pub fn items(&self) -> &[StockItem] {
        &self.state.items
    }

    /// Starts a load. A refresh always proceeds: it resets the state,
    /// moves to a new generation (orphaning any in-flight fetch) and
    /// requests page 1. A non-refresh load is a no-op while another load
    /// is in flight.
    pub fn begin_load(&mut self, refresh: bool) -> Option<LoadTicket> {
        if refresh {
            self.epoch += 1;
            self.state = PagingState::default();
        } else if self.state.is_loading {
            return None;
        }

        self.state.is_loading = true;
        self.state.error = None;

        Some(LoadTicket {
            epoch: self.epoch,
            page_number: self.state.next_page_number,
            page_size: self.page_size,
            refresh,
        })
    }

    /// Starts the next incremental page, but only when idle and the end of
    /// the listing has not been seen yet.
    pub fn begin_load_more(&mut self) -> Option<LoadTicket> {
        if self.state.is_loading || !self.state.has_more {
            return None;
        }
        self.begin_load(false)
    }

    /// Applies a fetch outcome. Stale tickets (issued before the most
    /// recent refresh) are discarded without touching the state.
    ///
    /// On success the page is appended (or replaces the list for a refresh
    /// ticket), exhaustion is derived from the page being short, and the
    /// next page number advances. On failure only `is_loading`/`error`
    /// change, so already accumulated pages survive and a retry re-requests
    /// the same page.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<Page, FetchError>) {
        if ticket.epoch != self.epoch {
            return;
        }

        match result {
            Ok(page) => {
                let fetched = page.items.len() as u32;
                if ticket.refresh {
                    self.state.items = page.items;
                } else {
                    self.state.items.extend(page.items);
                }
                self.state.has_more = fetched == ticket.page_size;
                self.state.total_count = page.total_count;
                self.state.next_page_number = ticket.page_number + 1;
                self.state.is_loading = false;
                self.state.error = None;
            }
            Err(e) => {
                self.state.is_loading = false;
                self.state.error = Some(e.to_string());
            }
        }
    }
}
