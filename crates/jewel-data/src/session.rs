//! The state behind one listing page.

use crate::{FetchError, ProductSource, RequestSequencer, RequestTicket, Section};
use jewel_catalog::catalog::Product;
use jewel_catalog::search::{refine, FilterKey, FilterState};
use jewel_catalog::url::{from_query_string, listing_url};
use tracing::{info, warn};

/// Where the listing is in its fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response was current and is now displayed.
    Applied,
    /// A newer fetch was started; the response was dropped.
    Discarded,
}

/// A listing page: filter state, the displayed products and the URL that
/// reproduces them.
///
/// Every state change rewrites the URL and starts a new fetch. Responses
/// to superseded fetches are discarded, so the display always reflects the
/// latest filters.
#[derive(Debug)]
pub struct ListingSession {
    section: Section,
    state: FilterState,
    products: Vec<Product>,
    status: LoadStatus,
    url: String,
    sequencer: RequestSequencer,
    pending: Option<RequestTicket>,
}

impl ListingSession {
    pub fn new(section: Section) -> Self {
        Self::with_state(section, FilterState::new())
    }

    /// Restore a listing from the address bar.
    pub fn from_url(section: Section, search: &str) -> Self {
        Self::with_state(section, from_query_string(search))
    }

    fn with_state(section: Section, state: FilterState) -> Self {
        let url = listing_url(section.route(), &state);
        Self {
            section,
            state,
            products: Vec::new(),
            status: LoadStatus::Idle,
            url,
            sequencer: RequestSequencer::new(),
            pending: None,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Products currently displayed, filtered and sorted.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The shareable URL for the current state.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Start a fetch for the current state.
    pub fn begin(&mut self) -> RequestTicket {
        let ticket = self.sequencer.issue();
        self.pending = Some(ticket);
        self.status = LoadStatus::Loading;
        ticket
    }

    /// Change one filter. Returns the ticket for the fetch it triggers.
    pub fn set_filter(&mut self, key: FilterKey, value: impl Into<String>) -> RequestTicket {
        self.state.set(key, value);
        self.changed()
    }

    /// Replace the whole filter state.
    pub fn replace_filters(&mut self, state: FilterState) -> RequestTicket {
        self.state = state;
        self.changed()
    }

    /// Drop every filter, keeping the sort order.
    pub fn clear(&mut self) -> RequestTicket {
        self.state.clear_filters();
        self.changed()
    }

    fn changed(&mut self) -> RequestTicket {
        self.url = listing_url(self.section.route(), &self.state);
        self.begin()
    }

    /// Apply the result of the fetch identified by `ticket`.
    ///
    /// A failed fetch shows an empty listing. Each ticket is applied at
    /// most once.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Product>, FetchError>,
    ) -> Completion {
        if self.pending != Some(ticket) || !self.sequencer.is_current(ticket) {
            warn!(
                section = %self.section,
                ticket = ticket.value(),
                "discarding stale listing response"
            );
            return Completion::Discarded;
        }
        self.pending = None;

        match result {
            Ok(fetched) => {
                self.products = refine(&fetched, &self.state);
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                warn!(section = %self.section, error = %err, "listing fetch failed");
                self.products.clear();
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
        Completion::Applied
    }

    /// Fetch from `source` and apply the result.
    pub fn reload(&mut self, source: &dyn ProductSource) -> Completion {
        let ticket = self.begin();
        let result = source.fetch(self.section);
        let completion = self.complete(ticket, result);
        info!(
            section = %self.section,
            url = %self.url,
            shown = self.products.len(),
            "listing reloaded"
        );
        completion
    }

    /// True while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}
