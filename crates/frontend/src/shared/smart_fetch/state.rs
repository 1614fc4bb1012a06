//! Framework-free state of the list fetch controller.
//!
//! Timers live outside this module: every change that has to wait hands out a
//! [`Ticket`], and the caller brings the ticket back when its timer elapses.
//! Only the newest ticket of a window may apply, so cancelling a timer and
//! letting a stale one fire are equivalent.

use contracts::shared::list_query::{ListFilters, ListQuery};
use contracts::shared::list_response::{ApiListResponse, ListMeta};

/// Generation number of one debounce or page-reset window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A value that only settles after its window elapsed without changes
#[derive(Debug, Clone, PartialEq)]
pub struct Debounced<T> {
    settled: T,
    pending: Option<T>,
    generation: u64,
}

impl<T: Clone + PartialEq> Debounced<T> {
    pub fn new(value: T) -> Self {
        Self {
            settled: value,
            pending: None,
            generation: 0,
        }
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    /// Starts a new window for `value`; earlier tickets go stale
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Applies the pending value if `ticket` is still current.
    /// Returns `true` only when the settled value actually changed.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match self.pending.take() {
            Some(value) if value != self.settled => {
                self.settled = value;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}

/// Query state of one list screen
#[derive(Debug, Clone, PartialEq)]
pub struct SmartFetchState {
    search_term: String,
    current_page: u32,
    filter_params: ListFilters,
    options: ListFilters,
    search: Debounced<String>,
    filters: Debounced<ListFilters>,
    reset_generation: u64,
    reset_pending: bool,
}

impl SmartFetchState {
    pub fn new(options: ListFilters, initial_params: ListFilters) -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            filter_params: initial_params.clone(),
            options,
            search: Debounced::new(String::new()),
            filters: Debounced::new(initial_params),
            reset_generation: 0,
            reset_pending: false,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn filter_params(&self) -> &ListFilters {
        &self.filter_params
    }

    pub fn set_search_term(&mut self, value: String) -> Ticket {
        self.search_term = value.clone();
        self.search.schedule(value)
    }

    pub fn set_filter_params(&mut self, value: ListFilters) -> Ticket {
        self.filter_params = value.clone();
        self.filters.schedule(value)
    }

    /// Page changes are not debounced. Page 0 is clamped to 1.
    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    /// Settles the search term. Returns the page-reset ticket when the
    /// debounced value changed.
    pub fn settle_search(&mut self, ticket: Ticket) -> Option<Ticket> {
        self.search
            .settle(ticket)
            .then(|| self.schedule_page_reset())
    }

    /// Settles the filters. Returns the page-reset ticket when the debounced
    /// value changed.
    pub fn settle_filters(&mut self, ticket: Ticket) -> Option<Ticket> {
        self.filters
            .settle(ticket)
            .then(|| self.schedule_page_reset())
    }

    fn schedule_page_reset(&mut self) -> Ticket {
        self.reset_generation += 1;
        self.reset_pending = true;
        Ticket(self.reset_generation)
    }

    /// Moves back to page 1 if `ticket` is the latest reset request
    pub fn apply_page_reset(&mut self, ticket: Ticket) -> bool {
        if !self.reset_pending || ticket.0 != self.reset_generation {
            return false;
        }
        self.reset_pending = false;
        self.current_page = 1;
        true
    }

    /// Invalidates every outstanding ticket
    pub fn cancel_pending(&mut self) {
        self.search.cancel();
        self.filters.cancel();
        self.reset_generation += 1;
        self.reset_pending = false;
    }

    /// Parameters of the next request
    pub fn effective_query(&self) -> ListQuery {
        ListQuery::compose(
            self.current_page,
            self.search.settled(),
            self.filters.settled(),
            &self.options,
        )
    }
}

/// Outcome of the injected query function
#[derive(Debug, Clone, PartialEq)]
pub struct QueryStatus<T> {
    data: Option<ApiListResponse<T>>,
    in_flight: u32,
    is_error: bool,
}

impl<T> Default for QueryStatus<T> {
    fn default() -> Self {
        Self {
            data: None,
            in_flight: 0,
            is_error: false,
        }
    }
}

impl<T: Clone> QueryStatus<T> {
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    /// Records a finished request. Responses are applied in arrival order.
    pub fn finish<E>(&mut self, result: Result<ApiListResponse<T>, E>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(response) => {
                self.data = Some(response);
                self.is_error = false;
            }
            Err(_) => {
                self.data = None;
                self.is_error = true;
            }
        }
    }

    pub fn items(&self) -> Vec<T> {
        self.data
            .as_ref()
            .map(ApiListResponse::items)
            .unwrap_or_default()
    }

    pub fn meta(&self) -> Option<ListMeta> {
        self.data.as_ref().and_then(|d| d.meta)
    }

    /// First load: a request is running and there is nothing to show yet
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0 && self.data.is_none()
    }

    /// Any request is running, including refetches over rows already shown
    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SmartFetchState {
        SmartFetchState::new(ListFilters::default(), ListFilters::default())
    }

    fn category(value: &str) -> ListFilters {
        ListFilters {
            category: Some(value.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_query() {
        let query = state().effective_query();
        assert_eq!(query, ListQuery::default());
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_search_burst_settles_once() {
        let mut s = state();
        s.set_current_page(4);
        let tickets: Vec<Ticket> = ["d", "du", "dun", "dune"]
            .iter()
            .map(|v| s.set_search_term(v.to_string()))
            .collect();

        for stale in &tickets[..3] {
            assert_eq!(s.settle_search(*stale), None);
        }
        assert_eq!(s.effective_query().search_term, "");
        assert_eq!(s.search_term(), "dune");

        let reset = s.settle_search(tickets[3]).expect("last keystroke settles");
        assert_eq!(s.effective_query().search_term, "dune");
        // the reset is deferred, the page is untouched until it runs
        assert_eq!(s.current_page(), 4);
        assert!(s.apply_page_reset(reset));
        assert_eq!(s.current_page(), 1);
        assert!(!s.apply_page_reset(reset));

        let query = s.effective_query();
        assert_eq!(query.search_term, "dune");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_unchanged_value_does_not_reset() {
        let mut s = state();
        let ticket = s.set_search_term("tolkien".into());
        let reset = s.settle_search(ticket).unwrap();
        s.apply_page_reset(reset);
        s.set_current_page(3);

        // typed and deleted a character inside one window
        s.set_search_term("tolkie".into());
        let ticket = s.set_search_term("tolkien".into());
        assert_eq!(s.settle_search(ticket), None);
        assert_eq!(s.current_page(), 3);
    }

    #[test]
    fn test_filters_are_debounced() {
        let mut s = state();
        let ticket = s.set_filter_params(category("fantasy"));
        assert_eq!(s.filter_params(), &category("fantasy"));
        assert_eq!(s.effective_query().category, None);

        assert!(s.settle_filters(ticket).is_some());
        assert_eq!(s.effective_query().category.as_deref(), Some("fantasy"));
    }

    #[test]
    fn test_page_change_is_immediate() {
        let mut s = state();
        s.set_current_page(7);
        assert_eq!(s.effective_query().page, 7);
        s.set_current_page(0);
        assert_eq!(s.effective_query().page, 1);
    }

    #[test]
    fn test_newer_reset_supersedes_older() {
        let mut s = state();
        let search = s.set_search_term("a".into());
        let filters = s.set_filter_params(category("x"));
        let first = s.settle_search(search).unwrap();
        let second = s.settle_filters(filters).unwrap();
        s.set_current_page(5);

        assert!(!s.apply_page_reset(first));
        assert_eq!(s.current_page(), 5);
        assert!(s.apply_page_reset(second));
        assert_eq!(s.current_page(), 1);
    }

    #[test]
    fn test_cancel_pending_drops_all_tickets() {
        let mut s = state();
        let search = s.set_search_term("a".into());
        let filters = s.set_filter_params(category("x"));
        s.cancel_pending();
        assert_eq!(s.settle_search(search), None);
        assert_eq!(s.settle_filters(filters), None);
        assert_eq!(s.effective_query(), ListQuery::default());
    }

    #[test]
    fn test_options_apply_to_every_query() {
        let options = ListFilters {
            role: Some("admin".into()),
            ..Default::default()
        };
        let initial = ListFilters {
            role: Some("user".into()),
            limit: Some(10),
            ..Default::default()
        };
        let mut s = SmartFetchState::new(options, initial);
        let query = s.effective_query();
        assert_eq!(query.role.as_deref(), Some("admin"));
        assert_eq!(query.limit, Some(10));

        s.set_current_page(2);
        assert_eq!(s.effective_query().role.as_deref(), Some("admin"));
        assert_eq!(s.effective_query(), s.effective_query());
    }

    #[test]
    fn test_missing_payload_yields_empty_items() {
        let mut status = QueryStatus::<u32>::default();
        assert!(status.items().is_empty());
        assert_eq!(status.meta(), None);

        status.begin();
        assert!(status.is_loading());
        status.finish::<()>(Ok(ApiListResponse::default()));
        assert!(!status.is_loading());
        assert!(status.items().is_empty());
        assert_eq!(status.meta(), None);
        assert!(!status.is_error());
    }

    #[test]
    fn test_error_is_surfaced() {
        let mut status = QueryStatus::<u32>::default();
        status.begin();
        status.finish::<()>(Ok(ApiListResponse {
            data: Some(vec![1, 2]),
            ..Default::default()
        }));
        assert_eq!(status.items(), vec![1, 2]);

        status.begin();
        status.finish(Err("boom"));
        assert!(status.is_error());
        assert!(status.items().is_empty());
    }

    #[test]
    fn test_fetching_tracks_overlapping_requests() {
        let mut status = QueryStatus::<u32>::default();
        status.begin();
        status.begin();
        status.finish::<()>(Ok(ApiListResponse::default()));
        assert!(status.is_fetching());
        status.finish::<()>(Ok(ApiListResponse::default()));
        assert!(!status.is_fetching());
    }

    #[test]
    fn test_refetch_keeps_previous_rows() {
        let mut status = QueryStatus::<u32>::default();
        status.begin();
        assert!(status.is_loading());
        status.finish::<()>(Ok(ApiListResponse {
            data: Some(vec![1, 2]),
            ..Default::default()
        }));

        // page click: the old page stays visible until the new one arrives
        status.begin();
        assert!(!status.is_loading());
        assert!(status.is_fetching());
        assert_eq!(status.items(), vec![1, 2]);

        status.finish::<()>(Ok(ApiListResponse {
            data: Some(vec![3]),
            ..Default::default()
        }));
        assert!(!status.is_fetching());
        assert_eq!(status.items(), vec![3]);
    }
}
