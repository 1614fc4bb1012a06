//! Paginated list fetching shared by every management screen.
//!
//! [`use_smart_fetch`] owns the search term, current page and filters of one
//! screen, debounces search and filters, and calls the injected query
//! function whenever the effective [`ListQuery`] changes.
//!
//! The controller does not deduplicate requests and applies responses in
//! arrival order. A slow earlier response can overwrite a newer one unless
//! the query function guards against it.

pub mod state;

use std::future::Future;

use contracts::shared::list_query::{ListFilters, ListQuery};
use contracts::shared::list_response::{ApiListResponse, ListMeta};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::shared::config::Config;
use state::{QueryStatus, SmartFetchState, Ticket};

/// Handle returned by [`use_smart_fetch`]
pub struct SmartFetch<T: Send + Sync + 'static> {
    state: RwSignal<SmartFetchState>,
    status: RwSignal<QueryStatus<T>>,
    debounce_ms: u32,
}

impl<T: Send + Sync + 'static> Clone for SmartFetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for SmartFetch<T> {}

impl<T: Clone + Send + Sync + 'static> SmartFetch<T> {
    pub fn search_term(&self) -> String {
        self.state.with(|s| s.search_term().to_string())
    }

    pub fn set_search_term(&self, value: String) {
        let Some(ticket) = self.state.try_update(|s| s.set_search_term(value)) else {
            return;
        };
        let state = self.state;
        let delay = self.debounce_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if let Some(Some(reset)) = state.try_update(|s| s.settle_search(ticket)) {
                defer_page_reset(state, reset);
            }
        });
    }

    pub fn current_page(&self) -> u32 {
        self.state.with(|s| s.current_page())
    }

    pub fn set_current_page(&self, page: u32) {
        let _ = self.state.try_update(|s| s.set_current_page(page));
    }

    pub fn filter_params(&self) -> ListFilters {
        self.state.with(|s| s.filter_params().clone())
    }

    pub fn set_filter_params(&self, value: ListFilters) {
        let Some(ticket) = self.state.try_update(|s| s.set_filter_params(value)) else {
            return;
        };
        let state = self.state;
        let delay = self.debounce_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if let Some(Some(reset)) = state.try_update(|s| s.settle_filters(ticket)) {
                defer_page_reset(state, reset);
            }
        });
    }

    /// Change a single filter key, keeping the others
    pub fn update_filter_params(&self, change: impl FnOnce(&mut ListFilters)) {
        let mut filters = self.state.with_untracked(|s| s.filter_params().clone());
        change(&mut filters);
        self.set_filter_params(filters);
    }

    pub fn items(&self) -> Vec<T> {
        self.status.with(|s| s.items())
    }

    pub fn meta(&self) -> Option<ListMeta> {
        self.status.with(|s| s.meta())
    }

    /// Page count reported by the server, 0 before the first response
    pub fn total_pages(&self) -> u32 {
        self.meta().map(|m| m.total_page).unwrap_or(0)
    }

    /// True only until the first response arrives
    pub fn is_loading(&self) -> bool {
        self.status.with(|s| s.is_loading())
    }

    pub fn is_fetching(&self) -> bool {
        self.status.with(|s| s.is_fetching())
    }

    pub fn is_error(&self) -> bool {
        self.status.with(|s| s.is_error())
    }
}

/// Runs the page reset one timer tick later so it lands after the update that
/// triggered it
fn defer_page_reset(state: RwSignal<SmartFetchState>, ticket: Ticket) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        let _ = state.try_update(|s| s.apply_page_reset(ticket));
    });
}

/// Bind a list query function to a screen
///
/// `options` are merged into every request and win over `initial_params` and
/// later filter changes key by key.
pub fn use_smart_fetch<T, Q, Fut>(
    query_fn: Q,
    options: ListFilters,
    initial_params: ListFilters,
) -> SmartFetch<T>
where
    T: Clone + Send + Sync + 'static,
    Q: Fn(ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<ApiListResponse<T>, ApiError>> + 'static,
{
    let debounce_ms = use_context::<Config>()
        .unwrap_or_default()
        .list
        .debounce_ms;

    let state = RwSignal::new(SmartFetchState::new(options, initial_params));
    let status = RwSignal::new(QueryStatus::<T>::default());
    let query = Memo::new(move |_| state.with(|s| s.effective_query()));

    Effect::new(move |_| {
        let params = query.get();
        log::debug!("list query: {:?}", params);
        status.update(|s| s.begin());
        let request = query_fn(params);
        spawn_local(async move {
            let result = request.await;
            if let Err(e) = &result {
                log::warn!("list query failed: {}", e);
            }
            let _ = status.try_update(|s| s.finish(result));
        });
    });

    on_cleanup(move || {
        let _ = state.try_update(|s| s.cancel_pending());
    });

    SmartFetch {
        state,
        status,
        debounce_ms,
    }
}
