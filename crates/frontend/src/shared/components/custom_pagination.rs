use contracts::shared::pagination::{Pager, PagerControl, DEFAULT_SIBLING_COUNT};
use leptos::prelude::*;

use crate::shared::config::Config;
use crate::shared::icons::icon;

/// CustomPagination component - numbered pager with ellipses
///
/// Fully controlled: `current_page` belongs to the caller and every click is
/// reported through `on_page_change`. Nothing is rendered when the current
/// page is 0 or there is only one page.
#[component]
pub fn CustomPagination(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Pages shown on each side of the current one (defaults to the configured value)
    #[prop(optional)]
    sibling_count: Option<u32>,
) -> impl IntoView {
    let sibling_count = sibling_count.unwrap_or_else(|| {
        use_context::<Config>()
            .map(|c| c.list.sibling_count)
            .unwrap_or(DEFAULT_SIBLING_COUNT)
    });

    let pager = Memo::new(move |_| {
        Pager::build(total_pages.get(), current_page.get(), sibling_count, |err| {
            log::warn!("pagination: {}", err)
        })
    });

    move || {
        pager.get().map(|pager| {
            view! {
                <nav class="pagination" role="navigation" aria-label="pagination">
                    <ul class="pagination__content">
                        {pager
                            .controls()
                            .into_iter()
                            .map(|control| render_control(control, on_page_change))
                            .collect_view()}
                    </ul>
                </nav>
            }
        })
    }
}

fn render_control(control: PagerControl, on_page_change: Callback<u32>) -> AnyView {
    match control {
        PagerControl::Previous { target, disabled } => view! {
            <li class="pagination__item">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(target)
                    disabled=disabled
                    title="Previous page"
                >
                    {icon("chevron-left")}
                    <span>"Previous"</span>
                </button>
            </li>
        }
        .into_any(),
        PagerControl::Page { number, active } => {
            let class = if active {
                "pagination-btn pagination-btn--active"
            } else {
                "pagination-btn"
            };
            view! {
                <li class="pagination__item">
                    <button
                        class=class
                        aria-current=active.then_some("page")
                        on:click=move |_| on_page_change.run(number)
                    >
                        {number}
                    </button>
                </li>
            }
            .into_any()
        }
        PagerControl::Ellipsis => view! {
            <li class="pagination__item">
                <span class="pagination__ellipsis" aria-hidden="true">
                    {icon("more-horizontal")}
                </span>
            </li>
        }
        .into_any(),
        PagerControl::Next { target, disabled } => view! {
            <li class="pagination__item">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(target)
                    disabled=disabled
                    title="Next page"
                >
                    <span>"Next"</span>
                    {icon("chevron-right")}
                </button>
            </li>
        }
        .into_any(),
    }
}
