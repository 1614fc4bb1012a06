//! PageFrame: root wrapper of every management list screen.
//!
//! The root element gets `id="{entity}--list"`, so an id copied from the DOM
//! inspector leads straight to the `domain/{entity}/` directory.

use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--list`, e.g. `"a001_book--list"`
    page_id: &'static str,
    /// Heading shown above the toolbar
    #[prop(into)]
    title: String,
    /// Record count reported by the server, hidden until known
    #[prop(into)]
    total: Signal<Option<u64>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page" data-page-category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    {move || total.get().map(|count| view! {
                        <Badge>{count.to_string()}</Badge>
                    })}
                </div>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
