use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires a stored session
/// Shows fallback if not authenticated
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <div class="alert alert--error">"Not authenticated. Please sign in again."</div> }
        >
            {children()}
        </Show>
    }
}
