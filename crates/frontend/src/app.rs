use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_book::ui::list::BookList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_admin::ui::list::AdminList;
use crate::shared::config::{load_config, Config};
use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::auth::guard::RequireAuth;
use crate::system::users::ui::list::UserList;

/// Management screens reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Books,
    Categories,
    Orders,
    Users,
    Admins,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Books,
        Section::Categories,
        Section::Orders,
        Section::Users,
        Section::Admins,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Books => "Books",
            Section::Categories => "Categories",
            Section::Orders => "Orders",
            Section::Users => "Users",
            Section::Admins => "Admins",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Books => "books",
            Section::Categories => "categories",
            Section::Orders => "orders",
            Section::Users => "users",
            Section::Admins => "admins",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Falling back to default configuration: {}", e);
        Config::default()
    });
    log::info!("API base URL: {}", config.api.base_url);
    provide_context(config);

    view! {
        <AuthProvider>
            <RequireAuth>
                <Shell />
            </RequireAuth>
        </AuthProvider>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let auth = use_auth();
    let active = RwSignal::new(Section::Books);

    view! {
        <div class="app-layout">
            <aside class="app-sidebar">
                <div class="app-sidebar__content">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || active.get() == section
                                on:click=move |_| active.set(section)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(section.icon())}
                                    <span>{section.label()}</span>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="app-sidebar__footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| auth.clear()>
                        "Sign out"
                    </Button>
                </div>
            </aside>
            <main class="app-main">
                // Each screen owns its list state; switching remounts it
                {move || match active.get() {
                    Section::Books => view! { <BookList /> }.into_any(),
                    Section::Categories => view! { <CategoryList /> }.into_any(),
                    Section::Orders => view! { <OrderList /> }.into_any(),
                    Section::Users => view! { <UserList /> }.into_any(),
                    Section::Admins => view! { <AdminList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
