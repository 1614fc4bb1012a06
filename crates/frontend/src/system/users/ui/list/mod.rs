use contracts::shared::list_query::ListFilters;
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::custom_pagination::CustomPagination;
use crate::shared::components::list_state::{ListState, ListView};
use crate::shared::config::Config;
use crate::shared::list_utils::{format_date, row_number, FilterSelect, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::smart_fetch::use_smart_fetch;
use crate::system::auth::context::use_auth;
use crate::system::users::api;

const PAGE_SIZE: u32 = 10;

fn parse_active(value: Option<String>) -> Option<bool> {
    value.and_then(|v| v.parse().ok())
}

fn account_badge(user: &User) -> (&'static str, &'static str) {
    if user.is_enabled() {
        ("badge badge--success", "active")
    } else {
        ("badge badge--danger", "blocked")
    }
}

#[component]
pub fn UserList() -> impl IntoView {
    let auth = use_auth();
    let config = use_context::<Config>().unwrap_or_default();

    let fetch = use_smart_fetch(
        api::list_users(auth, config),
        api::user_options(),
        ListFilters {
            limit: Some(PAGE_SIZE),
            ..Default::default()
        },
    );

    let list_view = Signal::derive(move || {
        ListView::pick(fetch.is_loading(), fetch.is_error(), fetch.items().len())
    });

    view! {
        <PageFrame
            page_id="sys_users--list"
            title="Users"
            total=Signal::derive(move || fetch.meta().map(|m| m.total))
        >
            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || fetch.search_term())
                    on_change=Callback::new(move |value| fetch.set_search_term(value))
                    placeholder="Search users"
                />
                <FilterSelect
                    value=Signal::derive(move || {
                        fetch.filter_params().is_active.map(|active| active.to_string())
                    })
                    options=Signal::derive(|| {
                        vec![
                            ("true".to_string(), "Active".to_string()),
                            ("false".to_string(), "Blocked".to_string()),
                        ]
                    })
                    all_label="All accounts"
                    on_change=Callback::new(move |value: Option<String>| {
                        fetch.update_filter_params(|f| f.is_active = parse_active(value))
                    })
                />
            </div>

            <ListState
                view=list_view
                error_message="Error loading users"
                empty_message="No users found."
            >
                <div class="table-wrapper" class:table-wrapper--fetching=move || fetch.is_fetching()>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"SN"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"Verified"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Joined"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || { fetch.items().into_iter().enumerate().collect::<Vec<_>>() }
                                key=|(index, user)| { (*index, user.id.clone()) }
                                children=move |(index, user)| {
                                    let (class, label) = account_badge(&user);
                                    view! {
                                        <TableRow>
                                            <TableCell>{row_number(fetch.meta(), index)}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{user.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{user.email.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{user.phone.clone()}</TableCell>
                                            <TableCell>{if user.is_verified_by_otp { "yes" } else { "no" }}</TableCell>
                                            <TableCell>
                                                <span class=class>{label}</span>
                                            </TableCell>
                                            <TableCell>{format_date(user.created_at.as_ref())}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </ListState>

            <CustomPagination
                current_page=Signal::derive(move || fetch.current_page())
                total_pages=Signal::derive(move || fetch.total_pages())
                on_page_change=Callback::new(move |page| fetch.set_current_page(page))
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_active() {
        assert_eq!(parse_active(Some("true".into())), Some(true));
        assert_eq!(parse_active(Some("false".into())), Some(false));
        assert_eq!(parse_active(None), None);
        assert_eq!(parse_active(Some("maybe".into())), None);
    }
}
