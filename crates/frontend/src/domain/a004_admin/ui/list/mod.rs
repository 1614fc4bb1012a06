use contracts::domain::a004_admin::aggregate::Admin;
use contracts::shared::list_query::ListFilters;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_admin::api;
use crate::shared::components::custom_pagination::CustomPagination;
use crate::shared::components::list_state::{ListState, ListView};
use crate::shared::config::Config;
use crate::shared::list_utils::{format_date, row_number, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::smart_fetch::use_smart_fetch;
use crate::system::auth::context::use_auth;

const PAGE_SIZE: u32 = 10;

fn admin_status(admin: &Admin) -> (&'static str, String) {
    if admin.is_deleted {
        ("badge badge--danger", "deleted".to_string())
    } else if !admin.is_active {
        ("badge badge--warning", "inactive".to_string())
    } else {
        let label = admin.status.clone().unwrap_or_else(|| "active".to_string());
        ("badge badge--success", label)
    }
}

#[component]
pub fn AdminList() -> impl IntoView {
    let auth = use_auth();
    let config = use_context::<Config>().unwrap_or_default();

    let fetch = use_smart_fetch(
        api::list_admins(auth, config),
        api::admin_options(),
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
            page_id="a004_admin--list"
            title="Admins"
            total=Signal::derive(move || fetch.meta().map(|m| m.total))
        >
            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || fetch.search_term())
                    on_change=Callback::new(move |value| fetch.set_search_term(value))
                    placeholder="Search admins"
                />
            </div>

            <ListState
                view=list_view
                error_message="Error loading admins"
                empty_message="No admins found."
            >
                <div class="table-wrapper" class:table-wrapper--fetching=move || fetch.is_fetching()>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"SN"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"Role"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Last active"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || { fetch.items().into_iter().enumerate().collect::<Vec<_>>() }
                                key=|(index, admin)| { (*index, admin.id.clone()) }
                                children=move |(index, admin)| {
                                    let (class, label) = admin_status(&admin);
                                    view! {
                                        <TableRow>
                                            <TableCell>{row_number(fetch.meta(), index)}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{admin.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{admin.email.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{admin.phone.clone()}</TableCell>
                                            <TableCell>
                                                <span class="badge badge--secondary">{admin.role.clone()}</span>
                                            </TableCell>
                                            <TableCell>
                                                <span class=class>{label}</span>
                                            </TableCell>
                                            <TableCell>{format_date(admin.last_active_at.as_ref())}</TableCell>
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

    fn admin(is_active: bool, is_deleted: bool, status: Option<&str>) -> Admin {
        Admin {
            id: "a1".into(),
            name: "Nadia".into(),
            email: "n@example.com".into(),
            phone: String::new(),
            address: String::new(),
            image: None,
            role: "admin".into(),
            is_active,
            is_deleted,
            status: status.map(str::to_string),
            last_active_at: None,
            created_at: None,
        }
    }

    #[test]
    fn test_admin_status() {
        assert_eq!(admin_status(&admin(true, false, None)).1, "active");
        assert_eq!(admin_status(&admin(true, false, Some("online"))).1, "online");
        assert_eq!(admin_status(&admin(false, false, None)).1, "inactive");
        assert_eq!(admin_status(&admin(true, true, None)).0, "badge badge--danger");
    }
}
