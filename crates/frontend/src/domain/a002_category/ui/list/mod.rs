use contracts::shared::list_query::ListFilters;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_category::api;
use crate::shared::components::custom_pagination::CustomPagination;
use crate::shared::components::list_state::{ListState, ListView};
use crate::shared::config::Config;
use crate::shared::list_utils::{format_date, row_number, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::smart_fetch::use_smart_fetch;
use crate::system::auth::context::use_auth;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn CategoryList() -> impl IntoView {
    let auth = use_auth();
    let config = use_context::<Config>().unwrap_or_default();

    let fetch = use_smart_fetch(
        api::list_categories(auth, config),
        ListFilters::default(),
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
            page_id="a002_category--list"
            title="Categories"
            total=Signal::derive(move || fetch.meta().map(|m| m.total))
        >
            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || fetch.search_term())
                    on_change=Callback::new(move |value| fetch.set_search_term(value))
                    placeholder="Search categories"
                />
            </div>

            <ListState
                view=list_view
                error_message="Error loading categories"
                empty_message="No categories found."
            >
                <div class="table-wrapper" class:table-wrapper--fetching=move || fetch.is_fetching()>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"SN"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Slug"</TableHeaderCell>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || { fetch.items().into_iter().enumerate().collect::<Vec<_>>() }
                                key=|(index, category)| { (*index, category.id.clone()) }
                                children=move |(index, category)| view! {
                                    <TableRow>
                                        <TableCell>{row_number(fetch.meta(), index)}</TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{category.name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <span class="cell-mono">{category.slug.clone()}</span>
                                        </TableCell>
                                        <TableCell>{format_date(category.created_at.as_ref())}</TableCell>
                                    </TableRow>
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
