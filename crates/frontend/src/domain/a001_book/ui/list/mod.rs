use contracts::domain::a001_book::aggregate::{Book, StockStatus};
use contracts::domain::a002_category::aggregate::Category;
use contracts::shared::list_query::{ListFilters, ListQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_book::api;
use crate::domain::a002_category::api as category_api;
use crate::shared::components::custom_pagination::CustomPagination;
use crate::shared::components::list_state::{ListState, ListView};
use crate::shared::config::Config;
use crate::shared::list_utils::{format_money, row_number, FilterSelect, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::smart_fetch::use_smart_fetch;
use crate::system::auth::context::use_auth;

const PAGE_SIZE: u32 = 10;
const CATEGORY_OPTIONS_LIMIT: u32 = 100;

/// Category shown in a row: the populated name, then the loaded category
/// list, then the raw id
fn category_label(book: &Book, categories: &[Category]) -> String {
    if let Some(name) = book.category.name() {
        return name.to_string();
    }
    categories
        .iter()
        .find(|c| c.id == book.category.id())
        .map(|c| c.name.clone())
        .unwrap_or_else(|| book.category.id().to_string())
}

fn stock_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "badge badge--success",
        StockStatus::LowStock => "badge badge--warning",
        StockStatus::OutOfStock => "badge badge--danger",
    }
}

#[component]
pub fn BookList() -> impl IntoView {
    let auth = use_auth();
    let config = use_context::<Config>().unwrap_or_default();

    let fetch = use_smart_fetch(
        api::list_books(auth, config.clone()),
        ListFilters::default(),
        ListFilters {
            limit: Some(PAGE_SIZE),
            ..Default::default()
        },
    );

    // Options of the category filter, loaded once
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let load_categories = category_api::list_categories(auth, config);
    spawn_local(async move {
        let query = ListQuery::compose(
            1,
            "",
            &ListFilters {
                limit: Some(CATEGORY_OPTIONS_LIMIT),
                ..Default::default()
            },
            &ListFilters::default(),
        );
        match load_categories(query).await {
            Ok(response) => {
                let _ = categories.try_set(response.items());
            }
            Err(e) => log::warn!("category options unavailable: {}", e),
        }
    });

    let list_view = Signal::derive(move || {
        ListView::pick(fetch.is_loading(), fetch.is_error(), fetch.items().len())
    });

    view! {
        <PageFrame
            page_id="a001_book--list"
            title="Books management"
            total=Signal::derive(move || fetch.meta().map(|m| m.total))
        >
            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || fetch.search_term())
                    on_change=Callback::new(move |value| fetch.set_search_term(value))
                    placeholder="Search books"
                />
                <FilterSelect
                    value=Signal::derive(move || fetch.filter_params().category)
                    options=Signal::derive(move || {
                        categories.with(|list| {
                            list.iter().map(|c| (c.id.clone(), c.name.clone())).collect::<Vec<_>>()
                        })
                    })
                    all_label="All categories"
                    on_change=Callback::new(move |category: Option<String>| {
                        fetch.update_filter_params(|f| f.category = category)
                    })
                />
            </div>

            <ListState
                view=list_view
                error_message="Error loading books"
                empty_message="No books found."
            >
                <div class="table-wrapper" class:table-wrapper--fetching=move || fetch.is_fetching()>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"SN"</TableHeaderCell>
                                <TableHeaderCell>"Book"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Tag"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
                                <TableHeaderCell>"Stock"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || { fetch.items().into_iter().enumerate().collect::<Vec<_>>() }
                                key=|(index, book)| { (*index, book.id.clone()) }
                                children=move |(index, book)| {
                                    let number = row_number(fetch.meta(), index);
                                    let status = book.stock_status();
                                    let price = format_money(book.price);
                                    let original_price = book
                                        .is_discounted()
                                        .then(|| format_money(book.original_price.unwrap_or_default()));
                                    let quantity = book.quantity;
                                    let title = book.title.clone();
                                    let author = book.author.clone();
                                    let tag = book.tag.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{number}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <div class="cell-stack">
                                                        <span class="cell-stack__main">{title}</span>
                                                        <span class="cell-stack__sub">{author}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class="badge badge--secondary">
                                                    {move || categories.with(|list| category_label(&book, list))}
                                                </span>
                                            </TableCell>
                                            <TableCell>
                                                {tag.map(|tag| view! {
                                                    <span class="badge badge--outline">{tag}</span>
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <span class="cell-price">{price}</span>
                                                {original_price.map(|original| view! {
                                                    <s class="cell-price__original">{original}</s>
                                                })}
                                            </TableCell>
                                            <TableCell>{quantity}</TableCell>
                                            <TableCell>
                                                <span class=stock_class(status)>{status.label()}</span>
                                            </TableCell>
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

    fn book(category: &str) -> Book {
        let json = format!(
            r#"{{"_id":"b1","title":"T","author":"A","slug":"t","category":{},"price":1.0}}"#,
            category
        );
        serde_json::from_str(&json).unwrap()
    }

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            slug: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_category_label() {
        let list = vec![category("c1", "Fiction")];
        assert_eq!(category_label(&book(r#""c1""#), &list), "Fiction");
        assert_eq!(category_label(&book(r#""c9""#), &list), "c9");
        assert_eq!(
            category_label(&book(r#"{"_id":"c9","name":"Poetry"}"#), &list),
            "Poetry"
        );
    }
}
