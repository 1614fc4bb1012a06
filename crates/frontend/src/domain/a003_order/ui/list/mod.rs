use contracts::domain::a003_order::aggregate::{
    Order, DELIVERY_STATUSES, ORDER_STATUSES, PAYMENT_STATUSES,
};
use contracts::shared::list_query::ListFilters;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_order::api;
use crate::shared::components::custom_pagination::CustomPagination;
use crate::shared::components::list_state::{ListState, ListView};
use crate::shared::config::Config;
use crate::shared::list_utils::{
    format_money, row_number, status_options, FilterSelect, SearchInput,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::smart_fetch::use_smart_fetch;
use crate::system::auth::context::use_auth;

const PAGE_SIZE: u32 = 10;

fn status_class(status: &str) -> &'static str {
    match status {
        "Completed" | "Paid" | "Delivered" => "badge badge--success",
        "Pending" | "Processing" => "badge badge--warning",
        "Cancelled" | "Failed" => "badge badge--danger",
        _ => "badge badge--outline",
    }
}

fn items_summary(order: &Order) -> String {
    match order.books.len() {
        0 => "-".to_string(),
        1 => format!("{} x{}", order.books[0].book.title, order.total_quantity()),
        n => format!("{} titles, {} pcs", n, order.total_quantity()),
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let auth = use_auth();
    let config = use_context::<Config>().unwrap_or_default();

    let fetch = use_smart_fetch(
        api::list_orders(auth, config),
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
            page_id="a003_order--list"
            title="Orders management"
            total=Signal::derive(move || fetch.meta().map(|m| m.total))
        >
            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || fetch.search_term())
                    on_change=Callback::new(move |value| fetch.set_search_term(value))
                    placeholder="Search orders"
                />
                <FilterSelect
                    value=Signal::derive(move || fetch.filter_params().status)
                    options=Signal::derive(|| status_options(ORDER_STATUSES))
                    all_label="All statuses"
                    on_change=Callback::new(move |status: Option<String>| {
                        fetch.update_filter_params(|f| f.status = status)
                    })
                />
                <FilterSelect
                    value=Signal::derive(move || fetch.filter_params().payment_status)
                    options=Signal::derive(|| status_options(PAYMENT_STATUSES))
                    all_label="All payments"
                    on_change=Callback::new(move |status: Option<String>| {
                        fetch.update_filter_params(|f| f.payment_status = status)
                    })
                />
                <FilterSelect
                    value=Signal::derive(move || fetch.filter_params().delivery_status)
                    options=Signal::derive(|| status_options(DELIVERY_STATUSES))
                    all_label="All deliveries"
                    on_change=Callback::new(move |status: Option<String>| {
                        fetch.update_filter_params(|f| f.delivery_status = status)
                    })
                />
            </div>

            <ListState
                view=list_view
                error_message="Error loading orders"
                empty_message="No orders found."
            >
                <div class="table-wrapper" class:table-wrapper--fetching=move || fetch.is_fetching()>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"SN"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Items"</TableHeaderCell>
                                <TableHeaderCell>"Amount"</TableHeaderCell>
                                <TableHeaderCell>"Payment"</TableHeaderCell>
                                <TableHeaderCell>"Delivery"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || { fetch.items().into_iter().enumerate().collect::<Vec<_>>() }
                                key=|(index, order)| { (*index, order.id.clone()) }
                                children=move |(index, order)| {
                                    let number = row_number(fetch.meta(), index);
                                    let summary = items_summary(&order);
                                    let amount = format_money(order.final_amount);
                                    let payment_class = status_class(&order.payment_status);
                                    let delivery_class = status_class(&order.delivery_status);
                                    let order_class = status_class(&order.status);
                                    let Order {
                                        user,
                                        payment_method,
                                        status,
                                        payment_status,
                                        delivery_status,
                                        ..
                                    } = order;
                                    view! {
                                        <TableRow>
                                            <TableCell>{number}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <div class="cell-stack">
                                                        <span class="cell-stack__main">{user.name}</span>
                                                        <span class="cell-stack__sub">{user.phone}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{summary}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class="cell-price">{amount}</span>
                                            </TableCell>
                                            <TableCell>
                                                <span class=payment_class>{payment_status}</span>
                                                <span class="cell-stack__sub">{payment_method}</span>
                                            </TableCell>
                                            <TableCell>
                                                <span class=delivery_class>{delivery_status}</span>
                                            </TableCell>
                                            <TableCell>
                                                <span class=order_class>{status}</span>
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

    #[test]
    fn test_status_class() {
        assert_eq!(status_class("Paid"), "badge badge--success");
        assert_eq!(status_class("Processing"), "badge badge--warning");
        assert_eq!(status_class("Failed"), "badge badge--danger");
        assert_eq!(status_class("Refunded"), "badge badge--outline");
    }

    #[test]
    fn test_items_summary() {
        let json = r#"{
            "_id": "o1",
            "user": { "name": "Rahim" },
            "finalAmount": 200,
            "status": "Pending",
            "paymentStatus": "Pending",
            "deliveryStatus": "Processing",
            "books": [{ "quantity": 2, "unitPrice": 100, "book": { "title": "Dune" } }]
        }"#;
        let mut order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(items_summary(&order), "Dune x2");

        order.books.push(order.books[0].clone());
        assert_eq!(items_summary(&order), "2 titles, 4 pcs");

        order.books.clear();
        assert_eq!(items_summary(&order), "-");
    }
}
