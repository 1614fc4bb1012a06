/// Shared helpers for list screens
use chrono::{DateTime, Utc};
use contracts::shared::list_response::ListMeta;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Serial number of a row: continues across pages when `meta` is known
pub fn row_number(meta: Option<ListMeta>, index: usize) -> u64 {
    let offset = meta
        .filter(|m| m.page > 0 && m.limit > 0)
        .map(|m| u64::from(m.page - 1) * u64::from(m.limit))
        .unwrap_or(0);
    offset + index as u64 + 1
}

/// Amount with two decimals and the taka sign
pub fn format_money(amount: f64) -> String {
    format!("৳{:.2}", amount)
}

/// Date part of a timestamp, "-" when missing
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Search box with a clear button
///
/// Reports every keystroke; debouncing happens in the list controller.
#[component]
pub fn SearchInput(
    /// Current search text
    #[prop(into)]
    value: Signal<String>,
    /// Callback for every change of the text
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=move |_| on_change.run(String::new())
                        title="Clear"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Dropdown over one filter key; the empty option means "not filtered"
#[component]
pub fn FilterSelect(
    /// Selected value, `None` for the "all" option
    #[prop(into)]
    value: Signal<Option<String>>,
    /// `(value, label)` pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Label of the empty option
    #[prop(into)]
    all_label: String,
    #[prop(into)]
    on_change: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <select
            class="list-toolbar__select"
            prop:value=move || value.get().unwrap_or_default()
            on:change=move |ev| {
                let selected = event_target_value(&ev);
                on_change.run(Some(selected).filter(|v| !v.is_empty()));
            }
        >
            <option value="">{all_label}</option>
            <For
                each=move || options.get()
                key=|(value, _)| value.clone()
                children=move |(value, label)| view! { <option value=value>{label}</option> }
            />
        </select>
    }
}

/// Options for a fixed list of status names
pub fn status_options(statuses: &[&str]) -> Vec<(String, String)> {
    statuses
        .iter()
        .map(|s| (s.to_string(), s.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_row_number() {
        let meta = ListMeta {
            page: 3,
            limit: 10,
            total: 45,
            total_page: 5,
        };
        assert_eq!(row_number(Some(meta), 0), 21);
        assert_eq!(row_number(Some(meta), 9), 30);
        assert_eq!(row_number(None, 4), 5);
        assert_eq!(row_number(Some(ListMeta::default()), 0), 1);
    }

    #[test]
    fn test_status_options() {
        let options = status_options(&["Pending", "Paid"]);
        assert_eq!(options[1], ("Paid".to_string(), "Paid".to_string()));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(560.0), "৳560.00");
        assert_eq!(format_money(12.345), "৳12.35");
    }

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(Some(&dt)), "15.03.2024");
        assert_eq!(format_date(None), "-");
    }
}
