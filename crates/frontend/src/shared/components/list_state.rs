use leptos::prelude::*;

/// Which part of a list screen is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Error,
    Empty,
    Rows,
}

impl ListView {
    /// Loading wins over a stale error; rows only show when there are any
    pub fn pick(is_loading: bool, is_error: bool, row_count: usize) -> Self {
        if is_loading {
            ListView::Loading
        } else if is_error {
            ListView::Error
        } else if row_count == 0 {
            ListView::Empty
        } else {
            ListView::Rows
        }
    }
}

/// Switches between the loading skeleton, the error and empty messages, and
/// the table passed as children
#[component]
pub fn ListState(
    #[prop(into)] view: Signal<ListView>,
    #[prop(into)] error_message: String,
    #[prop(into)] empty_message: String,
    children: ChildrenFn,
) -> impl IntoView {
    move || match view.get() {
        ListView::Loading => view! {
            <div class="list-state list-state--loading">
                {(0..5).map(|_| view! { <div class="skeleton-row"></div> }).collect_view()}
            </div>
        }
        .into_any(),
        ListView::Error => view! {
            <div class="alert alert--error">{error_message.clone()}</div>
        }
        .into_any(),
        ListView::Empty => view! {
            <div class="list-state list-state--empty">{empty_message.clone()}</div>
        }
        .into_any(),
        ListView::Rows => children().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick() {
        assert_eq!(ListView::pick(true, true, 3), ListView::Loading);
        assert_eq!(ListView::pick(false, true, 0), ListView::Error);
        assert_eq!(ListView::pick(false, false, 0), ListView::Empty);
        assert_eq!(ListView::pick(false, false, 10), ListView::Rows);
    }
}
