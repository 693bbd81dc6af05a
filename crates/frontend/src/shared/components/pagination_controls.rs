use crate::shared::icons::icon;
use leptos::prelude::*;
use std::ops::RangeInclusive;

/// Most page buttons shown at once
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// Page numbers to show as buttons (1-based).
///
/// Up to five buttons; the window slides with the current page and is clamped
/// at both ends. Empty when there are no pages.
pub fn page_window(current_page: u32, total_pages: u32) -> RangeInclusive<u32> {
    if total_pages <= MAX_PAGE_BUTTONS {
        1..=total_pages
    } else if current_page <= 3 {
        1..=MAX_PAGE_BUTTONS
    } else if current_page >= total_pages - 2 {
        (total_pages - 4)..=total_pages
    } else {
        (current_page - 2)..=(current_page + 2)
    }
}

pub fn is_previous_disabled(current_page: u32) -> bool {
    current_page <= 1
}

pub fn is_next_disabled(current_page: u32, total_pages: u32) -> bool {
    current_page >= total_pages
}

/// PaginationControls component - page-number pagination of a server list
///
/// Pages are 1-based. Renders previous / next arrows around the window of
/// [`page_window`].
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            // В RTL "предыдущая" стоит справа, поэтому стрелка вправо
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if !is_previous_disabled(page) {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || is_previous_disabled(current_page.get())
                title="صفحه قبل"
            >
                {icon("chevron-right")}
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get())
                    .map(|page| {
                        let class = if page == current {
                            "pagination-btn pagination-btn--active"
                        } else {
                            "pagination-btn"
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if !is_next_disabled(page, total_pages.get()) {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || is_next_disabled(current_page.get(), total_pages.get())
                title="صفحه بعد"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} مورد", total_count.get())}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(current: u32, total: u32) -> Vec<u32> {
        page_window(current, total).collect()
    }

    #[test]
    fn test_window_case_table() {
        assert_eq!(window(2, 3), vec![1, 2, 3]);
        assert_eq!(window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(window(9, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_edges() {
        assert_eq!(window(3, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(4, 10), vec![2, 3, 4, 5, 6]);
        assert_eq!(window(7, 10), vec![5, 6, 7, 8, 9]);
        assert_eq!(window(8, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(window(1, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(4, 6), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_window_without_pages() {
        assert!(window(1, 0).is_empty());
        assert_eq!(window(1, 1), vec![1]);
    }

    #[test]
    fn test_window_never_exceeds_five() {
        for total in 0..40 {
            for current in 1..=total.max(1) {
                let pages = window(current, total);
                assert!(pages.len() as u32 <= MAX_PAGE_BUTTONS);
                if total > 0 {
                    assert!(pages.contains(&current));
                    assert!(pages.iter().all(|p| (1..=total).contains(p)));
                }
            }
        }
    }

    #[test]
    fn test_prev_next_disabled() {
        assert!(is_previous_disabled(1));
        assert!(!is_previous_disabled(2));
        assert!(is_next_disabled(10, 10));
        assert!(!is_next_disabled(9, 10));
        // no pages: both arrows inert
        assert!(is_next_disabled(1, 0));
    }
}
