use crate::domain::a001_leaderboard::pagination::{next_page, previous_page, total_pages, visible_page_window};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - first/prev, a window of page buttons, next/last
///
/// Pages are 1-based. The caller decides whether to render it at all.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    page: Signal<usize>,

    /// Total count of items after filtering
    #[prop(into)]
    total_items: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// How many page buttons to show around the current one (defaults to 9)
    #[prop(optional)]
    num_visible_pages: Option<usize>,
) -> impl IntoView {
    let num_visible = num_visible_pages.unwrap_or(9);
    let page_count = move || total_pages(total_items.get(), page_size.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || page.get() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(target) = previous_page(page.get(), page_count()) {
                        on_page_change.run(target);
                    }
                }
                disabled=move || previous_page(page.get(), page_count()).is_none()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = page.get();
                visible_page_window(current, page_count(), num_visible)
                    .map(|p| {
                        let class = if p == current { "pagination-btn pagination-btn--active" } else { "pagination-btn" };
                        view! {
                            <button class=class on:click=move |_| on_page_change.run(p)>
                                {p.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(target) = next_page(page.get(), page_count()) {
                        on_page_change.run(target);
                    }
                }
                disabled=move || next_page(page.get(), page_count()).is_none()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = page_count();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=move || page_count() == 0 || page.get() == page_count()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
