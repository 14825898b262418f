use leptos::prelude::*;

/// Pagination bar for the campaign lists
///
/// Prev/next buttons, windowed page numbers with ellipsis, the result
/// range line and a page-size select. Pages are 1-based to match what the
/// buttons display.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items after filtering
    #[prop(into)]
    total_items: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to [6, 12, 18, 24])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![6, 12, 18, 24]);

    // Page numbers near the current page plus both edges; the gaps
    // collapse into a single ellipsis on each side.
    let page_numbers = move || {
        let current = current_page.get();
        let total = total_pages.get();
        let mut out = Vec::new();
        for number in 1..=total {
            let visible = number.abs_diff(current) <= 1 || number == 1 || number == total;
            if visible {
                let is_current = number == current;
                out.push(
                    view! {
                        <button
                            class=if is_current { "pagination-page pagination-page--current" } else { "pagination-page" }
                            on:click=move |_| on_page_change.run(number)
                        >
                            {number}
                        </button>
                    }
                    .into_any(),
                );
            } else if number == 2 || number + 1 == total {
                out.push(view! { <span class="pagination-dots">"..."</span> }.into_any());
            }
        }
        out
    };

    view! {
        <div class="pagination-controls">
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(6);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {format!("{} per page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>

            <span class="pagination-info">
                {move || {
                    let total = total_items.get();
                    let page = current_page.get();
                    let size = page_size.get();
                    let from = (page.saturating_sub(1).saturating_mul(size) + 1).min(total);
                    let to = page.saturating_mul(size).min(total);
                    format!("Showing {} to {} of {} campaigns", from, to, total)
                }}
            </span>

            <div class="pagination-pages">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                >
                    "← Previous"
                </button>
                {page_numbers}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        let total = total_pages.get();
                        if page < total {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || {
                        let total = total_pages.get();
                        current_page.get() >= total || total == 0
                    }
                >
                    "Next →"
                </button>
            </div>
        </div>
    }
}
