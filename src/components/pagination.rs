//! Pagination Component
//!
//! Prev/next buttons, the five-wide numbered page window, and the page
//! indicator. Hidden entirely while everything fits on one page.

use leptos::prelude::*;

use crate::pager::page_window;
use crate::state::{store_set_page, use_view_store, ViewStateStoreFields};

#[component]
pub fn Pagination(total_pages: Memo<usize>) -> impl IntoView {
    let store = use_view_store();
    let current = move || store.current_page().get();

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-container">
                <button
                    class="pagination-btn"
                    disabled=move || current() <= 1
                    on:click=move |_| store_set_page(&store, current() - 1)
                >
                    "⬅️ Previous"
                </button>

                <div class="pagination-info">
                    <span class="page-numbers">
                        <For
                            each=move || page_window(current(), total_pages.get())
                            key=|page| *page
                            children=move |page| {
                                let btn_class = move || {
                                    if current() == page { "page-btn active" } else { "page-btn" }
                                };
                                view! {
                                    <button
                                        class=btn_class
                                        on:click=move |_| store_set_page(&store, page)
                                    >
                                        {page}
                                    </button>
                                }
                            }
                        />
                    </span>
                    <span class="page-info">
                        {move || format!("Page {} of {}", current(), total_pages.get())}
                    </span>
                </div>

                <button
                    class="pagination-btn"
                    disabled=move || current() >= total_pages.get()
                    on:click=move |_| store_set_page(&store, current() + 1)
                >
                    "Next ➡️"
                </button>
            </div>
        </Show>
    }
}
