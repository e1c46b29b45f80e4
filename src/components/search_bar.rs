//! Search Bar Component
//!
//! Free-text search across name, bonus, zone, and emplacement, plus the
//! help button and the live result count.

use leptos::prelude::*;

use crate::state::{store_set_search, use_view_store, ViewStateStoreFields};

#[component]
pub fn SearchBar(result_count: Signal<usize>, set_show_help: WriteSignal<bool>) -> impl IntoView {
    let store = use_view_store();

    view! {
        <div class="search-container">
            <div class="search-box">
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search pictos (name, bonus, zone, location)..."
                    prop:value=move || store.search_term().get()
                    on:input=move |ev| store_set_search(&store, event_target_value(&ev))
                />
            </div>

            <div class="search-actions">
                <button
                    class="help-btn"
                    title="Color code guide"
                    on:click=move |_| set_show_help.set(true)
                >
                    "❓ Help"
                </button>

                <div class="results-info">
                    {move || format!("{} picto(s) found", result_count.get())}
                </div>
            </div>
        </div>
    }
}
