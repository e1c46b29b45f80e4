//! Picto Finder App
//!
//! Top-level component: owns the catalog and the derived view, wires the
//! session context and view store, and lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::catalog;
use crate::components::{
    HelpModal, NotificationToast, Pagination, PictoTable, ProgressControls, SearchBar,
    StatsFooter,
};
use crate::context::SessionContext;
use crate::models::Picto;
use crate::pager::{self, PAGE_SIZE};
use crate::state::{ViewState, ViewStateStoreFields};
use crate::storage::LocalStorageProgress;
use crate::view::{apply_view, ViewQuery};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (pictos, set_pictos) = signal(Vec::<Picto>::new());
    let (loading, set_loading) = signal(true);
    let (show_help, set_show_help) = signal(false);

    let session = SessionContext::new(Rc::new(LocalStorageProgress));
    let view_store = Store::new(ViewState::default());

    // Provide context to all children
    provide_context(session);
    provide_context(view_store);

    // Load the catalog once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match catalog::fetch_catalog().await {
                Ok(catalog) => {
                    web_sys::console::log_1(
                        &format!("[app] loaded {} pictos", catalog.len()).into(),
                    );
                    set_pictos.set(catalog);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[app] failed to load the picto catalog: {err:?}").into(),
                    );
                }
            }
            set_loading.set(false);
        });
    });

    // Derived view: recomputed only when the catalog, progress set, or one
    // of the query fields actually changes.
    let filtered = Memo::new(move |_| {
        let query = ViewQuery {
            search_term: view_store.search_term().get(),
            progress_filter: view_store.progress_filter().get(),
            sort_field: view_store.sort_field().get(),
            sort_direction: view_store.sort_direction().get(),
        };
        pictos.with(|catalog| session.progress.with(|progress| apply_view(catalog, progress, &query)))
    });

    let total_pages = Memo::new(move |_| {
        filtered.with(|rows| pager::total_pages(rows.len(), PAGE_SIZE))
    });

    let page_rows = Memo::new(move |_| {
        let page = view_store.current_page().get();
        filtered.with(|rows| pager::page_items(rows, page, PAGE_SIZE).to_vec())
    });

    let catalog_size = Signal::derive(move || pictos.with(Vec::len));
    let result_count = Signal::derive(move || filtered.with(Vec::len));

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| {
                view! {
                    <div class="loading-container">
                        <div class="loading-spinner"></div>
                        <p>"Loading pictos..."</p>
                    </div>
                }
            }
        >
            <div class="allpicto-container">
                <header class="allpicto-header">
                    <h1>"🎯 Picto Finder"</h1>
                    <p class="subtitle">
                        {move || format!("Browse all {} pictos of the expedition", catalog_size.get())}
                    </p>
                </header>

                <SearchBar result_count=result_count set_show_help=set_show_help />
                <ProgressControls catalog_size=catalog_size />
                <PictoTable rows=page_rows />
                <Pagination total_pages=total_pages />
                <StatsFooter catalog_size=catalog_size />

                <Show when=move || show_help.get()>
                    <HelpModal set_show_help=set_show_help />
                </Show>

                <NotificationToast />
            </div>
        </Show>
    }
}
