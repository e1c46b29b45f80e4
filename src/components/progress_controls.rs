//! Progress Controls Component
//!
//! Progress filter buttons with live counts, plus the snapshot export
//! button and import file picker.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::context::SessionContext;
use crate::export;
use crate::progress::{parse_snapshot, ProgressSnapshot};
use crate::state::{store_set_filter, use_view_store, ViewStateStoreFields};
use crate::view::ProgressFilter;

#[component]
pub fn ProgressControls(catalog_size: Signal<usize>) -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let store = use_view_store();

    let obtained_count = move || session.progress.with(|p| p.len());
    let missing_count = move || catalog_size.get().saturating_sub(obtained_count());

    let filter_class = move |filter: ProgressFilter| {
        if store.progress_filter().get() == filter {
            "progress-filter-btn active"
        } else {
            "progress-filter-btn"
        }
    };

    let on_export = move |_| {
        let snapshot = session.progress.with_untracked(|progress| {
            ProgressSnapshot::new(progress, catalog_size.get_untracked(), export::now_iso())
        });
        if let Err(err) = export::download_snapshot(&snapshot) {
            web_sys::console::error_1(&format!("[export] download failed: {err:?}").into());
            session.notify_error("Could not export the progress file.".to_string());
        }
    };

    let on_import = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Reset so picking the same file again re-fires the change event.
        input.set_value("");

        spawn_local(async move {
            let raw = match JsFuture::from(file.text()).await {
                Ok(text) => text.as_string().unwrap_or_default(),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[import] failed to read file: {err:?}").into(),
                    );
                    session.notify_error("Could not read the selected file.".to_string());
                    return;
                }
            };
            match parse_snapshot(&raw) {
                Ok(imported) => {
                    let count = imported.len();
                    session.replace(imported);
                    session.notify_success(format!(
                        "Progress imported: {count} picto(s) marked as obtained."
                    ));
                }
                Err(err) => session.notify_error(err.to_string()),
            }
        });
    };

    view! {
        <div class="progress-controls">
            <div class="progress-filters">
                <button
                    class=move || filter_class(ProgressFilter::All)
                    on:click=move |_| store_set_filter(&store, ProgressFilter::All)
                >
                    {move || format!("📋 All ({})", catalog_size.get())}
                </button>
                <button
                    class=move || filter_class(ProgressFilter::Obtained)
                    on:click=move |_| store_set_filter(&store, ProgressFilter::Obtained)
                >
                    {move || format!("✅ Obtained ({})", obtained_count())}
                </button>
                <button
                    class=move || filter_class(ProgressFilter::Missing)
                    on:click=move |_| store_set_filter(&store, ProgressFilter::Missing)
                >
                    {move || format!("❌ Missing ({})", missing_count())}
                </button>
            </div>

            <div class="progress-actions">
                <button class="export-btn" on:click=on_export>
                    "📤 Export progress"
                </button>
                <label class="import-btn">
                    "📥 Import progress"
                    <input
                        type="file"
                        accept=".json"
                        style="display: none"
                        on:change=on_import
                    />
                </label>
            </div>
        </div>
    }
}
