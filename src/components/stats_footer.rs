//! Stats Footer Component
//!
//! Session totals: catalog size, obtained, missing, and completion
//! percentage. An empty catalog counts as 0% complete.

use leptos::prelude::*;

use crate::context::SessionContext;

#[component]
pub fn StatsFooter(catalog_size: Signal<usize>) -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");

    let obtained = move || session.progress.with(|p| p.len());
    let missing = move || catalog_size.get().saturating_sub(obtained());
    let percentage = move || {
        let total = catalog_size.get();
        if total == 0 {
            0
        } else {
            ((obtained() as f64 / total as f64) * 100.0).round() as u32
        }
    };

    view! {
        <footer class="table-footer">
            <div class="stats">
                <div class="stat-item">
                    <span class="stat-label">"Total pictos:"</span>
                    <span class="stat-value">{move || catalog_size.get()}</span>
                </div>
                <div class="stat-item">
                    <span class="stat-label">"Obtained:"</span>
                    <span class="stat-value obtained">{obtained}</span>
                </div>
                <div class="stat-item">
                    <span class="stat-label">"Missing:"</span>
                    <span class="stat-value missing">{missing}</span>
                </div>
                <div class="stat-item">
                    <span class="stat-label">"Completion:"</span>
                    <span class="stat-value progress">
                        {move || format!("{}%", percentage())}
                    </span>
                </div>
            </div>
        </footer>
    }
}
