//! Help Modal Component
//!
//! Overlay explaining the rarity color codes and the progress
//! export/import workflow. Clicking the overlay closes it; clicks inside
//! the content are swallowed.

use leptos::prelude::*;

use crate::models::Rarity;

const RARITY_GUIDE: [(Rarity, &str); 5] = [
    (Rarity::Common, "Level 1-4: base pictos, easy to reach"),
    (Rarity::Uncommon, "Level 5-9: intermediate pictos"),
    (Rarity::Rare, "Level 10-14: rare pictos with significant effects"),
    (Rarity::Epic, "Level 15-24: epic pictos, very powerful"),
    (Rarity::Legendary, "Level 25+: the rarest and most powerful pictos"),
];

#[component]
pub fn HelpModal(set_show_help: WriteSignal<bool>) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| set_show_help.set(false)>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"🎨 Color Code Guide"</h2>
                    <button class="modal-close-btn" on:click=move |_| set_show_help.set(false)>
                        "✕"
                    </button>
                </div>

                <div class="modal-body">
                    <div class="color-guide">
                        <h3>"Picto rarity (based on level)"</h3>
                        {RARITY_GUIDE
                            .iter()
                            .map(|&(rarity, description)| {
                                view! {
                                    <div class="color-item">
                                        <span class=format!("color-badge {}", rarity.css_class())>
                                            {rarity.label()}
                                        </span>
                                        <span class="color-description">{description}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="usage-tips">
                        <h3>"💾 Saving and sharing progress"</h3>
                        <ul>
                            <li>
                                <strong>"Export: "</strong>
                                "downloads a JSON backup file of your current progress."
                            </li>
                            <li>
                                <strong>"Import: "</strong>
                                "select a previously exported file to restore it. "
                                "Importing fully replaces your current progress."
                            </li>
                            <li>
                                "Move between devices by exporting on one and importing on the other."
                            </li>
                            <li>"Backup files contain only picto ids, no personal data."</li>
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
