//! Picto Table Component
//!
//! The main reference table: sortable column headers, per-row obtained
//! checkbox, rarity-colored badges, and multi-line bonus text.

use leptos::prelude::*;

use crate::context::SessionContext;
use crate::models::Picto;
use crate::state::{store_sort_by, use_view_store, ViewStateStoreFields};
use crate::view::{SortDirection, SortField};

/// Sortable columns, in display order. The progress column sits between
/// ID and Name and is not sortable.
const COLUMNS: [(SortField, &str); 6] = [
    (SortField::Id, "ID"),
    (SortField::Name, "Name"),
    (SortField::Niveau, "⚔️ Level"),
    (SortField::Bonus, "🎯 Bonus"),
    (SortField::Zone, "🗺️ Zone"),
    (SortField::Emplacement, "📍 Location"),
];

#[component]
pub fn PictoTable(rows: Memo<Vec<Picto>>) -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let store = use_view_store();

    let sort_icon = move |field: SortField| {
        if store.sort_field().get() != field {
            "↕️"
        } else if store.sort_direction().get() == SortDirection::Asc {
            "↑"
        } else {
            "↓"
        }
    };

    let header = move |field: SortField, label: &'static str| {
        view! {
            <th class="sortable" on:click=move |_| store_sort_by(&store, field)>
                {label} " " {move || sort_icon(field)}
            </th>
        }
    };

    view! {
        <div class="table-container">
            <table class="pictos-table">
                <thead>
                    <tr>
                        {header(COLUMNS[0].0, COLUMNS[0].1)}
                        <th class="progress-header">"✅ Progress"</th>
                        {COLUMNS[1..]
                            .iter()
                            .map(|&(field, label)| header(field, label))
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|picto| picto.id
                        children=move |picto| {
                            let id = picto.id;
                            let rarity = picto.rarity().css_class();
                            let is_obtained = move || session.progress.with(|p| p.contains(id));
                            let bonus_lines: Vec<String> =
                                picto.bonus.split('\n').map(str::to_string).collect();

                            view! {
                                <tr class="picto-row">
                                    <td class="id-cell">{format!("#{id}")}</td>
                                    <td class="progress-cell">
                                        <input
                                            type="checkbox"
                                            class="progress-checkbox"
                                            prop:checked=is_obtained
                                            title=move || {
                                                if is_obtained() {
                                                    "Mark as missing"
                                                } else {
                                                    "Mark as obtained"
                                                }
                                            }
                                            on:change=move |_| session.toggle(id)
                                        />
                                    </td>
                                    <td class="name-cell">
                                        <span class=format!("name-badge {rarity}")>
                                            {picto.name.clone()}
                                        </span>
                                    </td>
                                    <td class="niveau-cell">
                                        <span class=format!("niveau-badge {rarity}")>
                                            {picto.niveau.clone()}
                                        </span>
                                    </td>
                                    <td class="bonus-cell">
                                        <div class="bonus-content">
                                            {bonus_lines
                                                .into_iter()
                                                .map(|line| view! { <div class="bonus-line">{line}</div> })
                                                .collect_view()}
                                        </div>
                                    </td>
                                    <td class="zone-cell">{picto.zone.clone()}</td>
                                    <td class="emplacement-cell">{picto.emplacement.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
