//! View Control State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity over the table's
//! control state. All mutation goes through the intent helpers below, which
//! also enforce the page-reset rule: any intent that can change the derived
//! row set sends the user back to page 1.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::view::{ProgressFilter, SortDirection, SortField};

/// Control state for the picto table
#[derive(Clone, Debug, Store)]
pub struct ViewState {
    pub search_term: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub progress_filter: ProgressFilter,
    /// 1-based current page
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: SortField::Id,
            sort_direction: SortDirection::Asc,
            progress_filter: ProgressFilter::All,
            current_page: 1,
        }
    }
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

// ========================
// Intent Helpers
// ========================

/// Change the search term
pub fn store_set_search(store: &ViewStore, term: String) {
    store.search_term().set(term);
    store.current_page().set(1);
}

/// Column-header click: same field toggles direction, new field sorts ascending
pub fn store_sort_by(store: &ViewStore, field: SortField) {
    if store.sort_field().get() == field {
        store.sort_direction().update(|dir| *dir = dir.flipped());
    } else {
        store.sort_field().set(field);
        store.sort_direction().set(SortDirection::Asc);
    }
    store.current_page().set(1);
}

/// Change the progress filter
pub fn store_set_filter(store: &ViewStore, filter: ProgressFilter) {
    store.progress_filter().set(filter);
    store.current_page().set(1);
}

/// Jump to a page; leaves the rest of the control state alone
pub fn store_set_page(store: &ViewStore, page: usize) {
    store.current_page().set(page);
}
