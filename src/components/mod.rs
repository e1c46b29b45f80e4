//! UI Components
//!
//! Reusable Leptos components.

mod help_modal;
mod notification;
mod pagination;
mod picto_table;
mod progress_controls;
mod search_bar;
mod stats_footer;

pub use help_modal::HelpModal;
pub use notification::NotificationToast;
pub use pagination::Pagination;
pub use picto_table::PictoTable;
pub use progress_controls::ProgressControls;
pub use search_bar::SearchBar;
pub use stats_footer::StatsFooter;
