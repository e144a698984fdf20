//! UI Components
//!
//! Leptos components of the travel list.

mod entry_form;
mod item_row;
mod notice_banner;
mod packing_list;
mod summary_panel;

pub use entry_form::EntryForm;
pub use item_row::ItemRow;
pub use notice_banner::NoticeBanner;
pub use packing_list::PackingList;
pub use summary_panel::SummaryPanel;
