//! Travel List Core
//!
//! Browser-independent packing list logic:
//! - item: Item entity and sort keys
//! - store: ItemStore, the single owner of list state, with change listeners
//! - entry: Entry form draft and input validation
//! - summary: Packed statistics and status prompts
//! - export: Text rendering for PDF/share/email and the collaborator traits
//! - config: User-facing labels and presets

mod collate;
mod config;
mod entry;
mod error;
mod export;
mod item;
mod store;
mod summary;

#[cfg(test)]
mod tests;

pub use config::ListConfig;
pub use entry::{parse_quantity, EntryDraft, NewItem, QuantityChoice, CUSTOM_OPTION};
pub use error::{ExportError, ExportResult, ValidationError, ValidationResult};
pub use export::{
    email_body, export_pdf, item_line, mailto_link, send_email, share_list, share_text, DocumentSink,
    MailNavigator, PrintableDocument, SharePayload, ShareTarget,
};
pub use item::{Item, ItemId, SortKey};
pub use store::{ItemStore, ListSnapshot, Listener, SubscriptionId};
pub use summary::{PackingStatus, Summary};
