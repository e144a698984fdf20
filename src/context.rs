//! Application Context
//!
//! Shared state provided via Leptos Context API. The ItemStore is only
//! reachable through the operations below; components read the view store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use travel_list_core::{
    ExportError, ExportResult, Item, ItemId, ItemStore, ListConfig, NewItem, SortKey, Summary,
};

use crate::platform::{BrowserDocument, BrowserMail, BrowserShare};
use crate::store::{self, Notice, ViewStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Authoritative list state
    items: StoredValue<ItemStore>,
    /// Reactive mirror for rendering
    view: ViewStore,
    config: StoredValue<ListConfig>,
}

impl AppContext {
    /// Wire the view store to the item store and wrap both
    pub fn new(mut items: ItemStore, view: ViewStore, config: ListConfig) -> Self {
        store::store_apply_snapshot(&view, &items.snapshot());
        items.subscribe(Box::new(move |snapshot| store::store_apply_snapshot(&view, snapshot)));
        Self {
            items: StoredValue::new(items),
            view,
            config: StoredValue::new(config),
        }
    }

    // ========================
    // Reads (tracked)
    // ========================

    pub fn items(&self) -> Vec<Item> {
        store::store_items(&self.view)
    }

    pub fn sort_key(&self) -> SortKey {
        store::store_sort_key(&self.view)
    }

    pub fn summary(&self) -> Summary {
        store::store_summary(&self.view)
    }

    pub fn notice(&self) -> Option<Notice> {
        store::store_notice(&self.view)
    }

    pub fn title(&self) -> String {
        self.config.with_value(|config| config.title.clone())
    }

    pub fn quantity_presets(&self) -> Vec<u32> {
        self.config.with_value(|config| config.quantity_presets.clone())
    }

    // ========================
    // List Operations
    // ========================

    /// Add a validated entry; returns the created item
    pub fn add_item(&self, new_item: &NewItem) -> Option<Item> {
        self.items
            .try_update_value(|items| items.add_item(&new_item.description, new_item.quantity))?
            .map_err(|err| tracing::warn!(%err, "store rejected item"))
            .ok()
    }

    pub fn remove_item(&self, id: ItemId) {
        self.items.update_value(|items| items.remove_item(id));
    }

    pub fn set_packed(&self, id: ItemId, packed: bool) {
        self.items.update_value(|items| items.set_packed(id, packed));
    }

    pub fn check_all(&self) {
        self.items.update_value(ItemStore::check_all);
    }

    pub fn clear_all(&self) {
        self.items.update_value(ItemStore::clear_all);
    }

    pub fn sort_by(&self, key: SortKey) {
        self.items.update_value(|items| items.sort_by(key));
    }

    // ========================
    // Exports
    // ========================

    pub fn export_pdf(&self) {
        self.export(|config, items| travel_list_core::export_pdf(&BrowserDocument, config, items));
    }

    pub fn share(&self) {
        self.export(|config, items| travel_list_core::share_list(&BrowserShare, config, items));
    }

    pub fn email(&self) {
        self.export(|config, items| travel_list_core::send_email(&BrowserMail, config, items));
    }

    fn export(&self, action: impl FnOnce(&ListConfig, &[Item]) -> ExportResult<()>) {
        let result = self
            .config
            .with_value(|config| self.items.try_with_value(|items| action(config, items.items())));
        match result {
            Some(Err(err)) if err.is_user_visible() => self.show_notice(notice_text(&err)),
            Some(Err(err)) => tracing::warn!(%err, "export failed"),
            _ => {}
        }
    }

    // ========================
    // Notices
    // ========================

    /// Show a notice that disappears after the configured timeout
    pub fn show_notice(&self, message: String) {
        let id = store::store_push_notice(&self.view, message);
        let timeout = self.config.with_value(|config| config.notice_timeout_ms);
        let view = self.view;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            store::store_dismiss_notice(&view, id);
        });
    }

    pub fn dismiss_notice(&self, id: u32) {
        store::store_dismiss_notice(&self.view, id);
    }
}

fn notice_text(err: &ExportError) -> String {
    match err {
        ExportError::Unsupported { capability } => {
            format!("{} not supported in this browser.", capability)
        }
        other => other.to_string(),
    }
}
