//! View State Store
//!
//! Reactive mirror of the ItemStore snapshot plus transient UI state.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use travel_list_core::{Item, ListSnapshot, SortKey, Summary};

/// Transient message shown above the footer
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
}

/// What the components render from
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Items of the latest snapshot, in list order
    pub items: Vec<Item>,
    /// Sort key of the latest snapshot
    pub sort_key: SortKey,
    /// Notice currently on screen
    pub notice: Option<Notice>,
    /// Number of notices shown so far (ids for dismissal)
    pub notices_shown: u32,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

// ========================
// Store Helper Functions
// ========================

/// Copy an ItemStore snapshot into the view
pub fn store_apply_snapshot(store: &ViewStore, snapshot: &ListSnapshot) {
    *store.items().write() = snapshot.items.clone();
    if store.sort_key().get_untracked() != snapshot.sort_key {
        store.sort_key().set(snapshot.sort_key);
    }
}

pub fn store_items(store: &ViewStore) -> Vec<Item> {
    store.items().get()
}

pub fn store_sort_key(store: &ViewStore) -> SortKey {
    store.sort_key().get()
}

pub fn store_summary(store: &ViewStore) -> Summary {
    Summary::from_items(&store.items().read())
}

pub fn store_notice(store: &ViewStore) -> Option<Notice> {
    store.notice().get()
}

/// Show a notice and return its id
pub fn store_push_notice(store: &ViewStore, message: String) -> u32 {
    let id = store.notices_shown().get_untracked() + 1;
    store.notices_shown().set(id);
    store.notice().set(Some(Notice { id, message }));
    id
}

/// Clear the notice if it is still the one with `id`
pub fn store_dismiss_notice(store: &ViewStore, id: u32) {
    let current = store.notice().with_untracked(|notice| notice.as_ref().map(|n| n.id));
    if current == Some(id) {
        store.notice().set(None);
    }
}
