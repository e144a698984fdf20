//! Item Store
//!
//! Single owner of the packing list. All mutation goes through the
//! operations below; after every mutation that actually changed the list,
//! each subscribed listener receives a fresh `ListSnapshot`.

use std::fmt;

use crate::error::{ValidationError, ValidationResult};
use crate::item::{Item, ItemId, SortKey};

/// Change listener. Called synchronously after each effective mutation.
pub type Listener = Box<dyn Fn(&ListSnapshot) + Send + Sync>;

/// Handle returned by `ItemStore::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Immutable copy of the list state handed to listeners
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListSnapshot {
    pub items: Vec<Item>,
    pub sort_key: SortKey,
}

pub struct ItemStore {
    items: Vec<Item>,
    sort_key: SortKey,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemStore")
            .field("items", &self.items)
            .field("sort_key", &self.sort_key)
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            sort_key: SortKey::default(),
            next_id: 1,
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    // ========================
    // Read Access
    // ========================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            items: self.items.clone(),
            sort_key: self.sort_key,
        }
    }

    // ========================
    // Subscriptions
    // ========================

    /// Register a listener for state changes
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in &self.listeners {
            listener(&snapshot);
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new unpacked item. The description is stored trimmed.
    pub fn add_item(&mut self, description: &str, quantity: u32) -> ValidationResult<Item> {
        let description = description.trim();
        if description.is_empty() {
            tracing::debug!("rejected item: empty description");
            return Err(ValidationError::EmptyDescription);
        }
        if quantity == 0 {
            tracing::debug!(description, "rejected item: zero quantity");
            return Err(ValidationError::NonPositiveQuantity);
        }

        let id = ItemId(self.next_id);
        self.next_id += 1;
        let item = Item::new(id, description.to_string(), quantity);
        self.items.push(item.clone());
        tracing::debug!(%id, quantity, description, "item added");
        self.notify();
        Ok(item)
    }

    /// Remove an item by id; absent ids are ignored
    pub fn remove_item(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            tracing::trace!(%id, "remove ignored, no such item");
            return;
        }
        tracing::debug!(%id, "item removed");
        self.notify();
    }

    /// Set the packed flag of one item; absent ids are ignored
    pub fn set_packed(&mut self, id: ItemId, packed: bool) {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.packed != packed => {
                item.packed = packed;
                tracing::debug!(%id, packed, "packed flag updated");
                self.notify();
            }
            Some(_) => tracing::trace!(%id, packed, "packed flag unchanged"),
            None => tracing::trace!(%id, "set_packed ignored, no such item"),
        }
    }

    /// Pack everything, or unpack everything if all items are already packed.
    /// An empty list is left alone.
    pub fn check_all(&mut self) {
        if self.items.is_empty() {
            tracing::trace!("check_all ignored, list is empty");
            return;
        }
        let packed = !self.all_packed();
        for item in &mut self.items {
            item.packed = packed;
        }
        tracing::debug!(packed, count = self.items.len(), "all items updated");
        self.notify();
    }

    /// Remove every item. Ids keep counting up afterwards.
    pub fn clear_all(&mut self) {
        if self.items.is_empty() {
            tracing::trace!("clear_all ignored, list is empty");
            return;
        }
        let count = self.items.len();
        self.items.clear();
        tracing::debug!(count, "list cleared");
        self.notify();
    }

    /// Remember `key` and reorder the current items by it (stable).
    /// Items added later are appended, not inserted in order.
    pub fn sort_by(&mut self, key: SortKey) {
        let key_changed = self.sort_key != key;
        self.sort_key = key;

        let before: Vec<ItemId> = self.items.iter().map(|item| item.id).collect();
        self.items.sort_by(|a, b| key.compare(a, b));
        let order_changed = self.items.iter().map(|item| item.id).ne(before);

        if !key_changed && !order_changed {
            tracing::trace!(key = key.as_str(), "sort left list unchanged");
            return;
        }
        tracing::debug!(key = key.as_str(), order_changed, "list sorted");
        self.notify();
    }

    fn all_packed(&self) -> bool {
        self.items.iter().all(|item| item.packed)
    }
}
