//! Item Entity
//!
//! A single packing-list entry and the keys the list can be sorted by.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collate;

/// Identifier handed out by `ItemStore`, never reused within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A packing-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// What to pack (never empty)
    pub description: String,
    /// How many (always > 0)
    pub quantity: u32,
    /// Packed status
    pub packed: bool,
}

impl Item {
    /// Create an unpacked item. Callers are expected to have validated the input.
    pub(crate) fn new(id: ItemId, description: String, quantity: u32) -> Self {
        Self {
            id,
            description,
            quantity,
            packed: false,
        }
    }

    /// Row/export label, e.g. `2 x Socks`
    pub fn label(&self) -> String {
        format!("{} x {}", self.quantity, self.description)
    }
}

/// Sort key selected in the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Description,
    Quantity,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Description, SortKey::Quantity];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Description => "description",
            SortKey::Quantity => "quantity",
        }
    }

    /// Unknown values fall back to the default key
    pub fn from_str(s: &str) -> Self {
        match s {
            "quantity" => SortKey::Quantity,
            _ => SortKey::Description,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Description => "Description",
            SortKey::Quantity => "Quantity",
        }
    }

    /// Comparator used by `ItemStore::sort_by`
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortKey::Description => collate::compare(&a.description, &b.description),
            SortKey::Quantity => a.quantity.cmp(&b.quantity),
        }
    }
}
