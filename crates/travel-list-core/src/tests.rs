//! Packing List Scenario Tests
//!
//! End-to-end flows through ItemStore, EntryDraft and Summary, plus
//! property tests for the store operations.

#[cfg(test)]
mod tests {
    use crate::{EntryDraft, ItemStore, PackingStatus, SortKey, Summary};

    fn order(store: &ItemStore) -> Vec<String> {
        store.items().iter().map(|i| i.description.clone()).collect()
    }

    #[test]
    fn test_sort_scenario() {
        let mut store = ItemStore::new();
        store.add_item("Socks", 2).unwrap();
        store.add_item("Hat", 1).unwrap();

        store.sort_by(SortKey::Description);
        assert_eq!(order(&store), vec!["Hat", "Socks"]);

        store.sort_by(SortKey::Quantity);
        assert_eq!(order(&store), vec!["Hat", "Socks"]);
    }

    #[test]
    fn test_each_sort_starts_from_current_snapshot() {
        let mut store = ItemStore::new();
        store.add_item("Camera", 1).unwrap();
        store.add_item("Adapter", 2).unwrap();
        store.add_item("Boots", 1).unwrap();

        store.sort_by(SortKey::Description);
        assert_eq!(order(&store), vec!["Adapter", "Boots", "Camera"]);

        // Stable on the description-sorted list, not on insertion order
        store.sort_by(SortKey::Quantity);
        assert_eq!(order(&store), vec!["Boots", "Camera", "Adapter"]);
    }

    #[test]
    fn test_empty_list_prompts_start() {
        let store = ItemStore::new();
        let summary = Summary::from_items(store.items());
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.status(), PackingStatus::NotStarted);
    }

    #[test]
    fn test_half_packed_prompts_keep_going() {
        let mut store = ItemStore::new();
        let socks = store.add_item("Socks", 2).unwrap();
        store.add_item("Hat", 1).unwrap();
        store.set_packed(socks.id, true);

        let summary = Summary::from_items(store.items());
        assert_eq!(summary.percentage, 50);
        assert_eq!(summary.status(), PackingStatus::InProgress);
    }

    #[test]
    fn test_check_all_reaches_done() {
        let mut store = ItemStore::new();
        store.add_item("Socks", 2).unwrap();
        store.add_item("Hat", 1).unwrap();
        store.check_all();

        assert_eq!(Summary::from_items(store.items()).status(), PackingStatus::Done);
    }

    #[test]
    fn test_clear_all_resets_summary() {
        let mut store = ItemStore::new();
        for (name, qty) in [("Socks", 2), ("Hat", 1), ("Passport", 1)] {
            store.add_item(name, qty).unwrap();
        }
        store.check_all();
        store.clear_all();

        assert!(store.is_empty());
        assert_eq!(Summary::from_items(store.items()).percentage, 0);
    }

    #[test]
    fn test_form_to_store() {
        let mut store = ItemStore::new();
        let mut draft = EntryDraft::new(&[1, 2, 3]);

        draft.set_description("Sunscreen");
        draft.select_quantity("custom");
        draft.set_custom_quantity("4");
        let new_item = draft.submit().unwrap();
        let item = store.add_item(&new_item.description, new_item.quantity).unwrap();

        assert_eq!(item.label(), "4 x Sunscreen");
        assert!(draft.description().is_empty());
        assert!(!draft.is_custom());

        // Blocked at the form, store untouched
        draft.set_description("");
        assert!(draft.submit().is_err());
        assert_eq!(store.len(), 1);
    }
}

#[cfg(test)]
mod proptest_tests {
    use crate::{ItemId, ItemStore, Summary};
    use proptest::prelude::*;

    fn store_with(entries: &[(String, u32, bool)]) -> ItemStore {
        let mut store = ItemStore::new();
        for (description, quantity, packed) in entries {
            let item = store.add_item(description, *quantity).unwrap();
            store.set_packed(item.id, *packed);
        }
        store
    }

    fn entries() -> impl Strategy<Value = Vec<(String, u32, bool)>> {
        prop::collection::vec(("[A-Za-z][A-Za-z ]{0,19}", 1u32..50, any::<bool>()), 0..20)
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a valid add grows the list by one unpacked item.
        #[test]
        fn add_grows_by_one(
            existing in entries(),
            description in "[A-Za-z][A-Za-z0-9 ]{0,29}",
            quantity in 1u32..1000
        ) {
            let mut store = store_with(&existing);
            let before = store.len();
            let item = store.add_item(&description, quantity).unwrap();

            prop_assert_eq!(store.len(), before + 1);
            prop_assert!(!item.packed);
            prop_assert_eq!(store.items().last(), Some(&item));
        }

        /// Property: removing an unknown id changes nothing.
        #[test]
        fn remove_unknown_is_noop(existing in entries(), offset in 1u64..100) {
            let mut store = store_with(&existing);
            let before = store.snapshot();
            let unknown = ItemId(existing.len() as u64 + offset);

            store.remove_item(unknown);
            prop_assert_eq!(store.snapshot(), before);
        }

        /// Property: set_packed twice equals set_packed once.
        #[test]
        fn set_packed_idempotent(existing in entries(), index in any::<prop::sample::Index>(), packed in any::<bool>()) {
            prop_assume!(!existing.is_empty());
            let mut store = store_with(&existing);
            let id = store.items()[index.index(existing.len())].id;

            store.set_packed(id, packed);
            let once = store.snapshot();
            store.set_packed(id, packed);
            prop_assert_eq!(store.snapshot(), once);
        }

        /// Property: check_all yields a uniform list, flipping an all-packed one.
        #[test]
        fn check_all_uniform(existing in entries()) {
            let mut store = store_with(&existing);
            let was_all_packed = store.items().iter().all(|i| i.packed);
            let before = store.snapshot();

            store.check_all();
            if existing.is_empty() {
                prop_assert_eq!(store.snapshot(), before);
            } else {
                prop_assert!(store.items().iter().all(|i| i.packed == !was_all_packed));
            }
        }

        /// Property: the packed percentage stays within 0..=100.
        #[test]
        fn percentage_in_range(existing in entries()) {
            let store = store_with(&existing);
            let summary = Summary::from_items(store.items());

            prop_assert!(summary.percentage <= 100);
            if summary.total == 0 {
                prop_assert_eq!(summary.percentage, 0);
            }
        }
    }
}
