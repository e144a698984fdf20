//! Packing Summary
//!
//! Statistics derived from the current items.

use crate::item::Item;

/// Status prompt shown under the statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingStatus {
    /// 0% packed (including an empty list)
    NotStarted,
    InProgress,
    /// 100% packed
    Done,
}

impl PackingStatus {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0 => PackingStatus::NotStarted,
            p if p >= 100 => PackingStatus::Done,
            _ => PackingStatus::InProgress,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PackingStatus::NotStarted => "Let's start packing!",
            PackingStatus::InProgress => "Keep going!",
            PackingStatus::Done => "Well done! You are ready to go!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub packed: usize,
    /// Rounded half up, 0 for an empty list
    pub percentage: u8,
}

impl Summary {
    pub fn from_items(items: &[Item]) -> Self {
        let total = items.len();
        let packed = items.iter().filter(|item| item.packed).count();
        Self {
            total,
            packed,
            percentage: percentage(packed, total),
        }
    }

    pub fn status(&self) -> PackingStatus {
        PackingStatus::from_percentage(self.percentage)
    }

    /// e.g. "You have 2 items in the list. You already packed 1 (50%)."
    pub fn stats_line(&self) -> String {
        format!(
            "You have {} items in the list. You already packed {} ({}%).",
            self.total, self.packed, self.percentage
        )
    }
}

fn percentage(packed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // round(packed / total * 100) in integers
    let rounded = (packed * 200 + total) / (total * 2);
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    fn items(packed: &[bool]) -> Vec<Item> {
        packed
            .iter()
            .enumerate()
            .map(|(i, p)| Item {
                id: ItemId(i as u64 + 1),
                description: format!("Item {}", i),
                quantity: 1,
                packed: *p,
            })
            .collect()
    }

    #[test]
    fn test_empty_list() {
        let summary = Summary::from_items(&[]);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.status(), PackingStatus::NotStarted);
        assert_eq!(summary.status().message(), "Let's start packing!");
    }

    #[test]
    fn test_half_packed() {
        let summary = Summary::from_items(&items(&[true, false]));
        assert_eq!(summary.percentage, 50);
        assert_eq!(summary.status(), PackingStatus::InProgress);
        assert_eq!(
            summary.stats_line(),
            "You have 2 items in the list. You already packed 1 (50%)."
        );
    }

    #[test]
    fn test_all_packed() {
        let summary = Summary::from_items(&items(&[true, true, true]));
        assert_eq!(summary.percentage, 100);
        assert_eq!(summary.status(), PackingStatus::Done);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 5), 0);
    }

    #[test]
    fn test_status_follows_rounded_percentage() {
        // 199 of 200 rounds to 100
        assert_eq!(percentage(199, 200), 100);
        assert_eq!(PackingStatus::from_percentage(100), PackingStatus::Done);
        // 1 of 201 rounds to 0
        assert_eq!(PackingStatus::from_percentage(percentage(1, 201)), PackingStatus::NotStarted);
    }
}
