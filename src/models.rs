//! Data models for the expense summary.
//!
//! This module contains the decoded expense record, the reasons a raw
//! record can be skipped, and the per-category totals built from them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Label used when a record carries no `category` field.
pub const DEFAULT_CATEGORY: &str = "Uncategorised";

/// A single expense record after decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    /// Resolved category label (the default label when absent).
    pub category: String,
    /// Amount converted to a float (`0.0` when absent).
    pub amount: f64,
}

/// Why a raw record was left out of the totals.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    /// The record is not a JSON object.
    #[error("record is not an object (found {0})")]
    NotAnObject(&'static str),
    /// The `category` field holds something other than text.
    #[error("category is not text (found {0})")]
    InvalidCategory(&'static str),
    /// The `amount` field cannot be converted to a number.
    #[error("amount {0} is not a number")]
    InvalidAmount(String),
}

/// Order in which categories are reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryOrder {
    /// Order of first appearance in the input (default)
    #[default]
    FirstSeen,
    /// Lexicographic by category label
    Alphabetical,
}

impl fmt::Display for CategoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryOrder::FirstSeen => write!(f, "first-seen"),
            CategoryOrder::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

/// Accumulated totals per category.
///
/// Entries keep the order in which each category was first added.
#[derive(Debug, Clone, Default)]
pub struct CategoryTotals {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the total for `category`, creating it at zero if unseen.
    pub fn add(&mut self, category: &str, amount: f64) {
        match self.index.get(category) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push((category.to_string(), 0.0 + amount));
            }
        }
    }

    /// Total for a category, if it has been seen.
    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<f64> {
        self.index.get(category).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(category, total)` pairs in the requested order.
    pub fn ordered(&self, order: CategoryOrder) -> Vec<(&str, f64)> {
        let mut rows: Vec<(&str, f64)> = self
            .entries
            .iter()
            .map(|(category, total)| (category.as_str(), *total))
            .collect();

        if order == CategoryOrder::Alphabetical {
            rows.sort_by(|a, b| a.0.cmp(b.0));
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut totals = CategoryTotals::new();
        totals.add("Food", 12.5);
        totals.add("Food", 7.5);
        totals.add("Rent", 500.0);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("Food"), Some(20.0));
        assert_eq!(totals.get("Rent"), Some(500.0));
        assert_eq!(totals.get("Travel"), None);
    }

    #[test]
    fn test_zero_amount_creates_entry() {
        let mut totals = CategoryTotals::new();
        totals.add("Gifts", 0.0);

        assert!(!totals.is_empty());
        assert_eq!(totals.get("Gifts"), Some(0.0));
    }

    #[test]
    fn test_new_entry_starts_at_zero() {
        let mut totals = CategoryTotals::new();
        totals.add("Refund", -0.0);

        let total = totals.get("Refund").unwrap();
        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
    }

    #[test]
    fn test_ordering() {
        let mut totals = CategoryTotals::new();
        totals.add("Transport", 1.0);
        totals.add("Food", 2.0);
        totals.add("Transport", 3.0);
        totals.add("Bills", 4.0);

        let first_seen: Vec<_> = totals
            .ordered(CategoryOrder::FirstSeen)
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(first_seen, vec!["Transport", "Food", "Bills"]);

        let alphabetical: Vec<_> = totals
            .ordered(CategoryOrder::Alphabetical)
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(alphabetical, vec!["Bills", "Food", "Transport"]);
    }

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::InvalidAmount("\"abc\"".to_string());
        assert_eq!(reason.to_string(), "amount \"abc\" is not a number");
    }
}
