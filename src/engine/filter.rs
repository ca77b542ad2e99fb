//! Transaction list filtering (search box, category and type selectors)

use crate::models::{Transaction, TransactionType};

/// Criteria for narrowing a transaction list; empty criteria match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description or category
    pub search: Option<String>,
    /// Exact category name
    pub category: Option<String>,
    pub kind: Option<TransactionType>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.category.is_none()
            && self.kind.is_none()
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(search) = self.search.as_deref() {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty()
                && !txn.description.to_lowercase().contains(&needle)
                && !txn.category.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(category) = self.category.as_deref() {
            if txn.category != category {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }

        true
    }

    /// Matching transactions in their original order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}
