//! Transaction service
//!
//! CRUD for income and expense records with category checks, list
//! filtering and the running totals shown above the transaction list.

use tracing::info;

use crate::engine::{self, TransactionFilter};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, MonthKey, Transaction, TransactionDraft, TransactionId, TransactionType};
use crate::storage::Storage;

use super::{warn_undated, CategoryService};

/// Income and expense sums over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionTotals {
    pub income: Money,
    pub expense: Money,
}

impl TransactionTotals {
    pub fn of<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction> + Clone,
    {
        Self {
            income: engine::sum_by_type(transactions.clone(), TransactionType::Income),
            expense: engine::sum_by_type(transactions, TransactionType::Expense),
        }
    }

    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Every stored transaction, in store order
    pub fn all(&self) -> FintrackResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    pub fn get(&self, id: TransactionId) -> FintrackResult<Transaction> {
        self.storage.transactions.get_by_id(id)
    }

    /// Transactions matching `filter`, newest first
    pub fn list(&self, filter: &TransactionFilter) -> FintrackResult<Vec<Transaction>> {
        let all = self.all()?;
        let mut matched = filter.apply(&all);
        engine::sort_newest_first(&mut matched);
        Ok(matched.into_iter().cloned().collect())
    }

    /// Transactions dated in `month`, newest first
    ///
    /// Undated transactions are logged and left out.
    pub fn list_month(&self, month: MonthKey) -> FintrackResult<Vec<Transaction>> {
        let all = self.all()?;
        warn_undated(&all);
        let mut in_month = engine::month_filter(&all, month);
        engine::sort_newest_first(&mut in_month);
        Ok(in_month.into_iter().cloned().collect())
    }

    /// Validate a draft, including that its category exists for its type
    ///
    /// Returns the draft with the category spelled as stored.
    fn check(&self, mut draft: TransactionDraft) -> FintrackResult<TransactionDraft> {
        let mut errors = draft.validate().err().unwrap_or_default();

        let categories = CategoryService::new(self.storage);
        if let Some(name) = categories.resolve(&draft.category, draft.kind, &mut errors)? {
            draft.category = name;
        }

        errors.into_result().map_err(FintrackError::Validation)?;
        Ok(draft)
    }

    pub fn create(&self, draft: TransactionDraft) -> FintrackResult<Transaction> {
        let draft = self.check(draft)?;
        let created = self
            .storage
            .transactions
            .create(Transaction::from_draft(TransactionId::new(0), draft))?;

        info!(
            id = %created.id,
            kind = %created.kind,
            amount = %created.amount,
            category = %created.category,
            "Created transaction"
        );
        Ok(created)
    }

    pub fn update(&self, id: TransactionId, draft: TransactionDraft) -> FintrackResult<Transaction> {
        let mut transaction = self.get(id)?;
        let draft = self.check(draft)?;
        transaction.apply_draft(draft);

        let updated = self.storage.transactions.update(id, transaction)?;
        info!(id = %id, amount = %updated.amount, "Updated transaction");
        Ok(updated)
    }

    pub fn delete(&self, id: TransactionId) -> FintrackResult<Transaction> {
        let transaction = self.get(id)?;
        self.storage.transactions.delete(id)?;
        info!(id = %id, description = %transaction.description, "Deleted transaction");
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn draft(kind: TransactionType, category: &str, dollars: i64, day: u32) -> TransactionDraft {
        TransactionDraft {
            amount: Money::from_dollars(dollars),
            kind,
            category: category.into(),
            description: format!("{} on the {}", category, day),
            date: date(2024, 5, day),
        }
    }

    #[test]
    fn test_create_assigns_ids_and_canonical_category() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = TransactionService::new(&storage);

        let first = service
            .create(draft(TransactionType::Expense, "food", 40, 3))
            .unwrap();
        let second = service
            .create(draft(TransactionType::Income, "Salary", 2500, 1))
            .unwrap();

        assert_eq!(first.id, TransactionId::new(1));
        assert_eq!(second.id, TransactionId::new(2));
        assert_eq!(first.category, "Food");
    }

    #[test]
    fn test_create_collects_field_errors() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = TransactionService::new(&storage);

        let mut bad = draft(TransactionType::Income, "Food", 0, 3);
        bad.description = " ".into();
        bad.date = None;

        let err = service.create(bad).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.get("amount"), Some("Amount must be greater than 0"));
        assert_eq!(errors.get("description"), Some("Description is required"));
        assert_eq!(errors.get("date"), Some("Date is required"));
        assert!(errors.contains("category"));
        assert!(service.all().unwrap().is_empty());
    }

    #[test]
    fn test_update_and_delete_missing_are_not_found() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = TransactionService::new(&storage);

        let err = service
            .update(TransactionId::new(9), draft(TransactionType::Expense, "Food", 5, 1))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(service.delete(TransactionId::new(9)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_keeps_id_and_created_at() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = TransactionService::new(&storage);
        let created = service
            .create(draft(TransactionType::Expense, "Food", 40, 3))
            .unwrap();

        let updated = service
            .update(created.id, draft(TransactionType::Expense, "Housing", 900, 4))
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.category, "Housing");
        assert_eq!(service.get(created.id).unwrap().amount, Money::from_dollars(900));
    }

    #[test]
    fn test_list_is_newest_first_and_filtered() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = TransactionService::new(&storage);
        service.create(draft(TransactionType::Expense, "Food", 40, 3)).unwrap();
        service.create(draft(TransactionType::Income, "Salary", 2500, 1)).unwrap();
        service.create(draft(TransactionType::Expense, "Utilities", 60, 9)).unwrap();

        let all = service.list(&TransactionFilter::default()).unwrap();
        let days: Vec<NaiveDate> = all.iter().filter_map(|t| t.date).collect();
        let expected: Vec<NaiveDate> = [9, 3, 1].iter().filter_map(|&d| date(2024, 5, d)).collect();
        assert_eq!(days, expected);

        let expenses = service
            .list(&TransactionFilter {
                kind: Some(TransactionType::Expense),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(expenses.len(), 2);

        let totals = TransactionTotals::of(&all);
        assert_eq!(totals.income, Money::from_dollars(2500));
        assert_eq!(totals.expense, Money::from_dollars(100));
        assert_eq!(totals.net(), Money::from_dollars(2400));
    }

    #[test]
    fn test_list_month() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = TransactionService::new(&storage);
        service.create(draft(TransactionType::Expense, "Food", 40, 3)).unwrap();
        let mut june = draft(TransactionType::Expense, "Food", 10, 3);
        june.date = date(2024, 6, 1);
        service.create(june).unwrap();

        let may = service.list_month(MonthKey::new(2024, 5).unwrap()).unwrap();
        assert_eq!(may.len(), 1);
        assert_eq!(may[0].amount, Money::from_dollars(40));
    }
}
