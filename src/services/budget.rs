//! Budget service
//!
//! Monthly per-category spending caps. Spending is never stored by hand:
//! every read recomputes it from the current transaction snapshot.

use tracing::info;

use crate::engine;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Budget, BudgetDraft, BudgetId, MonthKey, TransactionType};
use crate::storage::Storage;

use super::{warn_undated, CategoryService};

/// Message recorded against the category field for a second budget in a month
pub const DUPLICATE_BUDGET_MESSAGE: &str =
    "Budget already exists for this category in the selected month";

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All budgets with spending filled in, optionally for one month, sorted
    /// by month then category
    pub fn list(&self, month: Option<MonthKey>) -> FintrackResult<Vec<Budget>> {
        let budgets = self.storage.budgets.get_all()?;
        let transactions = self.storage.transactions.get_all()?;
        warn_undated(&transactions);

        let mut budgets: Vec<Budget> = engine::with_spending(&budgets, &transactions)
            .into_iter()
            .filter(|b| month.map_or(true, |m| b.month == m))
            .collect();
        budgets.sort_by(|a, b| {
            (a.month, a.category.to_lowercase()).cmp(&(b.month, b.category.to_lowercase()))
        });
        Ok(budgets)
    }

    /// One budget with its spending filled in
    pub fn get(&self, id: BudgetId) -> FintrackResult<Budget> {
        let mut budget = self.storage.budgets.get_by_id(id)?;
        let transactions = self.storage.transactions.get_all()?;
        budget.spent = engine::budget_spent(&transactions, &budget);
        Ok(budget)
    }

    /// Validate a draft against the expense categories and the other budgets
    fn check(&self, mut draft: BudgetDraft, editing: Option<BudgetId>) -> FintrackResult<BudgetDraft> {
        let mut errors = draft.validate().err().unwrap_or_default();

        let categories = CategoryService::new(self.storage);
        if let Some(name) = categories.resolve(&draft.category, TransactionType::Expense, &mut errors)? {
            draft.category = name;
        }

        let existing = self.storage.budgets.get_all()?;
        if !draft.category.trim().is_empty()
            && engine::duplicate_budget_check(&existing, &draft.category, draft.month, editing)
        {
            errors.set("category", DUPLICATE_BUDGET_MESSAGE);
        }

        errors.into_result().map_err(FintrackError::Validation)?;
        Ok(draft)
    }

    pub fn create(&self, draft: BudgetDraft) -> FintrackResult<Budget> {
        let draft = self.check(draft, None)?;
        let created = self
            .storage
            .budgets
            .create(Budget::from_draft(BudgetId::new(0), draft))?;

        info!(
            id = %created.id,
            category = %created.category,
            month = %created.month,
            limit = %created.limit,
            "Created budget"
        );
        self.get(created.id)
    }

    pub fn update(&self, id: BudgetId, draft: BudgetDraft) -> FintrackResult<Budget> {
        let mut budget = self.storage.budgets.get_by_id(id)?;
        let draft = self.check(draft, Some(id))?;
        budget.apply_draft(draft);

        self.storage.budgets.update(id, budget)?;
        info!(id = %id, "Updated budget");
        self.get(id)
    }

    pub fn delete(&self, id: BudgetId) -> FintrackResult<Budget> {
        let budget = self.storage.budgets.get_by_id(id)?;
        self.storage.budgets.delete(id)?;
        info!(id = %id, category = %budget.category, month = %budget.month, "Deleted budget");
        Ok(budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionDraft};
    use crate::services::TransactionService;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn may() -> MonthKey {
        MonthKey::new(2024, 5).unwrap()
    }

    fn draft(category: &str, dollars: i64) -> BudgetDraft {
        BudgetDraft {
            category: category.into(),
            limit: Money::from_dollars(dollars),
            month: may(),
        }
    }

    fn spend(storage: &Storage, category: &str, dollars: i64, date: (i32, u32, u32)) {
        TransactionService::new(storage)
            .create(TransactionDraft {
                amount: Money::from_dollars(dollars),
                kind: TransactionType::Expense,
                category: category.into(),
                description: "test".into(),
                date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            })
            .unwrap();
    }

    #[test]
    fn test_spending_is_derived_from_transactions() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = BudgetService::new(&storage);

        let food = service.create(draft("Food", 100)).unwrap();
        assert_eq!(food.spent, Money::zero());

        spend(&storage, "Food", 30, (2024, 5, 2));
        spend(&storage, "Food", 45, (2024, 5, 20));
        spend(&storage, "Food", 99, (2024, 4, 30));
        spend(&storage, "Housing", 900, (2024, 5, 1));

        assert_eq!(service.get(food.id).unwrap().spent, Money::from_dollars(75));
        let listed = service.list(Some(may())).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].spent, Money::from_dollars(75));
    }

    #[test]
    fn test_duplicate_budget_is_rejected() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = BudgetService::new(&storage);
        service.create(draft("Food", 100)).unwrap();

        let err = service.create(draft("food", 200)).unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().get("category"),
            Some(DUPLICATE_BUDGET_MESSAGE)
        );

        // A different month is fine
        let mut june = draft("Food", 100);
        june.month = may().next();
        assert!(service.create(june).is_ok());
    }

    #[test]
    fn test_edit_does_not_collide_with_itself() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = BudgetService::new(&storage);
        let food = service.create(draft("Food", 100)).unwrap();
        let housing = service.create(draft("Housing", 1000)).unwrap();

        let updated = service.update(food.id, draft("Food", 150)).unwrap();
        assert_eq!(updated.limit, Money::from_dollars(150));

        let err = service.update(housing.id, draft("Food", 100)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_income_category_and_bad_limit_rejected() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = BudgetService::new(&storage);

        let err = service.create(draft("Salary", 0)).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.get("limit"), Some("Budget limit must be greater than 0"));
        assert_eq!(errors.get("category"), Some("'Salary' is not an expense category"));
    }

    #[test]
    fn test_missing_budget_is_not_found() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = BudgetService::new(&storage);

        assert!(service.get(BudgetId::new(3)).unwrap_err().is_not_found());
        assert!(service
            .update(BudgetId::new(3), draft("Food", 10))
            .unwrap_err()
            .is_not_found());
        assert!(service.delete(BudgetId::new(3)).unwrap_err().is_not_found());
    }
}
