//! Budget model
//!
//! A budget caps spending in one expense category for one month. The
//! `spent` figure is derived from transactions and never entered by the user.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::month::MonthKey;
use crate::error::FieldErrors;

/// A monthly spending cap for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    /// Name of an expense category
    pub category: String,

    /// Spending cap for the month
    pub limit: Money,

    pub month: MonthKey,

    /// Derived spend for the month; recomputed from transactions
    #[serde(default)]
    pub spent: Money,
}

impl Budget {
    /// Build a stored budget from validated form input
    pub fn from_draft(id: BudgetId, draft: BudgetDraft) -> Self {
        Self {
            id,
            category: draft.category.trim().to_string(),
            limit: draft.limit,
            month: draft.month,
            spent: Money::zero(),
        }
    }

    /// Apply edited form input; the derived spend is left untouched
    pub fn apply_draft(&mut self, draft: BudgetDraft) {
        self.category = draft.category.trim().to_string();
        self.limit = draft.limit;
        self.month = draft.month;
    }

    pub fn to_draft(&self) -> BudgetDraft {
        BudgetDraft {
            category: self.category.clone(),
            limit: self.limit,
            month: self.month,
        }
    }

    /// Check if spending exceeds the limit
    pub fn is_over(&self) -> bool {
        self.spent > self.limit
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} of {}",
            self.month, self.category, self.spent, self.limit
        )
    }
}

/// User-entered budget fields before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetDraft {
    pub category: String,
    pub limit: Money,
    pub month: MonthKey,
}

impl BudgetDraft {
    /// Check the fields that do not need other records to validate
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.category.trim().is_empty() {
            errors.add("category", "Category is required");
        }

        if !self.limit.is_positive() {
            errors.add("limit", "Budget limit must be greater than 0");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may() -> MonthKey {
        MonthKey::new(2024, 5).unwrap()
    }

    #[test]
    fn test_from_draft_starts_unspent() {
        let draft = BudgetDraft {
            category: " Food ".into(),
            limit: Money::from_dollars(300),
            month: may(),
        };
        let budget = Budget::from_draft(BudgetId::new(1), draft);

        assert_eq!(budget.category, "Food");
        assert_eq!(budget.spent, Money::zero());
        assert!(!budget.is_over());
    }

    #[test]
    fn test_validation() {
        let draft = BudgetDraft {
            category: String::new(),
            limit: Money::zero(),
            month: may(),
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("category"), Some("Category is required"));
        assert_eq!(errors.get("limit"), Some("Budget limit must be greater than 0"));
    }

    #[test]
    fn test_apply_draft_keeps_spent() {
        let mut budget = Budget::from_draft(
            BudgetId::new(2),
            BudgetDraft {
                category: "Food".into(),
                limit: Money::from_dollars(100),
                month: may(),
            },
        );
        budget.spent = Money::from_dollars(150);
        assert!(budget.is_over());

        let mut edit = budget.to_draft();
        edit.limit = Money::from_dollars(200);
        budget.apply_draft(edit);

        assert_eq!(budget.limit, Money::from_dollars(200));
        assert_eq!(budget.spent, Money::from_dollars(150));
    }

    #[test]
    fn test_serialization_defaults_spent() {
        let json = r#"{"id": 3, "category": "Rent", "limit": 120000, "month": "2024-05"}"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.spent, Money::zero());
        assert_eq!(budget.month, may());
    }
}
