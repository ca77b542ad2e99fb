//! Cross-record checks run before a write reaches a store

use crate::models::{Budget, BudgetId, MonthKey};

/// True if another budget already covers `category` in `month`
///
/// `exclude_id` names the budget being edited so it does not collide with
/// itself. Category names compare case-insensitively.
pub fn duplicate_budget_check(
    budgets: &[Budget],
    category: &str,
    month: MonthKey,
    exclude_id: Option<BudgetId>,
) -> bool {
    let category = category.trim();
    budgets.iter().any(|b| {
        b.month == month
            && b.category.eq_ignore_ascii_case(category)
            && Some(b.id) != exclude_id
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::budget;

    fn may() -> MonthKey {
        MonthKey::new(2024, 5).unwrap()
    }

    #[test]
    fn test_same_category_and_month_is_duplicate() {
        let budgets = vec![budget(1, "Food", 100_00, "2024-05")];
        assert!(duplicate_budget_check(&budgets, "Food", may(), None));
        assert!(duplicate_budget_check(&budgets, "food ", may(), None));
    }

    #[test]
    fn test_excluding_the_edited_budget() {
        let budgets = vec![budget(1, "Food", 100_00, "2024-05")];
        assert!(!duplicate_budget_check(
            &budgets,
            "Food",
            may(),
            Some(BudgetId::new(1))
        ));
        assert!(duplicate_budget_check(
            &budgets,
            "Food",
            may(),
            Some(BudgetId::new(2))
        ));
    }

    #[test]
    fn test_other_month_or_category_is_not_duplicate() {
        let budgets = vec![
            budget(1, "Food", 100_00, "2024-04"),
            budget(2, "Housing", 900_00, "2024-05"),
        ];
        assert!(!duplicate_budget_check(&budgets, "Food", may(), None));
        assert!(!duplicate_budget_check(&[], "Food", may(), None));
    }
}
