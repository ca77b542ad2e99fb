//! Budget display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::engine::{budget_status, BudgetState};
use crate::models::Budget;

use super::format::{format_percentage, month_name, progress_bar};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Remaining amount, or how far over the limit the budget is
pub fn format_remaining(budget: &Budget, symbol: &str) -> String {
    let status = budget_status(budget);
    if status.remaining.is_negative() {
        format!("{} over", status.remaining.format_with_symbol(symbol))
    } else {
        format!("{} left", status.remaining.format_with_symbol(symbol))
    }
}

/// Budgets for one month as a table with status per row
pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let rows = budgets.iter().map(|b| {
        let status = budget_status(b);
        BudgetRow {
            id: b.id.to_string(),
            category: b.category.clone(),
            spent: b.spent.format_with_symbol(symbol),
            limit: b.limit.format_with_symbol(symbol),
            remaining: format_remaining(b, symbol),
            progress: format!(
                "{} {}",
                progress_bar(status.display_percentage, 10),
                format_percentage(status.percentage)
            ),
            status: status.state.to_string(),
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a single budget for display
pub fn format_budget_details(budget: &Budget, symbol: &str) -> String {
    let status = budget_status(budget);
    let mut output = String::new();

    output.push_str(&format!("Budget:    {}\n", budget.id));
    output.push_str(&format!("Category:  {}\n", budget.category));
    output.push_str(&format!("Month:     {}\n", month_name(budget.month)));
    output.push_str(&format!(
        "Spent:     {} of {} ({})\n",
        budget.spent.format_with_symbol(symbol),
        budget.limit.format_with_symbol(symbol),
        format_percentage(status.percentage)
    ));
    output.push_str(&format!("Remaining: {}\n", format_remaining(budget, symbol)));

    match status.state {
        BudgetState::Over => output.push_str("Status:    over budget\n"),
        BudgetState::Warning => output.push_str("Status:    nearing limit\n"),
        BudgetState::Ok => output.push_str("Status:    on track\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, Money, MonthKey};

    fn budget(limit: i64, spent: i64) -> Budget {
        Budget {
            id: BudgetId::new(2),
            category: "Food".into(),
            limit: Money::from_dollars(limit),
            month: MonthKey::new(2024, 5).unwrap(),
            spent: Money::from_dollars(spent),
        }
    }

    #[test]
    fn test_remaining_wording() {
        assert_eq!(format_remaining(&budget(100, 40), "$"), "$60.00 left");
        assert_eq!(format_remaining(&budget(100, 150), "$"), "$50.00 over");
    }

    #[test]
    fn test_list_shows_status() {
        let output = format_budget_list(&[budget(100, 150), budget(100, 85)], "$");
        assert!(output.contains("over"));
        assert!(output.contains("warning"));
        assert!(output.contains("150%"));
        assert_eq!(format_budget_list(&[], "$"), "No budgets found.\n");
    }

    #[test]
    fn test_details() {
        let output = format_budget_details(&budget(100, 20), "$");
        assert!(output.contains("Month:     May 2024"));
        assert!(output.contains("$20.00 of $100.00 (20%)"));
        assert!(output.contains("on track"));
    }
}
