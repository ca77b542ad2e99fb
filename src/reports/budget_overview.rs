//! Budget Overview Report
//!
//! Every budget in a month with its derived spending and status, plus the
//! month totals.

use crate::display::format::{format_percentage, month_name};
use crate::engine::{self, budget_status, BudgetState, BudgetStatus};
use crate::error::FintrackResult;
use crate::models::{Budget, Money, MonthKey};
use crate::services::BudgetService;
use crate::storage::Storage;

/// A budget paired with its status
#[derive(Debug, Clone)]
pub struct BudgetReportRow {
    pub budget: Budget,
    pub status: BudgetStatus,
}

/// Budget Overview Report
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    pub month: MonthKey,
    pub rows: Vec<BudgetReportRow>,
    pub total_limit: Money,
    pub total_spent: Money,
}

impl BudgetOverviewReport {
    /// Generate the overview for one month
    pub fn generate(storage: &Storage, month: MonthKey) -> FintrackResult<Self> {
        let budgets = BudgetService::new(storage).list(Some(month))?;

        let total_limit = budgets.iter().map(|b| b.limit).sum();
        let total_spent = budgets.iter().map(|b| b.spent).sum();
        let rows = budgets
            .into_iter()
            .map(|budget| BudgetReportRow {
                status: budget_status(&budget),
                budget,
            })
            .collect();

        Ok(Self {
            month,
            rows,
            total_limit,
            total_spent,
        })
    }

    /// Limit minus spending across the month; negative when overspent
    pub fn total_remaining(&self) -> Money {
        self.total_limit - self.total_spent
    }

    pub fn overall_percentage(&self) -> f64 {
        engine::percent_of(self.total_spent, self.total_limit)
    }

    /// Budgets whose spending exceeds their limit
    pub fn over_budget(&self) -> Vec<&BudgetReportRow> {
        self.rows
            .iter()
            .filter(|r| r.status.state == BudgetState::Over)
            .collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str(&format!("Budget Overview - {}\n", month_name(self.month)));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets set for this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<22} {:>12} {:>12} {:>12} {:>8}\n",
            "Category", "Limit", "Spent", "Remaining", "Used"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in &self.rows {
            let marker = match row.status.state {
                BudgetState::Over => " *",
                BudgetState::Warning => " !",
                BudgetState::Ok => "",
            };
            let remaining_sign = if row.status.remaining.is_negative() { "-" } else { "" };
            output.push_str(&format!(
                "{:<22} {:>12} {:>12} {:>12} {:>8}{}\n",
                row.budget.category,
                money(row.budget.limit),
                money(row.budget.spent),
                format!("{}{}", remaining_sign, money(row.status.remaining)),
                format_percentage(row.status.percentage),
                marker
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        let remaining = self.total_remaining();
        output.push_str(&format!(
            "{:<22} {:>12} {:>12} {:>12} {:>8}\n",
            "TOTAL",
            money(self.total_limit),
            money(self.total_spent),
            format!(
                "{}{}",
                if remaining.is_negative() { "-" } else { "" },
                money(remaining)
            ),
            format_percentage(self.overall_percentage())
        ));

        output.push_str("\n* = Over budget   ! = 80% or more used\n");
        output
    }
}
