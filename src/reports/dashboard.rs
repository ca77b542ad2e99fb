//! Dashboard Report
//!
//! Monthly income, expenses and balance, budget usage, the newest
//! transactions, the expense breakdown by category and the spending trend
//! against budget over the trailing months.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::Settings;
use crate::display::format::{
    format_date_short, format_percentage, month_name, month_short_label, truncate,
};
use crate::display::transaction::format_signed_amount;
use crate::engine::{self, TrendPoint};
use crate::error::FintrackResult;
use crate::models::{Money, MonthKey, Transaction, TransactionType};
use crate::services::warn_undated;
use crate::storage::Storage;

/// Budget usage above this share is flagged on the dashboard
const HIGH_USAGE_PERCENT: f64 = 80.0;

/// Everything the dashboard shows for one month
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
    /// income - expenses; negative when spending exceeded income
    pub balance: Money,
    /// Sum of budget limits in the month
    pub total_budget: Money,
    /// expenses / total_budget * 100, `None` when nothing is budgeted
    pub budget_used: Option<f64>,
    /// Newest transactions across all months
    pub recent: Vec<Transaction>,
    /// Expense totals per category in the month
    pub expense_breakdown: BTreeMap<String, Money>,
    /// Oldest month first, ending at `month`
    pub trend: Vec<TrendPoint>,
}

impl DashboardReport {
    /// Generate the dashboard for `month`
    pub fn generate(
        storage: &Storage,
        month: MonthKey,
        settings: &Settings,
    ) -> FintrackResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let budgets = storage.budgets.get_all()?;
        warn_undated(&transactions);

        let in_month = engine::month_filter(&transactions, month);
        let income = engine::sum_by_type(in_month.iter().copied(), TransactionType::Income);
        let expenses = engine::sum_by_type(in_month.iter().copied(), TransactionType::Expense);

        let total_budget = engine::total_budget_limit(&budgets, month);
        let budget_used = if total_budget.is_zero() {
            None
        } else {
            Some(engine::percent_of(expenses, total_budget))
        };

        let expense_breakdown = engine::group_by_category(
            in_month
                .iter()
                .copied()
                .filter(|t| t.kind == TransactionType::Expense),
        );

        let months = month.trailing(settings.trend_months);
        let trend = engine::trend_series(&transactions, &budgets, &months);

        let recent = engine::recent(&transactions, settings.recent_transactions)
            .into_iter()
            .cloned()
            .collect();

        debug!(month = %month, transactions = in_month.len(), "Generated dashboard");

        Ok(Self {
            month,
            income,
            expenses,
            balance: income - expenses,
            total_budget,
            budget_used,
            recent,
            expense_breakdown,
            trend,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str(&format!("Financial Dashboard - {}\n", month_name(self.month)));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        let balance_sign = if self.balance.is_negative() { "-" } else { "" };
        output.push_str(&format!(
            "{:<18} {}{}\n",
            "Monthly Balance:",
            balance_sign,
            money(self.balance)
        ));
        output.push_str(&format!("{:<18} {}\n", "Monthly Income:", money(self.income)));
        output.push_str(&format!("{:<18} {}\n", "Monthly Expenses:", money(self.expenses)));

        let used = match self.budget_used {
            None => "No Budget".to_string(),
            Some(p) if p > HIGH_USAGE_PERCENT => {
                format!("{} of {} (!)", format_percentage(p), money(self.total_budget))
            }
            Some(p) => format!("{} of {}", format_percentage(p), money(self.total_budget)),
        };
        output.push_str(&format!("{:<18} {}\n", "Budget Used:", used));

        output.push_str("\nExpenses by Category\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.expense_breakdown.is_empty() {
            output.push_str("  No expenses this month\n");
        }
        for (category, amount) in &self.expense_breakdown {
            output.push_str(&format!(
                "  {:<24} {:>14} {:>6}\n",
                category,
                money(*amount),
                format_percentage(engine::percent_of(*amount, self.expenses))
            ));
        }

        output.push_str("\nSpending Trend\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!("  {:<8} {:>14} {:>14}\n", "Month", "Spent", "Budget"));
        for point in &self.trend {
            output.push_str(&format!(
                "  {:<8} {:>14} {:>14}\n",
                month_short_label(point.month),
                money(point.total_expense),
                money(point.total_budget)
            ));
        }

        output.push_str("\nRecent Transactions\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.recent.is_empty() {
            output.push_str("  No transactions yet\n");
        }
        for txn in &self.recent {
            let date = txn
                .date
                .map(format_date_short)
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "  {:<7} {:<26} {:>16}\n",
                date,
                truncate(&txn.description, 26),
                format_signed_amount(txn.amount, txn.kind, symbol)
            ));
        }

        output
    }
}
