//! Month-scoped aggregation over transaction and budget snapshots

use std::collections::BTreeMap;

use crate::models::{Budget, Money, MonthKey, Transaction, TransactionType};

/// Transactions dated within `month`
///
/// Transactions without a usable date are left out; see [`undated`].
pub fn month_filter(transactions: &[Transaction], month: MonthKey) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.is_some_and(|d| month.contains(d)))
        .collect()
}

/// Transactions that aggregation skips because their date is missing or invalid
pub fn undated(transactions: &[Transaction]) -> Vec<&Transaction> {
    transactions.iter().filter(|t| t.date.is_none()).collect()
}

/// Sum of amounts for transactions of one type
pub fn sum_by_type<'a, I>(transactions: I, kind: TransactionType) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Summed amount per category name
pub fn group_by_category<'a, I>(transactions: I) -> BTreeMap<String, Money>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for txn in transactions {
        *totals.entry(txn.category.clone()).or_default() += txn.amount;
    }
    totals
}

/// Sum of budget limits for `month`
pub fn total_budget_limit(budgets: &[Budget], month: MonthKey) -> Money {
    budgets
        .iter()
        .filter(|b| b.month == month)
        .map(|b| b.limit)
        .sum()
}

/// Expense total for the budget's category and month
///
/// Category names compare case-insensitively, the same way the duplicate
/// budget check does.
pub fn budget_spent(transactions: &[Transaction], budget: &Budget) -> Money {
    let category = budget.category.trim();
    month_filter(transactions, budget.month)
        .into_iter()
        .filter(|t| t.is_expense() && t.category.trim().eq_ignore_ascii_case(category))
        .map(|t| t.amount)
        .sum()
}

/// Copies of `budgets` with `spent` recomputed from `transactions`
pub fn with_spending(budgets: &[Budget], transactions: &[Transaction]) -> Vec<Budget> {
    budgets
        .iter()
        .map(|budget| Budget {
            spent: budget_spent(transactions, budget),
            ..budget.clone()
        })
        .collect()
}

/// One point of the spending trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub month: MonthKey,
    pub total_expense: Money,
    pub total_budget: Money,
}

/// Expense and budget totals for each month in `months`, in the given order
pub fn trend_series(
    transactions: &[Transaction],
    budgets: &[Budget],
    months: &[MonthKey],
) -> Vec<TrendPoint> {
    months
        .iter()
        .map(|&month| TrendPoint {
            month,
            total_expense: sum_by_type(
                month_filter(transactions, month),
                TransactionType::Expense,
            ),
            total_budget: total_budget_limit(budgets, month),
        })
        .collect()
}

/// `part` as a percentage of `whole`; 0 when `whole` is zero
pub fn percent_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}

/// The `count` newest transactions, undated ones last
pub fn recent(transactions: &[Transaction], count: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sort_newest_first(&mut sorted);
    sorted.truncate(count);
    sorted
}

/// Sort by date descending, then id descending; undated transactions last
pub fn sort_newest_first(transactions: &mut [&Transaction]) {
    transactions.sort_by(|a, b| match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x).then(b.id.cmp(&a.id)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => b.id.cmp(&a.id),
    });
}
