//! Aggregation engine
//!
//! Pure functions over read-only snapshots of transactions, budgets and
//! goals. Nothing here touches storage, the clock or global state: the
//! month and `today` are always passed in, so identical inputs always give
//! identical outputs.

pub mod checks;
pub mod filter;
pub mod monthly;
pub mod status;

#[cfg(test)]
pub(crate) mod test_support;

pub use checks::duplicate_budget_check;
pub use filter::TransactionFilter;
pub use monthly::{
    budget_spent, group_by_category, month_filter, percent_of, recent, sort_newest_first,
    sum_by_type, total_budget_limit, trend_series, undated, with_spending, TrendPoint,
};
pub use status::{budget_status, goal_status, BudgetState, BudgetStatus, GoalState, GoalStatus};
