//! Reports module for fintrack
//!
//! Page-level summaries assembled from the aggregation engine: the monthly
//! dashboard, the budget overview and the savings goals summary.

pub mod budget_overview;
pub mod dashboard;
pub mod goals;

pub use budget_overview::{BudgetOverviewReport, BudgetReportRow};
pub use dashboard::DashboardReport;
pub use goals::GoalsSummary;
