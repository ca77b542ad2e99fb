//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, progress bars, and status labels.

pub mod budget;
pub mod category;
pub mod format;
pub mod goal;
pub mod transaction;

pub use budget::{format_budget_details, format_budget_list};
pub use category::format_category_list;
pub use format::{
    current_month, format_currency, format_date, format_date_short, format_percentage,
    month_name, month_options, month_short_label, parse_currency, MonthOption,
};
pub use goal::{format_goal_details, format_goal_list};
pub use transaction::{format_totals, format_transaction_details, format_transaction_list};
