//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod goal;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_config_command, handle_dashboard_command, handle_months_command};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::display::format::current_month;
use crate::error::{FieldErrors, FintrackError, FintrackResult};
use crate::models::{Money, MonthKey};

fn invalid_field(field: &'static str, message: String) -> FintrackError {
    let mut errors = FieldErrors::new();
    errors.add(field, message);
    FintrackError::Validation(errors)
}

/// Parse a user-entered amount such as `40`, `1,250.50` or `$9.99`
pub(crate) fn parse_amount(field: &'static str, input: &str) -> FintrackResult<Money> {
    Money::parse(input).map_err(|_| invalid_field(field, format!("Invalid amount: {}", input)))
}

/// Parse a `YYYY-MM-DD` date argument
pub(crate) fn parse_date(field: &'static str, input: &str) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        invalid_field(
            field,
            format!("Invalid date: {} (expected YYYY-MM-DD)", input),
        )
    })
}

/// Parse a `YYYY-MM` month argument, defaulting to the month of `today`
pub(crate) fn parse_month(input: Option<&str>, today: NaiveDate) -> FintrackResult<MonthKey> {
    match input {
        None => Ok(current_month(today)),
        Some(raw) => MonthKey::parse(raw.trim())
            .map_err(|e| invalid_field("month", format!("{} (expected YYYY-MM)", e))),
    }
}
