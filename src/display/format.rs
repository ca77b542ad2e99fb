//! Formatting helpers shared by every view
//!
//! Currency is shown as an absolute amount with grouping and two decimals;
//! whether it is income, expense or overspend is conveyed by the caller.

use chrono::{Datelike, NaiveDate};

use crate::models::{Money, MoneyParseError, MonthKey};

/// Symbol used when no settings are at hand
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// `$1,234.56` for any amount of either sign
pub fn format_currency(amount: Money) -> String {
    amount.format_with_symbol(DEFAULT_CURRENCY_SYMBOL)
}

/// Inverse of [`format_currency`]; also accepts plain `1234.5` input
pub fn parse_currency(input: &str) -> Result<Money, MoneyParseError> {
    Money::parse(input)
}

/// `May 3, 2024`
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {}, {}", short_month(date.month()), date.day(), date.year())
}

/// `May 3`
pub fn format_date_short(date: NaiveDate) -> String {
    format!("{} {}", short_month(date.month()), date.day())
}

/// Dates that failed to parse in storage render as a dash
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Rounded to a whole number: `79.6` becomes `80%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.0}%", value.round())
}

/// The month containing `today`
pub fn current_month(today: NaiveDate) -> MonthKey {
    MonthKey::from_date(today)
}

/// `May 2024`
pub fn month_name(month: MonthKey) -> String {
    format!("{} {}", long_month(month.month()), month.year())
}

/// `May 24`, used on chart axes
pub fn month_short_label(month: MonthKey) -> String {
    format!("{} {:02}", short_month(month.month()), month.year().rem_euclid(100))
}

/// One entry of a month picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    pub value: MonthKey,
    pub label: String,
}

/// The `count` most recent months ending with the current one, newest first
pub fn month_options(today: NaiveDate, count: usize) -> Vec<MonthOption> {
    let mut options = Vec::with_capacity(count);
    let mut month = current_month(today);
    for _ in 0..count {
        options.push(MonthOption {
            value: month,
            label: month_name(month),
        });
        month = month.prev();
    }
    options
}

fn long_month(month: u32) -> &'static str {
    MONTH_NAMES[(month as usize - 1) % 12]
}

fn short_month(month: u32) -> &'static str {
    &long_month(month)[..3]
}

/// Shorten `text` to `max` characters, ending with `...` when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Text progress bar for a percentage, filled up to 100%
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
