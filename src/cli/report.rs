//! Dashboard, month picker and configuration commands

use chrono::NaiveDate;

use crate::config::{paths::FintrackPaths, settings::Settings};
use crate::display::format::month_options;
use crate::error::FintrackResult;
use crate::reports::DashboardReport;
use crate::storage::Storage;

use super::parse_month;

/// Print the dashboard for a month (the current month by default)
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    month: Option<&str>,
) -> FintrackResult<()> {
    let month = parse_month(month, today)?;
    let report = DashboardReport::generate(storage, month, settings)?;
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print the selectable months, newest first
pub fn handle_months_command(settings: &Settings, today: NaiveDate) {
    for option in month_options(today, settings.month_options) {
        println!("{}  {}", option.value, option.label);
    }
}

/// Print paths and settings
pub fn handle_config_command(paths: &FintrackPaths, settings: &Settings, demo: bool) {
    println!("fintrack Configuration");
    println!("======================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    if demo {
        println!("Storage:        in-memory demo data");
    }
    println!();
    println!("Settings:");
    println!("  Currency symbol:      {}", settings.currency_symbol);
    println!("  Month options:        {}", settings.month_options);
    println!("  Trend months:         {}", settings.trend_months);
    println!("  Recent transactions:  {}", settings.recent_transactions);
    println!("  Simulated latency:    {} ms", settings.simulated_latency_ms);
    println!("  Log filter:           {}", settings.log_filter);
}
