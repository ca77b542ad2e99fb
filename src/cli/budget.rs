//! Budget CLI commands
//!
//! Implements CLI commands for monthly category budgets and the month
//! overview.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::budget::{format_budget_details, format_budget_list};
use crate::error::FintrackResult;
use crate::models::{BudgetDraft, BudgetId};
use crate::reports::BudgetOverviewReport;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_amount, parse_month};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a spending limit for an expense category in a month
    Set {
        /// Expense category name
        category: String,
        /// Monthly limit (e.g., "400" or "400.00")
        limit: String,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List budgets with spending for a month
    List {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the budget overview with totals for a month
    Overview {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show one budget
    Show {
        /// Budget ID (e.g., "bud-2" or "2")
        id: BudgetId,
    },

    /// Edit a budget
    Edit {
        /// Budget ID
        id: BudgetId,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New limit
        #[arg(short, long)]
        limit: Option<String>,
        /// New month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: BudgetId,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: BudgetCommands,
) -> FintrackResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set {
            category,
            limit,
            month,
        } => {
            let draft = BudgetDraft {
                category,
                limit: parse_amount("limit", &limit)?,
                month: parse_month(month.as_deref(), today)?,
            };

            let budget = service.create(draft)?;
            println!("Created budget {}", budget.id);
            print!("{}", format_budget_details(&budget, symbol));
        }

        BudgetCommands::List { month } => {
            let month = parse_month(month.as_deref(), today)?;
            let budgets = service.list(Some(month))?;
            print!("{}", format_budget_list(&budgets, symbol));
        }

        BudgetCommands::Overview { month } => {
            let month = parse_month(month.as_deref(), today)?;
            let report = BudgetOverviewReport::generate(storage, month)?;
            print!("{}", report.format_terminal(symbol));
        }

        BudgetCommands::Show { id } => {
            let budget = service.get(id)?;
            print!("{}", format_budget_details(&budget, symbol));
        }

        BudgetCommands::Edit {
            id,
            category,
            limit,
            month,
        } => {
            let mut draft = service.get(id)?.to_draft();

            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(limit) = limit {
                draft.limit = parse_amount("limit", &limit)?;
            }
            if month.is_some() {
                draft.month = parse_month(month.as_deref(), today)?;
            }

            let budget = service.update(id, draft)?;
            println!("Updated budget {}", budget.id);
            print!("{}", format_budget_details(&budget, symbol));
        }

        BudgetCommands::Delete { id } => {
            let budget = service.delete(id)?;
            println!(
                "Deleted budget {} ({} for {})",
                budget.id, budget.category, budget.month
            );
        }
    }

    Ok(())
}
