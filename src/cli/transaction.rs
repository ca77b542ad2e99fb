//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::{
    format_totals, format_transaction_details, format_transaction_list,
};
use crate::engine::TransactionFilter;
use crate::error::FintrackResult;
use crate::models::{TransactionDraft, TransactionId, TransactionType};
use crate::services::{TransactionService, TransactionTotals};
use crate::storage::Storage;

use super::{parse_amount, parse_date, parse_month};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// income or expense
        #[arg(short = 't', long = "type")]
        kind: TransactionType,
        /// Amount (e.g., "40" or "1,250.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short, long)]
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Search description and category
        #[arg(short, long)]
        search: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only income or only expense
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show transaction details
    Show {
        /// Transaction ID (e.g., "txn-3" or "3")
        id: TransactionId,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: TransactionId,
        /// New type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: TransactionId,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let date = match date {
                Some(raw) => parse_date("date", &raw)?,
                None => today,
            };
            let draft = TransactionDraft {
                amount: parse_amount("amount", &amount)?,
                kind,
                category,
                description,
                date: Some(date),
            };

            let txn = service.create(draft)?;
            println!("Added transaction {}", txn.id);
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::List {
            search,
            category,
            kind,
            month,
            limit,
        } => {
            let filter = TransactionFilter {
                search,
                category,
                kind,
            };
            let mut transactions = service.list(&filter)?;

            if let Some(raw) = month {
                let month = parse_month(Some(&raw), today)?;
                transactions.retain(|t| t.date.is_some_and(|d| month.contains(d)));
            }

            let totals = TransactionTotals::of(&transactions);
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }

            print!("{}", format_transaction_list(&transactions, symbol));
            if !transactions.is_empty() {
                println!();
                print!("{}", format_totals(&totals, symbol));
            }
        }

        TransactionCommands::Show { id } => {
            let txn = service.get(id)?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let mut draft = service.get(id)?.to_draft();

            if let Some(kind) = kind {
                draft.kind = kind;
            }
            if let Some(amount) = amount {
                draft.amount = parse_amount("amount", &amount)?;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(date) = date {
                draft.date = Some(parse_date("date", &date)?);
            }

            let txn = service.update(id, draft)?;
            println!("Updated transaction {}", txn.id);
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            let txn = service.delete(id)?;
            println!("Deleted transaction {} ({})", txn.id, txn.description);
        }
    }

    Ok(())
}
