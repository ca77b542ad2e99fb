//! Category CLI commands

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::FintrackResult;
use crate::models::{CategoryId, TransactionType};
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories grouped by type
    List {
        /// Only income or only expense categories
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
    },

    /// Add a custom category
    Add {
        /// Category name
        name: String,
        /// income or expense
        #[arg(short = 't', long = "type")]
        kind: TransactionType,
    },

    /// Delete a custom category (default categories are kept)
    Delete {
        /// Category ID (e.g., "cat-13" or "13")
        id: CategoryId,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> FintrackResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => {
            let categories = service.list(kind)?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add { name, kind } => {
            let category = service.create(&name, kind)?;
            println!(
                "Created {} category '{}' ({})",
                category.kind, category.name, category.id
            );
        }

        CategoryCommands::Delete { id } => {
            let category = service.delete(id)?;
            println!("Deleted category '{}' ({})", category.name, category.id);
        }
    }

    Ok(())
}
