//! Savings goal CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::goal::{format_goal_details, format_goal_list};
use crate::error::FintrackResult;
use crate::models::{GoalDraft, GoalId, Money};
use crate::reports::GoalsSummary;
use crate::services::GoalService;
use crate::storage::Storage;

use super::{parse_amount, parse_date};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        /// Goal name
        name: String,
        /// Amount to save
        #[arg(short, long)]
        target: String,
        /// Amount already saved
        #[arg(short, long)]
        saved: Option<String>,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: String,
    },

    /// List goals with a summary, nearest deadline first
    List,

    /// Show one goal
    Show {
        /// Goal ID (e.g., "goal-1" or "1")
        id: GoalId,
    },

    /// Edit a goal
    Edit {
        /// Goal ID
        id: GoalId,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New target amount
        #[arg(short, long)]
        target: Option<String>,
        /// New saved amount
        #[arg(short, long)]
        saved: Option<String>,
        /// New deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
    },

    /// Delete a goal
    Delete {
        /// Goal ID
        id: GoalId,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: GoalCommands,
) -> FintrackResult<()> {
    let service = GoalService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Add {
            name,
            target,
            saved,
            deadline,
        } => {
            let draft = GoalDraft {
                name,
                target_amount: parse_amount("target_amount", &target)?,
                current_amount: match saved {
                    Some(saved) => parse_amount("current_amount", &saved)?,
                    None => Money::zero(),
                },
                deadline: parse_date("deadline", &deadline)?,
            };

            let goal = service.create(draft, today)?;
            println!("Created savings goal {}", goal.id);
            print!("{}", format_goal_details(&goal, today, symbol));
        }

        GoalCommands::List => {
            let summary = GoalsSummary::generate(storage, today)?;
            let goals: Vec<_> = summary.goals.iter().map(|(g, _)| g.clone()).collect();
            print!("{}", format_goal_list(&goals, today, symbol));
            if !goals.is_empty() {
                println!();
                print!("{}", summary.format_terminal(symbol));
            }
        }

        GoalCommands::Show { id } => {
            let goal = service.get(id)?;
            print!("{}", format_goal_details(&goal, today, symbol));
        }

        GoalCommands::Edit {
            id,
            name,
            target,
            saved,
            deadline,
        } => {
            let mut draft = service.get(id)?.to_draft();

            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(target) = target {
                draft.target_amount = parse_amount("target_amount", &target)?;
            }
            if let Some(saved) = saved {
                draft.current_amount = parse_amount("current_amount", &saved)?;
            }
            if let Some(deadline) = deadline {
                draft.deadline = parse_date("deadline", &deadline)?;
            }

            let goal = service.update(id, draft, today)?;
            println!("Updated savings goal {}", goal.id);
            print!("{}", format_goal_details(&goal, today, symbol));
        }

        GoalCommands::Delete { id } => {
            let goal = service.delete(id)?;
            println!("Deleted savings goal {} ({})", goal.id, goal.name);
        }
    }

    Ok(())
}
