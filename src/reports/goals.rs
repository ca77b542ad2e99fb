//! Savings Goals Summary
//!
//! Totals across all goals: how many are complete and how much of the
//! combined target has been saved.

use chrono::NaiveDate;

use crate::display::format::format_percentage;
use crate::engine::{self, goal_status, GoalState, GoalStatus};
use crate::error::FintrackResult;
use crate::models::{Money, SavingsGoal};
use crate::services::GoalService;
use crate::storage::Storage;

/// Goals summary as of a given day
#[derive(Debug, Clone)]
pub struct GoalsSummary {
    pub today: NaiveDate,
    /// Nearest deadline first, each with its status
    pub goals: Vec<(SavingsGoal, GoalStatus)>,
    pub completed: usize,
    pub total_target: Money,
    pub total_saved: Money,
}

impl GoalsSummary {
    pub fn generate(storage: &Storage, today: NaiveDate) -> FintrackResult<Self> {
        let goals: Vec<(SavingsGoal, GoalStatus)> = GoalService::new(storage)
            .list()?
            .into_iter()
            .map(|g| {
                let status = goal_status(&g, today);
                (g, status)
            })
            .collect();

        Ok(Self {
            today,
            completed: goals
                .iter()
                .filter(|(_, s)| s.state == GoalState::Completed)
                .count(),
            total_target: goals.iter().map(|(g, _)| g.target_amount).sum(),
            total_saved: goals.iter().map(|(g, _)| g.current_amount).sum(),
            goals,
        })
    }

    /// Saved / target across every goal, 0 when there are none
    pub fn overall_progress(&self) -> f64 {
        engine::percent_of(self.total_saved, self.total_target)
    }

    /// Goals needing attention: overdue or due soon
    pub fn attention(&self) -> Vec<&SavingsGoal> {
        self.goals
            .iter()
            .filter(|(_, s)| matches!(s.state, GoalState::Overdue | GoalState::DueSoon))
            .map(|(g, _)| g)
            .collect()
    }

    /// Format the summary header for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Goals: {} ({} completed)\n",
            self.goals.len(),
            self.completed
        ));
        output.push_str(&format!(
            "Saved: {} of {}\n",
            self.total_saved.format_with_symbol(symbol),
            self.total_target.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Overall progress: {}\n",
            format_percentage(self.overall_progress())
        ));

        let attention = self.attention();
        if !attention.is_empty() {
            let names: Vec<&str> = attention.iter().map(|g| g.name.as_str()).collect();
            output.push_str(&format!("Needs attention: {}\n", names.join(", ")));
        }

        output
    }
}
