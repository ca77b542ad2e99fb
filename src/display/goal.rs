//! Savings goal display formatting

use chrono::NaiveDate;
use tabled::{settings::Style, Table, Tabled};

use crate::engine::{goal_status, GoalState, GoalStatus};
use crate::models::SavingsGoal;

use super::format::{format_date, format_percentage, progress_bar};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// `12 days left`, `Due today`, `3 days overdue` or `Completed`
pub fn format_days_left(status: &GoalStatus) -> String {
    match (status.state, status.days_left) {
        (GoalState::Completed, _) => "Completed".to_string(),
        (_, 0) => "Due today".to_string(),
        (_, 1) => "1 day left".to_string(),
        (_, -1) => "1 day overdue".to_string(),
        (_, d) if d < 0 => format!("{} days overdue", -d),
        (_, d) => format!("{} days left", d),
    }
}

/// Goals as a table, with status relative to `today`
pub fn format_goal_list(goals: &[SavingsGoal], today: NaiveDate, symbol: &str) -> String {
    if goals.is_empty() {
        return "No savings goals yet.\n".to_string();
    }

    let rows = goals.iter().map(|g| {
        let status = goal_status(g, today);
        GoalRow {
            id: g.id.to_string(),
            name: g.name.clone(),
            saved: g.current_amount.format_with_symbol(symbol),
            target: g.target_amount.format_with_symbol(symbol),
            progress: format!(
                "{} {}",
                progress_bar(status.display_percentage, 10),
                format_percentage(status.display_percentage)
            ),
            deadline: format_date(g.deadline),
            status: format!("{} ({})", status.state, format_days_left(&status)),
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a single goal for display
pub fn format_goal_details(goal: &SavingsGoal, today: NaiveDate, symbol: &str) -> String {
    let status = goal_status(goal, today);
    let mut output = String::new();

    output.push_str(&format!("Goal:      {} ({})\n", goal.name, goal.id));
    output.push_str(&format!(
        "Saved:     {} of {} ({})\n",
        goal.current_amount.format_with_symbol(symbol),
        goal.target_amount.format_with_symbol(symbol),
        format_percentage(status.display_percentage)
    ));
    if !status.remaining.is_negative() && !status.remaining.is_zero() {
        output.push_str(&format!(
            "Remaining: {}\n",
            status.remaining.format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!(
        "Deadline:  {} ({})\n",
        format_date(goal.deadline),
        format_days_left(&status)
    ));
    output.push_str(&format!("Status:    {}\n", status.state));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalId, Money};
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(saved: i64, deadline: NaiveDate) -> SavingsGoal {
        SavingsGoal {
            id: GoalId::new(1),
            name: "Vacation".into(),
            target_amount: Money::from_dollars(2000),
            current_amount: Money::from_dollars(saved),
            deadline,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_days_left_wording() {
        let today = date(2024, 5, 1);
        let wording = |g: SavingsGoal| format_days_left(&goal_status(&g, today));

        assert_eq!(wording(goal(100, date(2024, 5, 13))), "12 days left");
        assert_eq!(wording(goal(100, date(2024, 5, 1))), "Due today");
        assert_eq!(wording(goal(100, date(2024, 4, 28))), "3 days overdue");
        assert_eq!(wording(goal(2000, date(2024, 4, 28))), "Completed");
    }

    #[test]
    fn test_list_and_details() {
        let today = date(2024, 5, 1);
        let g = goal(500, date(2024, 12, 31));

        let list = format_goal_list(std::slice::from_ref(&g), today, "$");
        assert!(list.contains("Vacation"));
        assert!(list.contains("25%"));
        assert!(list.contains("on track"));

        let details = format_goal_details(&g, today, "$");
        assert!(details.contains("Remaining: $1,500.00"));
        assert!(details.contains("Dec 31, 2024"));
    }
}
