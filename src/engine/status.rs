//! Progress classification for budgets and savings goals

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::monthly::percent_of;
use crate::models::{Budget, Money, SavingsGoal};

/// Share of the limit at which a budget starts warning
pub const BUDGET_WARNING_PERCENT: f64 = 80.0;

/// Goals closer than this many days to their deadline count as due soon
pub const GOAL_DUE_SOON_DAYS: i64 = 30;

/// Goals below this progress are flagged when due soon
pub const GOAL_ON_TRACK_PERCENT: f64 = 80.0;

/// How a budget is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetState {
    Ok,
    Warning,
    Over,
}

impl fmt::Display for BudgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warning => write!(f, "warning"),
            Self::Over => write!(f, "over"),
        }
    }
}

/// Derived figures for one budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus {
    /// spent / limit * 100, uncapped; 0 when the limit is zero
    pub percentage: f64,
    /// `percentage` capped at 100 for progress bars
    pub display_percentage: f64,
    /// limit - spent; negative when overspent
    pub remaining: Money,
    pub state: BudgetState,
}

/// Classify a budget from its limit and derived spend
pub fn budget_status(budget: &Budget) -> BudgetStatus {
    let percentage = percent_of(budget.spent, budget.limit);

    let state = if budget.spent > budget.limit {
        BudgetState::Over
    } else if percentage >= BUDGET_WARNING_PERCENT {
        BudgetState::Warning
    } else {
        BudgetState::Ok
    };

    BudgetStatus {
        percentage,
        display_percentage: percentage.min(100.0),
        remaining: budget.limit - budget.spent,
        state,
    }
}

/// How a savings goal is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalState {
    Completed,
    Overdue,
    DueSoon,
    Normal,
}

impl fmt::Display for GoalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Overdue => write!(f, "overdue"),
            Self::DueSoon => write!(f, "due soon"),
            Self::Normal => write!(f, "on track"),
        }
    }
}

/// Derived figures for one savings goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalStatus {
    /// current / target * 100, uncapped; 0 when the target is zero
    pub percentage: f64,
    /// `percentage` capped at 100
    pub display_percentage: f64,
    /// Whole days from `today` until the deadline; negative once passed
    pub days_left: i64,
    pub remaining: Money,
    pub state: GoalState,
}

/// Classify a goal relative to an explicit `today`
///
/// Completion is checked first, so a funded goal is `Completed` whatever
/// its deadline.
pub fn goal_status(goal: &SavingsGoal, today: NaiveDate) -> GoalStatus {
    let percentage = percent_of(goal.current_amount, goal.target_amount);
    let days_left = (goal.deadline - today).num_days();

    let state = if goal.is_completed() {
        GoalState::Completed
    } else if days_left < 0 {
        GoalState::Overdue
    } else if days_left < GOAL_DUE_SOON_DAYS && percentage < GOAL_ON_TRACK_PERCENT {
        GoalState::DueSoon
    } else {
        GoalState::Normal
    };

    GoalStatus {
        percentage,
        display_percentage: percentage.min(100.0),
        days_left,
        remaining: goal.remaining(),
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{budget, goal};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_limit_does_not_divide() {
        let mut b = budget(1, "Food", 0, "2024-05");
        b.spent = Money::from_dollars(5);

        let status = budget_status(&b);
        assert_eq!(status.percentage, 0.0);
        assert_eq!(status.remaining, Money::from_dollars(-5));
        assert_eq!(status.state, BudgetState::Over);
    }

    #[test]
    fn test_overspent_budget() {
        let mut b = budget(1, "Food", 100_00, "2024-05");
        b.spent = Money::from_dollars(150);

        let status = budget_status(&b);
        assert_eq!(status.state, BudgetState::Over);
        assert_eq!(status.remaining, Money::from_dollars(-50));
        assert_eq!(status.percentage, 150.0);
        assert_eq!(status.display_percentage, 100.0);
    }

    #[test]
    fn test_budget_thresholds() {
        let mut b = budget(1, "Food", 100_00, "2024-05");

        b.spent = Money::from_cents(79_99);
        assert_eq!(budget_status(&b).state, BudgetState::Ok);

        b.spent = Money::from_dollars(80);
        assert_eq!(budget_status(&b).state, BudgetState::Warning);

        // Exactly at the limit is a warning, not over
        b.spent = Money::from_dollars(100);
        let status = budget_status(&b);
        assert_eq!(status.state, BudgetState::Warning);
        assert_eq!(status.remaining, Money::zero());
    }

    #[test]
    fn test_completed_goal_ignores_deadline() {
        let g = goal(1, 500_00, 500_00, "2020-01-01");
        let status = goal_status(&g, date(2024, 5, 1));
        assert_eq!(status.state, GoalState::Completed);
        assert!(status.days_left < 0);
        assert_eq!(status.display_percentage, 100.0);
    }

    #[test]
    fn test_overdue_goal() {
        let g = goal(1, 1000_00, 900_00, "2024-04-30");
        let status = goal_status(&g, date(2024, 5, 1));
        assert_eq!(status.days_left, -1);
        assert_eq!(status.state, GoalState::Overdue);
    }

    #[test]
    fn test_due_soon_needs_low_progress() {
        let today = date(2024, 5, 1);

        let behind = goal(1, 1000_00, 500_00, "2024-05-20");
        let status = goal_status(&behind, today);
        assert_eq!(status.days_left, 19);
        assert_eq!(status.state, GoalState::DueSoon);

        let nearly = goal(2, 1000_00, 850_00, "2024-05-20");
        assert_eq!(goal_status(&nearly, today).state, GoalState::Normal);

        let due_today = goal(3, 1000_00, 10_00, "2024-05-01");
        let status = goal_status(&due_today, today);
        assert_eq!(status.days_left, 0);
        assert_eq!(status.state, GoalState::DueSoon);
    }

    #[test]
    fn test_far_deadline_is_normal() {
        let g = goal(1, 1000_00, 0, "2024-05-31");
        let status = goal_status(&g, date(2024, 5, 1));
        assert_eq!(status.days_left, 30);
        assert_eq!(status.state, GoalState::Normal);
        assert_eq!(status.percentage, 0.0);
        assert_eq!(status.remaining, Money::from_dollars(1000));
    }

    #[test]
    fn test_status_is_deterministic() {
        let g = goal(1, 1000_00, 250_00, "2024-06-15");
        let today = date(2024, 6, 1);
        assert_eq!(goal_status(&g, today), goal_status(&g, today));
    }
}
