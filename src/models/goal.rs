//! Savings goal model
//!
//! A savings goal tracks progress toward a target amount by a deadline.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;
use crate::error::FieldErrors;

/// A target amount to reach by a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,

    pub name: String,

    pub target_amount: Money,

    /// Amount saved so far (0 ≤ current ≤ target when entered)
    pub current_amount: Money,

    pub deadline: NaiveDate,

    pub created_at: DateTime<Utc>,
}

impl SavingsGoal {
    pub fn from_draft(id: GoalId, draft: GoalDraft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            target_amount: draft.target_amount,
            current_amount: draft.current_amount,
            deadline: draft.deadline,
            created_at: Utc::now(),
        }
    }

    pub fn apply_draft(&mut self, draft: GoalDraft) {
        self.name = draft.name.trim().to_string();
        self.target_amount = draft.target_amount;
        self.current_amount = draft.current_amount;
        self.deadline = draft.deadline;
    }

    pub fn to_draft(&self) -> GoalDraft {
        GoalDraft {
            name: self.name.clone(),
            target_amount: self.target_amount,
            current_amount: self.current_amount,
            deadline: self.deadline,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Amount still to save (negative once the goal is exceeded)
    pub fn remaining(&self) -> Money {
        self.target_amount - self.current_amount
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} by {}",
            self.name, self.current_amount, self.target_amount, self.deadline
        )
    }
}

/// User-entered goal fields before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub deadline: NaiveDate,
}

impl GoalDraft {
    /// Validate against an explicit `today` so the deadline check is
    /// deterministic
    pub fn validate(&self, today: NaiveDate) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "Goal name is required");
        }

        if !self.target_amount.is_positive() {
            errors.add("target_amount", "Target amount must be greater than 0");
        }

        if self.current_amount.is_negative() {
            errors.add("current_amount", "Current amount cannot be negative");
        } else if self.current_amount > self.target_amount {
            errors.add("current_amount", "Current amount cannot exceed target amount");
        }

        if self.deadline < today {
            errors.add("deadline", "Deadline cannot be in the past");
        }

        errors.into_result()
    }
}
