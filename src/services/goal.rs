//! Savings goal service

use chrono::NaiveDate;
use tracing::info;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{GoalDraft, GoalId, SavingsGoal};
use crate::storage::Storage;

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All goals, nearest deadline first
    pub fn list(&self) -> FintrackResult<Vec<SavingsGoal>> {
        let mut goals = self.storage.goals.get_all()?;
        goals.sort_by_key(|g| (g.deadline, g.id));
        Ok(goals)
    }

    pub fn get(&self, id: GoalId) -> FintrackResult<SavingsGoal> {
        self.storage.goals.get_by_id(id)
    }

    pub fn create(&self, draft: GoalDraft, today: NaiveDate) -> FintrackResult<SavingsGoal> {
        draft.validate(today).map_err(FintrackError::Validation)?;
        let created = self
            .storage
            .goals
            .create(SavingsGoal::from_draft(GoalId::new(0), draft))?;

        info!(
            id = %created.id,
            name = %created.name,
            target = %created.target_amount,
            deadline = %created.deadline,
            "Created savings goal"
        );
        Ok(created)
    }

    pub fn update(
        &self,
        id: GoalId,
        draft: GoalDraft,
        today: NaiveDate,
    ) -> FintrackResult<SavingsGoal> {
        let mut goal = self.get(id)?;
        draft.validate(today).map_err(FintrackError::Validation)?;
        goal.apply_draft(draft);

        let updated = self.storage.goals.update(id, goal)?;
        info!(id = %id, saved = %updated.current_amount, "Updated savings goal");
        Ok(updated)
    }

    pub fn delete(&self, id: GoalId) -> FintrackResult<SavingsGoal> {
        let goal = self.get(id)?;
        self.storage.goals.delete(id)?;
        info!(id = %id, name = %goal.name, "Deleted savings goal");
        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::time::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(name: &str, deadline: NaiveDate) -> GoalDraft {
        GoalDraft {
            name: name.into(),
            target_amount: Money::from_dollars(1000),
            current_amount: Money::from_dollars(100),
            deadline,
        }
    }

    #[test]
    fn test_list_is_sorted_by_deadline() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = GoalService::new(&storage);
        let today = date(2024, 5, 1);

        service.create(draft("Later", date(2025, 1, 1)), today).unwrap();
        service.create(draft("Sooner", date(2024, 6, 1)), today).unwrap();

        let names: Vec<String> = service.list().unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Sooner", "Later"]);
    }

    #[test]
    fn test_past_deadline_is_rejected() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = GoalService::new(&storage);

        let err = service
            .create(draft("Trip", date(2024, 4, 30)), date(2024, 5, 1))
            .unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().get("deadline"),
            Some("Deadline cannot be in the past")
        );
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_keeps_identity() {
        let storage = Storage::in_memory(Duration::ZERO);
        let service = GoalService::new(&storage);
        let today = date(2024, 5, 1);
        let created = service.create(draft("Trip", date(2024, 9, 1)), today).unwrap();

        let mut change = created.to_draft();
        change.current_amount = Money::from_dollars(600);
        let updated = service.update(created.id, change, today).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.current_amount, Money::from_dollars(600));

        assert!(service
            .update(GoalId::new(7), draft("x", date(2024, 9, 1)), today)
            .unwrap_err()
            .is_not_found());
        assert_eq!(service.delete(created.id).unwrap().name, "Trip");
        assert!(service.get(created.id).unwrap_err().is_not_found());
    }
}
