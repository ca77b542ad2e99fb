//! The record store contract shared by every backend
//!
//! A store owns one collection of records. Ids are assigned on create as
//! one more than the largest id present, and are never changed by update.

use std::fmt::Debug;
use std::sync::RwLock;

use tracing::info;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    Budget, BudgetId, Category, CategoryId, GoalId, RecordId, SavingsGoal, Transaction,
    TransactionId,
};

/// An entity that can live in a record store
pub trait Record: Clone + Debug + Send + Sync {
    type Id: RecordId + Send + Sync;

    /// Singular name used in not-found messages
    const ENTITY: &'static str;

    /// Plural name used in load failures and logs
    const COLLECTION: &'static str;

    fn id(&self) -> Self::Id;

    fn set_id(&mut self, id: Self::Id);

    /// Veto deletion of this record
    fn check_delete(&self) -> FintrackResult<()> {
        Ok(())
    }
}

/// CRUD access to one collection of records
pub trait RecordStore<T: Record>: Send + Sync {
    /// Every record, in insertion order
    fn get_all(&self) -> FintrackResult<Vec<T>>;

    fn get_by_id(&self, id: T::Id) -> FintrackResult<T>;

    /// Store a new record under a freshly assigned id and return it
    fn create(&self, record: T) -> FintrackResult<T>;

    /// Replace the record stored under `id`, keeping `id`
    fn update(&self, id: T::Id, record: T) -> FintrackResult<T>;

    fn delete(&self, id: T::Id) -> FintrackResult<bool>;
}

fn not_found<T: Record>(id: T::Id) -> FintrackError {
    FintrackError::not_found(T::ENTITY, id.to_string())
}

fn lock_error(kind: &str, err: impl std::fmt::Display) -> FintrackError {
    FintrackError::Storage(format!("Failed to acquire {} lock: {}", kind, err))
}

/// Lock-guarded record list with the id and lookup rules both backends share
#[derive(Debug)]
pub(crate) struct RecordTable<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> RecordTable<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn snapshot(&self) -> FintrackResult<Vec<T>> {
        let records = self.records.read().map_err(|e| lock_error("read", e))?;
        Ok(records.clone())
    }

    pub fn find(&self, id: T::Id) -> FintrackResult<T> {
        let records = self.records.read().map_err(|e| lock_error("read", e))?;
        records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    /// Run a mutation against a copy of the records and hand the result to
    /// `commit`; the table only changes if `commit` succeeds.
    fn mutate<R>(
        &self,
        change: impl FnOnce(&mut Vec<T>) -> FintrackResult<R>,
        commit: impl FnOnce(&[T]) -> FintrackResult<()>,
    ) -> FintrackResult<R> {
        let mut records = self.records.write().map_err(|e| lock_error("write", e))?;
        let mut next = records.clone();
        let result = change(&mut next)?;
        commit(&next)?;
        *records = next;
        Ok(result)
    }

    pub fn create(
        &self,
        mut record: T,
        commit: impl FnOnce(&[T]) -> FintrackResult<()>,
    ) -> FintrackResult<T> {
        let created = self.mutate(
            |records| {
                let next_id = records
                    .iter()
                    .map(|r| r.id().value())
                    .max()
                    .unwrap_or(0)
                    .checked_add(1)
                    .ok_or_else(|| {
                        FintrackError::Storage(format!("No ids left for new {}", T::COLLECTION))
                    })?;
                record.set_id(T::Id::from_value(next_id));
                records.push(record.clone());
                Ok(record)
            },
            commit,
        )?;
        info!(collection = T::COLLECTION, id = %created.id(), "Record created");
        Ok(created)
    }

    pub fn update(
        &self,
        id: T::Id,
        mut record: T,
        commit: impl FnOnce(&[T]) -> FintrackResult<()>,
    ) -> FintrackResult<T> {
        let updated = self.mutate(
            |records| {
                let slot = records
                    .iter_mut()
                    .find(|r| r.id() == id)
                    .ok_or_else(|| not_found::<T>(id))?;
                record.set_id(id);
                *slot = record.clone();
                Ok(record)
            },
            commit,
        )?;
        info!(collection = T::COLLECTION, id = %id, "Record updated");
        Ok(updated)
    }

    pub fn delete(
        &self,
        id: T::Id,
        commit: impl FnOnce(&[T]) -> FintrackResult<()>,
    ) -> FintrackResult<bool> {
        self.mutate(
            |records| {
                let index = records
                    .iter()
                    .position(|r| r.id() == id)
                    .ok_or_else(|| not_found::<T>(id))?;
                records[index].check_delete()?;
                records.remove(index);
                Ok(())
            },
            commit,
        )?;
        info!(collection = T::COLLECTION, id = %id, "Record deleted");
        Ok(true)
    }
}

impl Record for Transaction {
    type Id = TransactionId;
    const ENTITY: &'static str = "Transaction";
    const COLLECTION: &'static str = "transactions";

    fn id(&self) -> TransactionId {
        self.id
    }

    fn set_id(&mut self, id: TransactionId) {
        self.id = id;
    }
}

impl Record for Budget {
    type Id = BudgetId;
    const ENTITY: &'static str = "Budget";
    const COLLECTION: &'static str = "budgets";

    fn id(&self) -> BudgetId {
        self.id
    }

    fn set_id(&mut self, id: BudgetId) {
        self.id = id;
    }
}

impl Record for SavingsGoal {
    type Id = GoalId;
    const ENTITY: &'static str = "Savings goal";
    const COLLECTION: &'static str = "savings goals";

    fn id(&self) -> GoalId {
        self.id
    }

    fn set_id(&mut self, id: GoalId) {
        self.id = id;
    }
}

impl Record for Category {
    type Id = CategoryId;
    const ENTITY: &'static str = "Category";
    const COLLECTION: &'static str = "categories";

    fn id(&self) -> CategoryId {
        self.id
    }

    fn set_id(&mut self, id: CategoryId) {
        self.id = id;
    }

    fn check_delete(&self) -> FintrackResult<()> {
        if self.is_default {
            return Err(FintrackError::DefaultCategory(self.name.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    fn no_commit<T>(_: &[T]) -> FintrackResult<()> {
        Ok(())
    }

    #[test]
    fn test_ids_continue_from_largest() {
        let seeded = Category::new(CategoryId::new(7), "Pets", TransactionType::Expense);
        let table = RecordTable::new(vec![seeded]);

        let created = table
            .create(
                Category::new(CategoryId::new(0), "Gifts", TransactionType::Expense),
                no_commit,
            )
            .unwrap();
        assert_eq!(created.id, CategoryId::new(8));
    }

    #[test]
    fn test_exhausted_ids_fail_without_panicking() {
        let seeded = Category::new(CategoryId::new(u32::MAX), "Pets", TransactionType::Expense);
        let table = RecordTable::new(vec![seeded]);

        let err = table
            .create(
                Category::new(CategoryId::new(0), "Gifts", TransactionType::Expense),
                no_commit,
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Storage error: No ids left for new categories");
        assert_eq!(table.snapshot().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_commit_leaves_table_unchanged() {
        let table: RecordTable<Category> = RecordTable::new(Vec::new());
        let result = table.create(
            Category::new(CategoryId::new(0), "Gifts", TransactionType::Expense),
            |_| Err(FintrackError::Storage("disk full".into())),
        );

        assert!(result.is_err());
        assert!(table.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_default_category_vetoes_delete() {
        let mut food = Category::new(CategoryId::new(1), "Food", TransactionType::Expense);
        food.is_default = true;
        let table = RecordTable::new(vec![food]);

        let err = table.delete(CategoryId::new(1), no_commit).unwrap_err();
        assert!(matches!(err, FintrackError::DefaultCategory(ref name) if name == "Food"));
        assert_eq!(table.snapshot().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let table: RecordTable<Category> = RecordTable::new(Vec::new());
        let err = table.find(CategoryId::new(3)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Category not found: cat-3");
    }
}
