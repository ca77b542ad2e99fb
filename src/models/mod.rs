//! Core data models for fintrack
//!
//! This module contains the data structures of the finance domain:
//! transactions, monthly budgets, savings goals and categories, plus the
//! money, month and id value types they are built from.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{Budget, BudgetDraft};
pub use category::{default_categories, Category, CategoryValidationError};
pub use goal::{GoalDraft, SavingsGoal};
pub use ids::{BudgetId, CategoryId, GoalId, RecordId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
pub use transaction::{Transaction, TransactionDraft, TransactionType};
