//! Storage layer for fintrack
//!
//! Four record stores (transactions, budgets, savings goals, categories)
//! behind the [`RecordStore`] trait, backed either by JSON files with
//! atomic writes or by memory.

pub mod demo;
pub mod file_io;
pub mod init;
pub mod json_store;
pub mod memory_store;
pub mod store;

pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, needs_initialization};
pub use json_store::{JsonStore, RecordFile};
pub use memory_store::MemoryStore;
pub use store::{Record, RecordStore};

use std::time::Duration;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::{default_categories, Budget, Category, SavingsGoal, Transaction};

/// Main storage coordinator that provides access to all stores
///
/// Built explicitly per run; nothing here is global.
pub struct Storage {
    pub transactions: Box<dyn RecordStore<Transaction>>,
    pub budgets: Box<dyn RecordStore<Budget>>,
    pub goals: Box<dyn RecordStore<SavingsGoal>>,
    pub categories: Box<dyn RecordStore<Category>>,
}

impl Storage {
    /// Open the JSON-file stores under `paths`
    pub fn open(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        paths.ensure_directories()?;
        debug!(data_dir = %paths.data_dir().display(), "Opening file storage");

        Ok(Self {
            transactions: Box::new(JsonStore::open(paths.transactions_file())?),
            budgets: Box::new(JsonStore::open(paths.budgets_file())?),
            goals: Box::new(JsonStore::open(paths.goals_file())?),
            categories: Box::new(JsonStore::open(paths.categories_file())?),
        })
    }

    /// Empty in-memory stores seeded only with the default categories
    pub fn in_memory(latency: Duration) -> Self {
        Self {
            transactions: Box::new(MemoryStore::new(latency)),
            budgets: Box::new(MemoryStore::new(latency)),
            goals: Box::new(MemoryStore::new(latency)),
            categories: Box::new(MemoryStore::with_records(default_categories(), latency)),
        }
    }

    /// In-memory stores filled with sample data dated around `today`
    pub fn demo(today: NaiveDate, latency: Duration) -> Self {
        Self {
            transactions: Box::new(MemoryStore::with_records(
                demo::transactions(today),
                latency,
            )),
            budgets: Box::new(MemoryStore::with_records(demo::budgets(today), latency)),
            goals: Box::new(MemoryStore::with_records(demo::goals(today), latency)),
            categories: Box::new(MemoryStore::with_records(default_categories(), latency)),
        }
    }
}
