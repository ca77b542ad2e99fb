//! In-memory record store with optional simulated latency

use std::thread;
use std::time::Duration;

use crate::error::FintrackResult;

use super::store::{Record, RecordStore, RecordTable};

/// A record store that never touches disk
///
/// Every call sleeps for `latency` first, which lets demo runs feel like a
/// remote backend.
#[derive(Debug)]
pub struct MemoryStore<T> {
    table: RecordTable<T>,
    latency: Duration,
}

impl<T: Record> MemoryStore<T> {
    pub fn new(latency: Duration) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    /// Start from existing records, keeping their ids
    pub fn with_records(records: Vec<T>, latency: Duration) -> Self {
        Self {
            table: RecordTable::new(records),
            latency,
        }
    }

    fn pause(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}

fn in_memory<T>(_: &[T]) -> FintrackResult<()> {
    Ok(())
}

impl<T: Record> RecordStore<T> for MemoryStore<T> {
    fn get_all(&self) -> FintrackResult<Vec<T>> {
        self.pause();
        self.table.snapshot()
    }

    fn get_by_id(&self, id: T::Id) -> FintrackResult<T> {
        self.pause();
        self.table.find(id)
    }

    fn create(&self, record: T) -> FintrackResult<T> {
        self.pause();
        self.table.create(record, in_memory)
    }

    fn update(&self, id: T::Id, record: T) -> FintrackResult<T> {
        self.pause();
        self.table.update(id, record, in_memory)
    }

    fn delete(&self, id: T::Id) -> FintrackResult<bool> {
        self.pause();
        self.table.delete(id, in_memory)
    }
}
