//! File-backed record store
//!
//! Each collection lives in its own `{"records": [...]}` JSON file that is
//! rewritten atomically after every successful mutation.

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{FintrackError, FintrackResult};

use super::file_io::{read_json, write_json_atomic};
use super::store::{Record, RecordStore, RecordTable};

/// On-disk layout of a collection file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct RecordFile<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

impl<T> Default for RecordFile<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

/// A record store persisted to one JSON file
#[derive(Debug)]
pub struct JsonStore<T> {
    path: PathBuf,
    table: RecordTable<T>,
}

impl<T> JsonStore<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    /// Load the collection at `path`; a missing file is an empty collection
    pub fn open(path: impl Into<PathBuf>) -> FintrackResult<Self> {
        let path = path.into();
        let file: RecordFile<T> = read_json(&path).map_err(|e| {
            warn!(collection = T::COLLECTION, error = %e, "Could not read store file");
            FintrackError::Load(T::COLLECTION)
        })?;

        debug!(
            collection = T::COLLECTION,
            count = file.records.len(),
            path = %path.display(),
            "Loaded records"
        );

        Ok(Self {
            path,
            table: RecordTable::new(file.records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(path: &Path, records: &[T]) -> FintrackResult<()> {
        let file = RecordFile {
            records: records.to_vec(),
        };
        write_json_atomic(path, &file)
    }
}

impl<T> RecordStore<T> for JsonStore<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    fn get_all(&self) -> FintrackResult<Vec<T>> {
        self.table.snapshot()
    }

    fn get_by_id(&self, id: T::Id) -> FintrackResult<T> {
        self.table.find(id)
    }

    fn create(&self, record: T) -> FintrackResult<T> {
        self.table
            .create(record, |records| Self::persist(&self.path, records))
    }

    fn update(&self, id: T::Id, record: T) -> FintrackResult<T> {
        self.table
            .update(id, record, |records| Self::persist(&self.path, records))
    }

    fn delete(&self, id: T::Id) -> FintrackResult<bool> {
        self.table
            .delete(id, |records| Self::persist(&self.path, records))
    }
}
