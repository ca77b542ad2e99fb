//! Storage initialization
//!
//! Handles first-run setup and default data creation

use tracing::info;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::{default_categories, Category};

use super::file_io::write_json_atomic;
use super::json_store::RecordFile;

/// Prepare a fresh data directory
///
/// Creates the directories and writes the default categories when no
/// category file exists yet. Existing data is left alone.
pub fn initialize_storage(paths: &FintrackPaths) -> Result<bool, FintrackError> {
    paths.ensure_directories()?;

    if !needs_initialization(paths) {
        return Ok(false);
    }

    let file: RecordFile<Category> = RecordFile {
        records: default_categories(),
    };
    write_json_atomic(paths.categories_file(), &file)?;
    info!(count = file.records.len(), "Created default categories");

    Ok(true)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FintrackPaths) -> bool {
    !paths.categories_file().exists()
}
