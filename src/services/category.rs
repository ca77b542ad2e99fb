//! Category service
//!
//! Lookup by name and type for the other services, plus creation of user
//! categories and protection of the defaults.

use tracing::info;

use crate::error::{FieldErrors, FintrackError, FintrackResult};
use crate::models::{Category, CategoryId, TransactionType};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List categories, optionally only those of one type, sorted by type
    /// then name
    pub fn list(&self, kind: Option<TransactionType>) -> FintrackResult<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .filter(|c| kind.map_or(true, |k| c.kind == k))
            .collect();

        categories.sort_by(|a, b| {
            (a.kind.as_str(), a.name.to_lowercase()).cmp(&(b.kind.as_str(), b.name.to_lowercase()))
        });
        Ok(categories)
    }

    pub fn get(&self, id: CategoryId) -> FintrackResult<Category> {
        self.storage.categories.get_by_id(id)
    }

    /// Find a category by name (case-insensitive) within one type
    pub fn find_by_name(
        &self,
        name: &str,
        kind: TransactionType,
    ) -> FintrackResult<Option<Category>> {
        Ok(self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .find(|c| c.matches(name, kind)))
    }

    /// Resolve a category for a form field, recording a field error when
    /// no category of `kind` has that name
    ///
    /// Returns the stored spelling of the name so records stay consistent.
    pub(crate) fn resolve(
        &self,
        name: &str,
        kind: TransactionType,
        errors: &mut FieldErrors,
    ) -> FintrackResult<Option<String>> {
        if name.trim().is_empty() {
            return Ok(None);
        }

        match self.find_by_name(name, kind)? {
            Some(category) => Ok(Some(category.name)),
            None => {
                errors.add(
                    "category",
                    format!("'{}' is not an {} category", name.trim(), kind),
                );
                Ok(None)
            }
        }
    }

    /// Create a user category
    pub fn create(&self, name: &str, kind: TransactionType) -> FintrackResult<Category> {
        let category = Category::new(CategoryId::new(0), name.trim(), kind);
        category.validate().map_err(|e| {
            let mut errors = FieldErrors::new();
            errors.add("name", e.to_string());
            FintrackError::Validation(errors)
        })?;

        if self.find_by_name(&category.name, kind)?.is_some() {
            return Err(FintrackError::Duplicate {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        let created = self.storage.categories.create(category)?;
        info!(id = %created.id, name = %created.name, kind = %created.kind, "Created category");
        Ok(created)
    }

    /// Delete a user category; default categories are refused
    pub fn delete(&self, id: CategoryId) -> FintrackResult<Category> {
        let category = self.storage.categories.get_by_id(id)?;
        self.storage.categories.delete(id)?;
        info!(id = %id, name = %category.name, "Deleted category");
        Ok(category)
    }
}
