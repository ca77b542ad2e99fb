//! Category model
//!
//! Categories classify transactions and are scoped to either income or
//! expense. Default categories ship with a fresh installation and cannot be
//! deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionType;

/// A named classification for transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    #[serde(default)]
    pub is_default: bool,
}

impl Category {
    /// Create a user category (never a default one)
    pub fn new(id: CategoryId, name: impl Into<String>, kind: TransactionType) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            is_default: false,
        }
    }

    /// Check if this category accepts transactions of `kind` named `name`
    pub fn matches(&self, name: &str, kind: TransactionType) -> bool {
        self.kind == kind && self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Categories created on first run
pub const DEFAULT_CATEGORIES: &[(&str, TransactionType)] = &[
    ("Salary", TransactionType::Income),
    ("Freelance", TransactionType::Income),
    ("Investments", TransactionType::Income),
    ("Other Income", TransactionType::Income),
    ("Food", TransactionType::Expense),
    ("Housing", TransactionType::Expense),
    ("Transportation", TransactionType::Expense),
    ("Utilities", TransactionType::Expense),
    ("Healthcare", TransactionType::Expense),
    ("Entertainment", TransactionType::Expense),
    ("Shopping", TransactionType::Expense),
    ("Other Expense", TransactionType::Expense),
];

/// Build the default category list with sequential ids starting at 1
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, (name, kind))| Category {
            id: CategoryId::new(i as u32 + 1),
            name: (*name).to_string(),
            kind: *kind,
            is_default: true,
        })
        .collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_is_not_default() {
        let category = Category::new(CategoryId::new(20), "Pets", TransactionType::Expense);
        assert!(!category.is_default);
        assert_eq!(category.to_string(), "Pets");
    }

    #[test]
    fn test_matches_respects_type() {
        let food = Category::new(CategoryId::new(1), "Food", TransactionType::Expense);
        assert!(food.matches("food", TransactionType::Expense));
        assert!(food.matches(" Food ", TransactionType::Expense));
        assert!(!food.matches("Food", TransactionType::Income));
        assert!(!food.matches("Fuel", TransactionType::Expense));
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new(CategoryId::new(1), "Valid", TransactionType::Income);
        assert!(category.validate().is_ok());

        category.name = String::new();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));
    }

    #[test]
    fn test_default_categories() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), DEFAULT_CATEGORIES.len());
        assert!(defaults.iter().all(|c| c.is_default));
        assert_eq!(defaults[0].id, CategoryId::new(1));
        assert!(defaults
            .iter()
            .any(|c| c.matches("Food", TransactionType::Expense)));
        assert!(defaults
            .iter()
            .any(|c| c.matches("Salary", TransactionType::Income)));
    }

    #[test]
    fn test_serialization() {
        let category = Category::new(CategoryId::new(3), "Gifts", TransactionType::Income);
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["is_default"], false);

        let back: Category = serde_json::from_value(json).unwrap();
        assert_eq!(back, category);
    }
}
