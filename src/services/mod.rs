//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer:
//! validation that needs other records, derived budget spending, logging
//! of skipped data, and the orderings the views expect.

pub mod budget;
pub mod category;
pub mod goal;
pub mod transaction;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use goal::GoalService;
pub use transaction::{TransactionService, TransactionTotals};

use tracing::warn;

use crate::engine;
use crate::models::Transaction;

/// Log every transaction the aggregation engine will skip for lack of a date
pub(crate) fn warn_undated(transactions: &[Transaction]) {
    for txn in engine::undated(transactions) {
        warn!(
            id = %txn.id,
            description = %txn.description,
            "Transaction has no valid date and is excluded from monthly totals"
        );
    }
}
