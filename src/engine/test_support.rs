//! Snapshot builders shared by the engine tests

use chrono::{NaiveDate, TimeZone, Utc};

use crate::models::{
    Budget, BudgetId, GoalId, Money, MonthKey, SavingsGoal, Transaction, TransactionId,
    TransactionType,
};

pub fn txn(id: u32, cents: i64, kind: TransactionType, category: &str, date: &str) -> Transaction {
    Transaction {
        date: Some(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()),
        ..undated_txn(id, cents, kind, category)
    }
}

pub fn undated_txn(id: u32, cents: i64, kind: TransactionType, category: &str) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        amount: Money::from_cents(cents),
        kind,
        category: category.to_string(),
        description: format!("{} entry", category),
        date: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn budget(id: u32, category: &str, limit_cents: i64, month: &str) -> Budget {
    Budget {
        id: BudgetId::new(id),
        category: category.to_string(),
        limit: Money::from_cents(limit_cents),
        month: MonthKey::parse(month).unwrap(),
        spent: Money::zero(),
    }
}

pub fn goal(id: u32, target_cents: i64, current_cents: i64, deadline: &str) -> SavingsGoal {
    SavingsGoal {
        id: GoalId::new(id),
        name: format!("Goal {}", id),
        target_amount: Money::from_cents(target_cents),
        current_amount: Money::from_cents(current_cents),
        deadline: NaiveDate::parse_from_str(deadline, "%Y-%m-%d").unwrap(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}
