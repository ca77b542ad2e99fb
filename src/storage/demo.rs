//! Sample data for the in-memory demo storage
//!
//! Dates are laid out relative to `today` so the dashboard always has a
//! current month, a previous month and goals in every state to show.

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::models::{
    Budget, BudgetId, GoalId, Money, MonthKey, SavingsGoal, Transaction, TransactionId,
    TransactionType,
};

const INCOME: TransactionType = TransactionType::Income;
const EXPENSE: TransactionType = TransactionType::Expense;

/// (days before today, dollars, cents, type, category, description)
const SAMPLE_TRANSACTIONS: &[(i64, i64, i64, TransactionType, &str, &str)] = &[
    (0, 42, 17, EXPENSE, "Food", "Grocery run"),
    (1, 64, 0, EXPENSE, "Transportation", "Fuel"),
    (2, 850, 0, INCOME, "Freelance", "Website project"),
    (3, 120, 45, EXPENSE, "Utilities", "Electric bill"),
    (4, 38, 50, EXPENSE, "Entertainment", "Concert tickets"),
    (6, 1450, 0, EXPENSE, "Housing", "Monthly rent"),
    (8, 4200, 0, INCOME, "Salary", "Paycheck"),
    (10, 27, 80, EXPENSE, "Food", "Dinner out"),
    (13, 89, 99, EXPENSE, "Shopping", "Running shoes"),
    (17, 60, 0, EXPENSE, "Healthcare", "Pharmacy"),
    (22, 135, 20, EXPENSE, "Food", "Weekly groceries"),
    (26, 75, 0, INCOME, "Investments", "Dividend"),
    (33, 1450, 0, EXPENSE, "Housing", "Monthly rent"),
    (38, 4200, 0, INCOME, "Salary", "Paycheck"),
    (41, 210, 30, EXPENSE, "Food", "Groceries"),
    (47, 98, 10, EXPENSE, "Utilities", "Water and internet"),
    (55, 310, 0, EXPENSE, "Shopping", "New monitor"),
    (64, 4200, 0, INCOME, "Salary", "Paycheck"),
    (70, 1450, 0, EXPENSE, "Housing", "Monthly rent"),
    (78, 185, 60, EXPENSE, "Food", "Groceries"),
];

/// (months back from the current month, category, limit dollars)
const SAMPLE_BUDGETS: &[(u32, &str, i64)] = &[
    (0, "Food", 400),
    (0, "Housing", 1500),
    (0, "Utilities", 150),
    (0, "Entertainment", 40),
    (0, "Shopping", 250),
    (1, "Food", 350),
    (1, "Housing", 1500),
    (1, "Utilities", 150),
];

/// (name, target dollars, saved dollars, days until deadline)
const SAMPLE_GOALS: &[(&str, i64, i64, i64)] = &[
    ("Emergency Fund", 10_000, 6_500, 240),
    ("Vacation", 3_000, 900, 21),
    ("New Laptop", 1_800, 1_800, 45),
    ("Car Down Payment", 5_000, 2_100, -14),
];

pub fn transactions(today: NaiveDate) -> Vec<Transaction> {
    SAMPLE_TRANSACTIONS
        .iter()
        .enumerate()
        .map(
            |(i, &(days_ago, dollars, cents, kind, category, description))| {
                let date = today - Duration::days(days_ago);
                Transaction {
                    id: TransactionId::new(i as u32 + 1),
                    amount: Money::from_dollars_cents(dollars, cents),
                    kind,
                    category: category.to_string(),
                    description: description.to_string(),
                    date: Some(date),
                    created_at: Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)),
                }
            },
        )
        .collect()
}

pub fn budgets(today: NaiveDate) -> Vec<Budget> {
    let current = MonthKey::from_date(today);
    SAMPLE_BUDGETS
        .iter()
        .enumerate()
        .map(|(i, &(months_back, category, limit))| {
            let month = (0..months_back).fold(current, |m, _| m.prev());
            Budget {
                id: BudgetId::new(i as u32 + 1),
                category: category.to_string(),
                limit: Money::from_dollars(limit),
                month,
                spent: Money::zero(),
            }
        })
        .collect()
}

pub fn goals(today: NaiveDate) -> Vec<SavingsGoal> {
    let created = today - Duration::days(120);
    SAMPLE_GOALS
        .iter()
        .enumerate()
        .map(|(i, &(name, target, saved, days_left))| SavingsGoal {
            id: GoalId::new(i as u32 + 1),
            name: name.to_string(),
            target_amount: Money::from_dollars(target),
            current_amount: Money::from_dollars(saved),
            deadline: today + Duration::days(days_left),
            created_at: Utc.from_utc_datetime(&created.and_time(NaiveTime::MIN)),
        })
        .collect()
}
