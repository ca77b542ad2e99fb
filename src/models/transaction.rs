//! Transaction model
//!
//! A transaction records a single income or expense. Stored dates are read
//! leniently: a missing or unparseable date is kept as `None` so the record
//! survives loading and is simply skipped by month aggregation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::FieldErrors;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Invalid transaction type: {}", other)),
        }
    }
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Non-negative amount; the direction is carried by `kind`
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Name of a category of the same type
    pub category: String,

    pub description: String,

    /// Calendar date, `None` when the stored value was missing or invalid
    #[serde(default, with = "lenient_date")]
    pub date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Build a stored transaction from validated form input
    pub fn from_draft(id: TransactionId, draft: TransactionDraft) -> Self {
        Self {
            id,
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category.trim().to_string(),
            description: draft.description.trim().to_string(),
            date: draft.date,
            created_at: Utc::now(),
        }
    }

    /// Apply edited form input, keeping id and creation time
    pub fn apply_draft(&mut self, draft: TransactionDraft) {
        self.amount = draft.amount;
        self.kind = draft.kind;
        self.category = draft.category.trim().to_string();
        self.description = draft.description.trim().to_string();
        self.date = draft.date;
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Form view of this transaction, used as the base for edits
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            amount: self.amount,
            kind: self.kind,
            category: self.category.clone(),
            description: self.description.clone(),
            date: self.date,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "no date".to_string());
        write!(
            f,
            "{} {} {} ({}, {})",
            date, self.kind, self.amount, self.category, self.description
        )
    }
}

/// User-entered transaction fields before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub amount: Money,
    pub kind: TransactionType,
    pub category: String,
    pub description: String,
    pub date: Option<NaiveDate>,
}

impl TransactionDraft {
    /// Check the fields that do not need other records to validate
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if !self.amount.is_positive() {
            errors.add("amount", "Amount must be greater than 0");
        }

        if self.category.trim().is_empty() {
            errors.add("category", "Category is required");
        }

        if self.description.trim().is_empty() {
            errors.add("description", "Description is required");
        }

        if self.date.is_none() {
            errors.add("date", "Date is required");
        }

        errors.into_result()
    }
}

/// Parse a stored date value
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (reduced to their UTC date)
/// and naive `YYYY-MM-DDTHH:MM:SS` timestamps.
pub fn parse_stored_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().and_then(super::parse_stored_date))
    }
}
