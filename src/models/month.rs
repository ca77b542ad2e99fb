//! Calendar month keys
//!
//! A `MonthKey` identifies a calendar month and is written as `YYYY-MM`,
//! the first seven characters of an ISO-8601 date.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next().start_date() - Duration::days(1)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// `count` consecutive months ending at (and including) this one,
    /// oldest first
    pub fn trailing(&self, count: usize) -> Vec<Self> {
        let mut months = Vec::with_capacity(count);
        let mut current = *self;
        for _ in 0..count {
            months.push(current);
            current = current.prev();
        }
        months.reverse();
        months
    }

    /// Parse a `YYYY-MM` month key
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        if year.len() != 4 || month.len() != 2 {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(month: MonthKey) -> Self {
        month.to_string()
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format (expected YYYY-MM): {}", s)
            }
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(year: i32, month: u32) -> MonthKey {
        MonthKey::new(year, month).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let feb = key(2024, 2);
        assert_eq!(feb.start_date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(feb.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let dec = key(2023, 12);
        assert_eq!(dec.end_date(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_navigation_across_years() {
        assert_eq!(key(2024, 12).next(), key(2025, 1));
        assert_eq!(key(2025, 1).prev(), key(2024, 12));
    }

    #[test]
    fn test_trailing_window() {
        let window = key(2024, 3).trailing(6);
        let labels: Vec<String> = window.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            labels,
            vec!["2023-10", "2023-11", "2023-12", "2024-01", "2024-02", "2024-03"]
        );
        assert!(key(2024, 3).trailing(0).is_empty());
    }

    #[test]
    fn test_contains() {
        let may = key(2024, 5);
        assert!(may.contains(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
        assert!(!may.contains(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(!may.contains(NaiveDate::from_ymd_opt(2023, 5, 10).unwrap()));
    }

    #[test]
    fn test_parse() {
        assert_eq!(MonthKey::parse("2024-05").unwrap(), key(2024, 5));
        assert_eq!(" 2024-11 ".parse::<MonthKey>().unwrap(), key(2024, 11));
        assert_eq!(
            MonthKey::parse("2024-13"),
            Err(MonthParseError::InvalidMonth(13))
        );
        assert!(MonthKey::parse("2024-5").is_err());
        assert!(MonthKey::parse("May 2024").is_err());
        assert!(MonthKey::parse("2024-05-01").is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(key(2023, 12) < key(2024, 1));
        assert!(key(2024, 2) > key(2024, 1));
    }

    #[test]
    fn test_serialization() {
        let month = key(2024, 5);
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2024-05\"");

        let deserialized: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(month, deserialized);
        assert!(serde_json::from_str::<MonthKey>("\"2024-00\"").is_err());
    }
}
