//! Month keys and per-month ledger data.

use std::{fmt, str::FromStr};

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{pot::Pots, transaction::Transaction};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Canonical identifier for a calendar year+month pair.
///
/// The wire form is `YYYY-MM` with zero padding, so the derived ordering
/// coincides with chronological order in both the typed and the string
/// representation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

/// Errors raised when constructing [`MonthKey`] values from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthKeyError {
    #[error("malformed month key `{0}`: expected YYYY-MM")]
    Malformed(String),
    #[error("month {0} out of range 1..=12")]
    MonthOutOfRange(u32),
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Derives the key for the calendar month containing `date`; day and
    /// time of day are discarded.
    pub fn from_date(date: impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Key for the calendar month containing the current instant.
    pub fn current() -> Self {
        Self::from_date(chrono::Utc::now())
    }

    /// Key for the calendar month immediately following this one.
    pub fn successor(self) -> Self {
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

    /// Stable human-readable label, e.g. `January 2026`.
    pub fn label(self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (year, month) = raw
            .split_once('-')
            .ok_or_else(|| MonthKeyError::Malformed(raw.into()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| MonthKeyError::Malformed(raw.into()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthKeyError::Malformed(raw.into()))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

/// Data tracked for a single calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthData {
    pub pots: Pots,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl MonthData {
    /// Month created on a fresh install: example names, nonzero budgets.
    pub fn bootstrap() -> Self {
        Self {
            pots: Pots::bootstrap(),
            transactions: Vec::new(),
        }
    }

    /// Fallback used when provisioning with no prior month to copy from.
    pub fn zeroed() -> Self {
        Self {
            pots: Pots::zeroed(),
            transactions: Vec::new(),
        }
    }

    /// New month carrying over pot configuration but no spending.
    pub fn from_template(template: &Pots) -> Self {
        Self {
            pots: template.clone(),
            transactions: Vec::new(),
        }
    }
}
