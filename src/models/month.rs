//! Calendar month representation
//!
//! The ledger buckets transactions by month number only (no year), so a
//! `Month` is a validated 1-12 value plus the fixed English name table.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LedgerError;

/// Month names keyed by month number (index 0 is January)
pub const MONTH_NAMES: [&str; 12] = [
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

/// A calendar month, 1 (January) through 12 (December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u8);

impl Month {
    pub const JANUARY: Month = Month(1);
    pub const DECEMBER: Month = Month(12);

    /// Create a month from its number
    pub fn new(number: u32) -> Result<Self, LedgerError> {
        if (1..=12).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(LedgerError::InvalidMonth(number))
        }
    }

    /// The real-world current month (local time)
    pub fn current() -> Self {
        Self(chrono::Local::now().month() as u8)
    }

    /// The month of a calendar date
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self(date.month() as u8)
    }

    /// Get the month number (1-12)
    pub const fn number(&self) -> u32 {
        self.0 as u32
    }

    /// Get the English month name
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.0 as usize - 1]
    }

    /// Get the three-letter abbreviation
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12u8).map(Month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for Month {
    type Error = LedgerError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

impl std::str::FromStr for Month {
    type Err = LedgerError;

    /// Parse a month number ("3") or an English name/abbreviation ("March", "mar")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse::<u32>() {
            return Self::new(number);
        }
        let lower = s.to_lowercase();
        Month::all()
            .find(|m| {
                let name = m.name().to_lowercase();
                name == lower || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| LedgerError::Validation(format!("Unknown month: {}", s)))
    }
}
