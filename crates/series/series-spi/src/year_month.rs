//! Calendar month identifier.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeriesError};

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// A calendar month, serialized as `"YYYY-MM"`.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a month, validating `1 <= month <= 12` and a four-digit year.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(SeriesError::InvalidMonth(format!(
                "month number {} is outside 1..=12",
                month
            )));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(SeriesError::InvalidMonth(format!(
                "year {} is outside {}..={}",
                year, MIN_YEAR, MAX_YEAR
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 (January) through 12 (December).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Zero-based month of year, 0 (January) through 11 (December).
    pub fn month0(&self) -> usize {
        (self.month - 1) as usize
    }

    /// Absolute month count since year 0, used for month arithmetic.
    pub fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    fn from_ordinal(ordinal: i64) -> Self {
        let year = ordinal.div_euclid(12) as i32;
        let month = ordinal.rem_euclid(12) as u32 + 1;
        Self { year, month }
    }

    /// The month `n` months after this one (negative `n` goes backwards).
    pub fn offset(&self, n: i64) -> Self {
        Self::from_ordinal(self.ordinal() + n)
    }

    /// The following month.
    pub fn succ(&self) -> Self {
        self.offset(1)
    }

    /// The preceding month.
    pub fn pred(&self) -> Self {
        self.offset(-1)
    }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(&self, other: &YearMonth) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.succ()
            .first_day()
            .pred_opt()
            .unwrap_or(NaiveDate::MAX)
    }

    /// Iterate every month from `self` through `last`, inclusive.
    pub fn through(self, last: YearMonth) -> impl Iterator<Item = YearMonth> {
        let count = (self.months_until(&last) + 1).max(0);
        (0..count).map(move |i| self.offset(i))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = SeriesError;

    /// Accepts `"YYYY-MM"` or a full ISO date `"YYYY-MM-DD"`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.len() >= 10 {
            let head = trimmed
                .get(..10)
                .ok_or_else(|| SeriesError::InvalidMonth(s.to_string()))?;
            let date = NaiveDate::parse_from_str(head, "%Y-%m-%d")
                .map_err(|_| SeriesError::InvalidMonth(s.to_string()))?;
            return Ok(Self::from_date(date));
        }

        let (year, month) = trimmed
            .split_once('-')
            .ok_or_else(|| SeriesError::InvalidMonth(s.to_string()))?;
        if year.len() != 4 || month.len() != 2 {
            return Err(SeriesError::InvalidMonth(s.to_string()));
        }
        let year: i32 = year
            .parse()
            .map_err(|_| SeriesError::InvalidMonth(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| SeriesError::InvalidMonth(s.to_string()))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = SeriesError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
