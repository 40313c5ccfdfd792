//! Inclusive reporting date window.

use chrono::NaiveDate;
use serde::Serialize;
use series_spi::YearMonth;

use crate::error::{EmissionsError, Result};

/// Inclusive `[start, end]` calendar window an aggregation runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Create a window; an end before the start is a caller bug.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(EmissionsError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// January 1st through December 31st of `year`.
    pub fn year(year: i32) -> Result<Self> {
        let first = YearMonth::new(year, 1)?;
        let last = YearMonth::new(year, 12)?;
        Self::new(first.first_day(), last.last_day())
    }

    /// The whole of one calendar month.
    pub fn month(month: YearMonth) -> Self {
        Self {
            start: month.first_day(),
            end: month.last_day(),
        }
    }

    /// First day of `first` through last day of `last`.
    pub fn months(first: YearMonth, last: YearMonth) -> Result<Self> {
        Self::new(first.first_day(), last.last_day())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the inclusive period `[from, to]` overlaps this window.
    pub fn intersects(&self, from: NaiveDate, to: NaiveDate) -> bool {
        from <= self.end && to >= self.start
    }

    /// Calendar months touched by the window, in order.
    pub fn calendar_months(&self) -> impl Iterator<Item = YearMonth> {
        YearMonth::from_date(self.start).through(YearMonth::from_date(self.end))
    }
}
