//! Data-quality errors for individual metric records.

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{Category, Scope};

/// Why a single record was rejected during sanitization.
///
/// Rejected records are skipped and counted, never propagated to callers
/// of an aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid CO2e emissions: {0}")]
    InvalidEmissions(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Period ends {end} before it starts {start}")]
    InvertedPeriod { start: NaiveDate, end: NaiveDate },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown scope: {0}")]
    UnknownScope(String),

    #[error("Category {category} belongs to {}, record says {scope}", category.scope())]
    ScopeMismatch { category: Category, scope: Scope },
}
