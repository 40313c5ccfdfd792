//! Emissions aggregation error types.
//!
//! These are caller bugs and fail fast. Dirty input data never surfaces
//! here; see [`RecordError`](crate::RecordError).

use chrono::NaiveDate;
use series_spi::SeriesError;
use thiserror::Error;

/// Errors returned for invalid calls into the aggregation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmissionsError {
    /// Date window whose end precedes its start
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Scope name that is not one of scope_1, scope_2, scope_3
    #[error("Unknown scope: {0}")]
    UnknownScope(String),

    /// Category name outside the fixed GHG Protocol category list
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Invalid month label or year
    #[error(transparent)]
    Series(#[from] SeriesError),
}

impl EmissionsError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for emissions aggregation operations.
pub type Result<T> = std::result::Result<T, EmissionsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_range_message() {
        let error = EmissionsError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: end 2024-01-01 is before start 2024-03-01"
        );
    }

    #[test]
    fn test_unknown_scope_message() {
        let error = EmissionsError::UnknownScope("scope_4".to_string());
        assert_eq!(error.to_string(), "Unknown scope: scope_4");
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let error = EmissionsError::invalid_parameter("limit", "must be positive");
        assert_eq!(error.to_string(), "Invalid parameter 'limit': must be positive");
    }

    #[test]
    fn test_series_error_is_transparent() {
        let error: EmissionsError = SeriesError::InvalidMonth("2024-13".to_string()).into();
        assert_eq!(error.to_string(), "Invalid month: 2024-13");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EmissionsError>();
    }
}
