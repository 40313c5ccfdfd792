//! Forecast error types

use thiserror::Error;

/// Errors raised by forecast configuration and by the fitting primitives.
///
/// The top-level forecasters never return these for short or degenerate
/// series; they fall back to a flat projection instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Too few points for a fitting primitive
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid configuration value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl ForecastError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_insufficient_data_error_message() {
        let error = ForecastError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 2 points, got 1"
        );
    }

    #[test]
    fn test_invalid_parameter_error_message() {
        let error = ForecastError::invalid_parameter("confidenceLevel", "must be in (0, 1)");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'confidenceLevel': must be in (0, 1)"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error + Send + Sync> =
            Box::new(ForecastError::invalid_parameter("fallbackWindow", "must be at least 1"));
        assert!(error.source().is_none());
        assert!(error.downcast_ref::<ForecastError>().is_some());
    }
}
