//! Estimator error types

use thiserror::Error;

/// Result type alias for estimator operations
pub type TsResult<T> = std::result::Result<T, TsError>;

/// Errors raised by time series estimators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TsError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before forecasting")]
    NotFitted,

    /// Non-finite objective or forecast
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Series unusable for fitting
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = TsError::InsufficientData {
            required: 14,
            actual: 5,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 14 observations, got 5"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = TsError::InvalidParameter {
            name: "m".to_string(),
            reason: "seasonal period must be greater than 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'm': seasonal period must be greater than 1"
        );
    }

    #[test]
    fn test_not_fitted_display() {
        assert_eq!(
            TsError::NotFitted.to_string(),
            "Model must be fitted before forecasting"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(
            TsError::NumericalError("x".into()),
            TsError::NumericalError("x".into())
        );
        assert_ne!(TsError::NotFitted, TsError::InvalidData("x".into()));
    }
}
