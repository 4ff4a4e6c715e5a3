//! Request-level error taxonomy
//!
//! Every failure path of the service ends in one of these variants. The
//! `Display` output of each is the message clients see.

use thiserror::Error;

use super::TsError;

/// Result type alias for request-level operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Hyperparameter validation failures.
///
/// Checks run in declaration order and stop at the first failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `order` or `seasonal_order` is absent
    #[error("missing required keys: parameters must include 'order' and 'seasonal_order'")]
    MissingKeys,

    /// `order` is not three non-negative integers
    #[error("invalid order: expected three non-negative integers (p, d, q)")]
    InvalidOrder,

    /// `seasonal_order` is not four elements, or P, D, Q are not non-negative integers
    #[error("invalid seasonal_order: expected four elements (P, D, Q, m) with non-negative integer P, D, Q")]
    InvalidSeasonalOrder,

    /// Seasonal period `m` is not a positive integer
    #[error("invalid seasonal period: m must be a positive integer")]
    InvalidSeasonalPeriod,

    /// `steps` is present but not a positive integer
    #[error("invalid steps: forecast horizon must be a positive integer")]
    InvalidSteps,
}

/// Malformed upload.
///
/// The parser diagnostic is kept for logging; clients only ever see
/// "invalid file format".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid file format")]
pub struct IngestionError {
    reason: String,
}

impl IngestionError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Underlying parser diagnostic
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Model fitting or forecasting failure, carrying the estimator diagnostic.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct FitError(String);

impl FitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<TsError> for FitError {
    fn from(err: TsError) -> Self {
        Self(err.to_string())
    }
}

/// Errors that can occur while serving a forecasting request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The upload request carried no file
    #[error("No file uploaded")]
    NoFile,

    /// The records lack the target column
    #[error("Missing '{0}' column in data")]
    MissingColumn(String),

    /// Hyperparameters failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Upload could not be parsed
    #[error(transparent)]
    Ingestion(#[from] IngestionError),

    /// The estimator failed
    #[error(transparent)]
    Fit(#[from] FitError),
}

impl ForecastError {
    /// Missing input or bad parameters; correctable by the caller.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ForecastError::Fit(_))
    }
}
