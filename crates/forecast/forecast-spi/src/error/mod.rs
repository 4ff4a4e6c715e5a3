//! Error types for forecasting operations
//!
//! - [`ForecastError`]: umbrella taxonomy surfaced to request handlers
//! - [`ValidationError`], [`IngestionError`], [`FitError`]: per-stage failures
//! - [`TsError`]: estimator-level failures raised while fitting a model

mod forecast_error;
mod ts_error;

pub use forecast_error::{FitError, ForecastError, IngestionError, Result, ValidationError};
pub use ts_error::{TsError, TsResult};
