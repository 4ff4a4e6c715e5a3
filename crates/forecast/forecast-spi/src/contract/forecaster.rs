//! Fit-and-forecast orchestration

use crate::error::FitError;
use crate::model::{ForecastResult, ModelParameters, Series};

/// Fits a model to a series and produces `params.steps()` forecasts.
///
/// Parameters are trusted as already validated. A single fit attempt is
/// made per call; any estimator failure is returned as [`FitError`].
pub trait Forecaster: Send + Sync {
    fn forecast(&self, series: &Series, params: &ModelParameters)
        -> Result<ForecastResult, FitError>;
}
