//! Predictor trait for time series estimators

use crate::error::TsResult;

/// Common trait for time series estimators
///
/// Follows the fit-predict pattern of statistical libraries.
///
/// # Example
///
/// ```rust,ignore
/// use forecast_spi::Predictor;
///
/// fn forecast<P: Predictor>(model: &mut P, data: &[f64], horizon: usize) -> forecast_spi::TsResult<Vec<f64>> {
///     model.fit(data)?;
///     model.predict(horizon)
/// }
/// ```
pub trait Predictor {
    /// Fit the model to historical data
    fn fit(&mut self, data: &[f64]) -> TsResult<()>;

    /// Predict `steps` future values
    fn predict(&self, steps: usize) -> TsResult<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
