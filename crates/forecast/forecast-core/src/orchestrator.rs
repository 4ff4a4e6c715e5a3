//! Forecast orchestration
//!
//! One fit attempt per call: build the SARIMA specification from validated
//! parameters, fit it to the series, forecast `steps` values.

use forecast_spi::{FitError, ForecastResult, Forecaster, ModelParameters, Predictor, Series};

use crate::sarima::Sarima;

/// [`Forecaster`] backed by the [`Sarima`] estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct SarimaForecaster;

impl SarimaForecaster {
    pub fn new() -> Self {
        Self
    }
}

impl Forecaster for SarimaForecaster {
    fn forecast(
        &self,
        series: &Series,
        params: &ModelParameters,
    ) -> Result<ForecastResult, FitError> {
        let mut model = Sarima::new(params.order(), params.seasonal_order())?;

        model.fit(series.values())?;
        tracing::info!(
            order = ?params.order(),
            seasonal_order = ?params.seasonal_order(),
            converged = model.converged().unwrap_or(false),
            sigma2 = model.sigma2().unwrap_or(f64::NAN),
            aic = model.aic().unwrap_or(f64::NAN),
            "model fitted"
        );

        let predictions = model.predict(params.steps())?;
        Ok(ForecastResult::new(predictions))
    }
}
