//! SARIMA (Seasonal AutoRegressive Integrated Moving Average) model
//!
//! The model for a series `y` is
//!
//! ```text
//! phi(B) Phi(B^m) (1 - B)^d (1 - B^m)^D y_t = theta(B) Theta(B^m) e_t
//! ```
//!
//! with no trend term. Coefficients are estimated by minimizing the
//! conditional sum of squared one-step errors of the differenced series.
//! The search runs over unconstrained values mapped through the PACF
//! transform, so AR parts are always stationary and MA parts invertible.
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::sarima::Sarima;
//! use forecast_spi::{Order, Predictor, SeasonalOrder};
//!
//! let data: Vec<f64> = (1..=24).map(|x| x as f64).collect();
//! let mut model = Sarima::new(Order::new(1, 0, 0), SeasonalOrder::new(0, 0, 0, 12).unwrap()).unwrap();
//! model.fit(&data).unwrap();
//! assert_eq!(model.predict(3).unwrap().len(), 3);
//! ```

use forecast_spi::{Order, Predictor, SeasonalOrder, TsError, TsResult};
use std::collections::TryReserveError;

use super::diff::Differencing;
use super::polynomial::{
    ar_polynomial, constrain_invertible, constrain_stationary, ma_polynomial, multiply,
};
use crate::optimization::{nelder_mead, NelderMeadConfig};

/// Bound on each unconstrained parameter; keeps PACF values strictly inside (-1, 1)
const UNCONSTRAINED_LIMIT: f64 = 1e3;

/// Seasonal ARIMA model
#[derive(Debug, Clone)]
pub struct Sarima {
    order: Order,
    seasonal: SeasonalOrder,
    fitted: Option<FittedState>,
}

#[derive(Debug, Clone)]
struct FittedState {
    coefficients: Coefficients,
    /// Reduced-form AR lag weights `a_1..a_k` of `phi(B) Phi(B^m)`
    ar_lags: Vec<f64>,
    /// Reduced-form MA lag weights `b_1..b_k` of `theta(B) Theta(B^m)`
    ma_lags: Vec<f64>,
    differencing: Differencing,
    differenced: Vec<f64>,
    residuals: Vec<f64>,
    sigma2: f64,
    aic: f64,
    converged: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Coefficients {
    ar: Vec<f64>,
    seasonal_ar: Vec<f64>,
    ma: Vec<f64>,
    seasonal_ma: Vec<f64>,
}

impl Sarima {
    /// Create an unfitted model.
    ///
    /// Seasonal terms require a period greater than 1, and the lag span of
    /// the model must be representable.
    pub fn new(order: Order, seasonal: SeasonalOrder) -> TsResult<Self> {
        if seasonal.has_terms() && seasonal.period < 2 {
            return Err(TsError::InvalidParameter {
                name: "seasonal_order".to_string(),
                reason: "seasonal period must be greater than 1 when seasonal terms are used"
                    .to_string(),
            });
        }

        let model = Self {
            order,
            seasonal,
            fitted: None,
        };
        model.min_observations().ok_or_else(|| TsError::InvalidParameter {
            name: "seasonal_order".to_string(),
            reason: "seasonal lag span is too large".to_string(),
        })?;

        Ok(model)
    }

    /// Number of estimated coefficients
    pub fn num_params(&self) -> usize {
        self.order.p + self.order.q + self.seasonal.p + self.seasonal.q
    }

    /// Smallest series length `fit` accepts: differencing span, the longer of
    /// the AR and MA lag spans, and one observation per coefficient plus one.
    ///
    /// Lag weight vectors are sized by these spans, so a series shorter than
    /// either span is rejected before anything is allocated for it.
    pub fn min_observations(&self) -> Option<usize> {
        let m = self.seasonal.period;
        let diff_span = self.seasonal.d.checked_mul(m)?.checked_add(self.order.d)?;
        let ar_span = self.seasonal.p.checked_mul(m)?.checked_add(self.order.p)?;
        let ma_span = self.seasonal.q.checked_mul(m)?.checked_add(self.order.q)?;

        diff_span
            .checked_add(ar_span.max(ma_span))?
            .checked_add(self.num_params())?
            .checked_add(1)
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn seasonal_order(&self) -> SeasonalOrder {
        self.seasonal
    }

    pub fn ar_coefficients(&self) -> &[f64] {
        self.fitted.as_ref().map_or(&[][..], |f| f.coefficients.ar.as_slice())
    }

    pub fn seasonal_ar_coefficients(&self) -> &[f64] {
        self.fitted.as_ref().map_or(&[][..], |f| f.coefficients.seasonal_ar.as_slice())
    }

    pub fn ma_coefficients(&self) -> &[f64] {
        self.fitted.as_ref().map_or(&[][..], |f| f.coefficients.ma.as_slice())
    }

    pub fn seasonal_ma_coefficients(&self) -> &[f64] {
        self.fitted.as_ref().map_or(&[][..], |f| f.coefficients.seasonal_ma.as_slice())
    }

    /// Residual variance of the fit
    pub fn sigma2(&self) -> Option<f64> {
        self.fitted.as_ref().map(|f| f.sigma2)
    }

    /// Akaike information criterion of the fit (Gaussian conditional likelihood)
    pub fn aic(&self) -> Option<f64> {
        self.fitted.as_ref().map(|f| f.aic)
    }

    /// Whether the optimizer met its tolerance
    pub fn converged(&self) -> Option<bool> {
        self.fitted.as_ref().map(|f| f.converged)
    }

    fn coefficients_from(&self, unconstrained: &[f64]) -> Coefficients {
        let (p, sp, q) = (self.order.p, self.seasonal.p, self.order.q);
        let (ar, rest) = unconstrained.split_at(p);
        let (seasonal_ar, rest) = rest.split_at(sp);
        let (ma, seasonal_ma) = rest.split_at(q);

        Coefficients {
            ar: constrain_stationary(ar),
            seasonal_ar: constrain_stationary(seasonal_ar),
            ma: constrain_invertible(ma),
            seasonal_ma: constrain_invertible(seasonal_ma),
        }
    }

    fn lag_weights(&self, coefficients: &Coefficients) -> (Vec<f64>, Vec<f64>) {
        let m = self.seasonal.period;
        let ar = multiply(
            &ar_polynomial(&coefficients.ar, 1),
            &ar_polynomial(&coefficients.seasonal_ar, m),
        );
        let ma = multiply(
            &ma_polynomial(&coefficients.ma, 1),
            &ma_polynomial(&coefficients.seasonal_ma, m),
        );

        // Move AR terms to the right-hand side: w_t = sum a_i w_{t-i} + ...
        let ar_lags = ar.iter().skip(1).map(|c| -c).collect();
        let ma_lags = ma.into_iter().skip(1).collect();
        (ar_lags, ma_lags)
    }
}

/// One-step errors `e_t = w_t - sum a_i w_{t-i} - sum b_j e_{t-j}`,
/// conditioned on zero errors before the first full AR window.
fn conditional_residuals(series: &[f64], ar_lags: &[f64], ma_lags: &[f64]) -> Vec<f64> {
    let start = ar_lags.len();
    let mut residuals = vec![0.0; series.len()];

    for t in start..series.len() {
        let mut prediction = 0.0;
        for (i, a) in ar_lags.iter().enumerate() {
            prediction += a * series[t - 1 - i];
        }
        for (j, b) in ma_lags.iter().enumerate().take(t) {
            prediction += b * residuals[t - 1 - j];
        }
        residuals[t] = series[t] - prediction;
    }

    residuals
}

fn sum_of_squares(residuals: &[f64], start: usize) -> f64 {
    residuals.iter().skip(start).map(|e| e * e).sum()
}

impl Predictor for Sarima {
    fn fit(&mut self, data: &[f64]) -> TsResult<()> {
        let required = self.min_observations().ok_or_else(|| TsError::InvalidParameter {
            name: "seasonal_order".to_string(),
            reason: "seasonal lag span is too large".to_string(),
        })?;
        if data.len() < required {
            return Err(TsError::InsufficientData {
                required,
                actual: data.len(),
            });
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(TsError::InvalidData(
                "Data contains NaN or infinite values".to_string(),
            ));
        }

        let (differencing, differenced) = Differencing::apply(
            data,
            self.order.d,
            self.seasonal.d,
            self.seasonal.period,
        );
        let start = self.order.p + self.seasonal.p * self.seasonal.period;

        let objective = |x: &[f64]| {
            let (ar_lags, ma_lags) = self.lag_weights(&self.coefficients_from(x));
            sum_of_squares(
                &conditional_residuals(&differenced, &ar_lags, &ma_lags),
                start,
            )
        };
        let k = self.num_params();
        let bounds = vec![(-UNCONSTRAINED_LIMIT, UNCONSTRAINED_LIMIT); k];
        let minimum = nelder_mead(
            objective,
            &vec![0.0; k],
            Some(bounds.as_slice()),
            &NelderMeadConfig::default(),
        );

        if !minimum.value.is_finite() {
            return Err(TsError::NumericalError(format!(
                "conditional sum of squares is not finite ({})",
                minimum.value
            )));
        }
        if !minimum.converged {
            tracing::warn!(
                iterations = minimum.iterations,
                "SARIMA optimizer stopped before convergence; using best estimate"
            );
        }

        let coefficients = self.coefficients_from(&minimum.point);
        let (ar_lags, ma_lags) = self.lag_weights(&coefficients);
        let residuals = conditional_residuals(&differenced, &ar_lags, &ma_lags);

        let n_eff = (differenced.len() - start) as f64;
        let sigma2 = minimum.value / n_eff;
        let log_likelihood =
            -0.5 * n_eff * (1.0 + sigma2.ln() + (2.0 * std::f64::consts::PI).ln());
        let aic = -2.0 * log_likelihood + 2.0 * (self.num_params() + 1) as f64;

        tracing::debug!(
            order = ?self.order,
            seasonal_order = ?self.seasonal,
            observations = data.len(),
            iterations = minimum.iterations,
            sigma2,
            "fitted SARIMA model"
        );

        self.fitted = Some(FittedState {
            coefficients,
            ar_lags,
            ma_lags,
            differencing,
            differenced,
            residuals,
            sigma2,
            aic,
            converged: minimum.converged,
        });
        Ok(())
    }

    fn predict(&self, steps: usize) -> TsResult<Vec<f64>> {
        let state = self.fitted.as_ref().ok_or(TsError::NotFitted)?;

        if steps == 0 {
            return Ok(Vec::new());
        }

        let n = state.differenced.len();
        let mut extended = state.differenced.clone();
        let mut errors = state.residuals.clone();
        extended
            .try_reserve_exact(steps)
            .and_then(|_| errors.try_reserve_exact(steps))
            .map_err(|err| horizon_too_large(steps, err))?;

        for _ in 0..steps {
            let t = extended.len();
            let mut forecast = 0.0;
            for (i, a) in state.ar_lags.iter().enumerate() {
                forecast += a * extended[t - 1 - i];
            }
            for (j, b) in state.ma_lags.iter().enumerate().take(t) {
                forecast += b * errors[t - 1 - j];
            }
            extended.push(forecast);
            // Future shocks have zero expectation
            errors.push(0.0);
        }

        let forecasts = state
            .differencing
            .integrate(&extended[n..])
            .map_err(|err| horizon_too_large(steps, err))?;
        if forecasts.iter().any(|v| !v.is_finite()) {
            return Err(TsError::NumericalError(
                "forecast produced non-finite values".to_string(),
            ));
        }
        Ok(forecasts)
    }

    fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }
}

fn horizon_too_large(steps: usize, err: TryReserveError) -> TsError {
    TsError::InvalidParameter {
        name: "steps".to_string(),
        reason: format!("cannot allocate a forecast horizon of {steps}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seasonal(p: usize, d: usize, q: usize, m: usize) -> SeasonalOrder {
        SeasonalOrder::new(p, d, q, m).unwrap()
    }

    fn ar1_series(phi: f64, n: usize) -> Vec<f64> {
        // Fixed-seed LCG noise, uniform on [-0.5, 0.5)
        let mut state: u64 = 42;
        let mut y = vec![0.0];
        for t in 1..n {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let shock = (state >> 11) as f64 / (1u64 << 53) as f64 - 0.5;
            y.push(phi * y[t - 1] + shock);
        }
        y
    }

    #[test]
    fn test_creation() {
        assert!(Sarima::new(Order::new(1, 1, 1), seasonal(1, 1, 1, 12)).is_ok());
        assert!(Sarima::new(Order::new(1, 0, 0), SeasonalOrder::none()).is_ok());
    }

    #[test]
    fn test_seasonal_terms_need_period_above_one() {
        let err = Sarima::new(Order::new(1, 0, 0), seasonal(1, 0, 0, 1)).unwrap_err();
        assert!(matches!(err, TsError::InvalidParameter { .. }));
    }

    #[test]
    fn test_overflowing_lag_span_rejected() {
        let result = Sarima::new(Order::new(0, 0, 0), seasonal(2, 0, 0, usize::MAX));
        assert!(result.is_err());
    }

    #[test]
    fn test_min_observations() {
        let model = Sarima::new(Order::new(1, 1, 1), seasonal(1, 1, 1, 12)).unwrap();
        // diff 13 + ar span 13 + 4 params + 1
        assert_eq!(model.min_observations(), Some(31));
    }

    #[test]
    fn test_min_observations_covers_seasonal_ma_span() {
        let model = Sarima::new(Order::new(0, 0, 1), seasonal(0, 0, 2, 12)).unwrap();
        // ma span 25 + 3 params + 1
        assert_eq!(model.min_observations(), Some(29));
    }

    #[test]
    fn test_huge_seasonal_ma_span_is_insufficient_data() {
        let data: Vec<f64> = (1..=24).map(|x| x as f64).collect();
        let mut model =
            Sarima::new(Order::new(0, 0, 0), seasonal(0, 0, 1, 1_000_000_000_000)).unwrap();

        let err = model.fit(&data).unwrap_err();
        assert!(matches!(err, TsError::InsufficientData { actual: 24, .. }));
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_predict_before_fit() {
        let model = Sarima::new(Order::new(1, 0, 0), SeasonalOrder::none()).unwrap();
        assert!(!model.is_fitted());
        assert_eq!(model.predict(3), Err(TsError::NotFitted));
    }

    #[test]
    fn test_insufficient_data() {
        let mut model = Sarima::new(Order::new(1, 0, 0), seasonal(1, 1, 0, 12)).unwrap();
        let err = model.fit(&[1.0; 10]).unwrap_err();
        assert!(matches!(err, TsError::InsufficientData { actual: 10, .. }));
    }

    #[test]
    fn test_rejects_non_finite_data() {
        let mut model = Sarima::new(Order::new(1, 0, 0), SeasonalOrder::none()).unwrap();
        let mut data: Vec<f64> = (0..20).map(|x| x as f64).collect();
        data[5] = f64::NAN;
        assert!(matches!(model.fit(&data), Err(TsError::InvalidData(_))));
    }

    #[test]
    fn test_recovers_ar1_coefficient() {
        let data = ar1_series(0.7, 400);
        let mut model = Sarima::new(Order::new(1, 0, 0), SeasonalOrder::none()).unwrap();
        model.fit(&data).unwrap();

        let phi = model.ar_coefficients()[0];
        assert!((phi - 0.7).abs() < 0.1, "phi = {phi}");
        assert!(model.sigma2().unwrap() > 0.0);
        assert!(model.aic().unwrap().is_finite());
    }

    #[test]
    fn test_ar1_forecast_decays_towards_zero() {
        let data = ar1_series(0.7, 200);
        let mut model = Sarima::new(Order::new(1, 0, 0), SeasonalOrder::none()).unwrap();
        model.fit(&data).unwrap();

        let forecast = model.predict(30).unwrap();
        assert_eq!(forecast.len(), 30);
        assert!(forecast[29].abs() < forecast[0].abs().max(1e-3));
    }

    #[test]
    fn test_coefficients_stay_stationary_and_invertible() {
        let data: Vec<f64> = (1..=60).map(|x| x as f64 * 1.5).collect();
        let mut model = Sarima::new(Order::new(1, 0, 1), SeasonalOrder::none()).unwrap();
        model.fit(&data).unwrap();

        assert!(model.ar_coefficients()[0].abs() < 1.0);
        assert!(model.ma_coefficients()[0].abs() < 1.0);
    }

    #[test]
    fn test_seasonal_random_walk_repeats_last_season() {
        let pattern = [10.0, 14.0, 9.0, 20.0, 15.0, 11.0];
        let data: Vec<f64> = pattern.iter().cycle().take(36).copied().collect();
        let mut model = Sarima::new(Order::new(0, 0, 0), seasonal(0, 1, 0, 6)).unwrap();
        model.fit(&data).unwrap();

        let forecast = model.predict(8).unwrap();
        assert_eq!(forecast, vec![10.0, 14.0, 9.0, 20.0, 15.0, 11.0, 10.0, 14.0]);
    }

    #[test]
    fn test_double_difference_extends_linear_trend() {
        let data: Vec<f64> = (0..30).map(|x| 3.0 * x as f64 + 2.0).collect();
        let mut model = Sarima::new(Order::new(0, 2, 0), SeasonalOrder::none()).unwrap();
        model.fit(&data).unwrap();

        let forecast = model.predict(3).unwrap();
        assert_eq!(forecast, vec![92.0, 95.0, 98.0]);
    }

    #[test]
    fn test_seasonal_ar_fit() {
        let data: Vec<f64> = (0..72)
            .map(|t| 50.0 + 10.0 * (t as f64 * std::f64::consts::PI / 6.0).sin())
            .collect();
        let mut model = Sarima::new(Order::new(1, 0, 0), seasonal(1, 0, 0, 12)).unwrap();
        model.fit(&data).unwrap();

        assert_eq!(model.seasonal_ar_coefficients().len(), 1);
        let forecast = model.predict(12).unwrap();
        assert_eq!(forecast.len(), 12);
        assert!(forecast.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_zero_steps() {
        let data: Vec<f64> = (1..=24).map(|x| x as f64).collect();
        let mut model = Sarima::new(Order::new(1, 0, 0), SeasonalOrder::none()).unwrap();
        model.fit(&data).unwrap();
        assert!(model.predict(0).unwrap().is_empty());
    }

    #[test]
    fn test_unallocatable_horizon_is_an_error() {
        let data: Vec<f64> = (1..=24).map(|x| x as f64).collect();
        let mut model = Sarima::new(Order::new(1, 0, 0), SeasonalOrder::none()).unwrap();
        model.fit(&data).unwrap();

        let err = model.predict(usize::MAX).unwrap_err();
        assert!(matches!(err, TsError::InvalidParameter { ref name, .. } if name == "steps"));
        // The fitted model is still usable
        assert_eq!(model.predict(2).unwrap().len(), 2);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let data: Vec<f64> = (1..=48)
            .map(|x| x as f64 + (x as f64 * 0.5).sin() * 3.0)
            .collect();
        let run = || {
            let mut model = Sarima::new(Order::new(1, 1, 1), seasonal(0, 0, 1, 12)).unwrap();
            model.fit(&data).unwrap();
            model.predict(6).unwrap()
        };
        assert_eq!(run(), run());
    }
}
