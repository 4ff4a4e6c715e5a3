//! Differencing and integration

use std::collections::TryReserveError;

/// Records each differencing stage so forecasts can be integrated back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Differencing {
    stages: Vec<Stage>,
}

#[derive(Debug, Clone, PartialEq)]
struct Stage {
    lag: usize,
    /// Series as it was before this stage was applied
    history: Vec<f64>,
}

impl Differencing {
    /// Apply `d` lag-1 differences, then `seasonal_d` lag-`period` differences.
    ///
    /// Returns the recorded stages and the differenced series. A stage whose
    /// lag reaches the series length leaves an empty series.
    pub fn apply(data: &[f64], d: usize, seasonal_d: usize, period: usize) -> (Self, Vec<f64>) {
        let lags = std::iter::repeat(1)
            .take(d)
            .chain(std::iter::repeat(period).take(seasonal_d));

        let mut stages = Vec::with_capacity(d + seasonal_d);
        let mut current = data.to_vec();
        for lag in lags {
            let next = difference(&current, lag);
            stages.push(Stage {
                lag,
                history: current,
            });
            current = next;
        }

        (Self { stages }, current)
    }

    /// Number of observations consumed by differencing
    pub fn span(&self) -> usize {
        self.stages.iter().map(|s| s.lag).sum()
    }

    /// Undo every stage for values that continue the differenced series.
    ///
    /// Fails only when the integrated horizon cannot be allocated.
    pub fn integrate(&self, forecasts: &[f64]) -> Result<Vec<f64>, TryReserveError> {
        let mut current = Vec::new();
        current.try_reserve_exact(forecasts.len())?;
        current.extend_from_slice(forecasts);

        for stage in self.stages.iter().rev() {
            let history = &stage.history;
            let lag = stage.lag;
            let mut level: Vec<f64> = Vec::new();
            level.try_reserve_exact(current.len())?;

            for (h, change) in current.iter().enumerate() {
                let base = if h < lag {
                    history[history.len() + h - lag]
                } else {
                    level[h - lag]
                };
                level.push(base + change);
            }
            current = level;
        }

        Ok(current)
    }
}

/// `x_t - x_{t-lag}`
pub fn difference(data: &[f64], lag: usize) -> Vec<f64> {
    if lag == 0 || data.len() <= lag {
        return Vec::new();
    }
    data.iter()
        .skip(lag)
        .zip(data)
        .map(|(current, previous)| current - previous)
        .collect()
}
