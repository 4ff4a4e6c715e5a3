//! Forecast output

use serde::Serialize;

/// Predicted values, one per future time step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ForecastResult(Vec<f64>);

impl ForecastResult {
    pub fn new(predictions: Vec<f64>) -> Self {
        Self(predictions)
    }

    pub fn predictions(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}
