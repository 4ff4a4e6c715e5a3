//! Forecast Service Provider Interface
//!
//! Defines the contracts, error taxonomy and data model shared by the
//! SARIMA forecasting service:
//!
//! - [`ParamValidator`]: turns loosely typed parameters into [`ModelParameters`]
//! - [`Forecaster`]: fits a model to a [`Series`] and produces a [`ForecastResult`]
//! - [`Predictor`]: fit/predict interface implemented by estimators
//! - [`ForecastError`]: request-level error taxonomy

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Forecaster, ParamValidator, Predictor};
pub use error::{
    FitError, ForecastError, IngestionError, Result, TsError, TsResult, ValidationError,
};
pub use model::{
    Cell, ForecastResult, ModelParameters, Order, SeasonalOrder, Series, Table, DEFAULT_STEPS,
};
