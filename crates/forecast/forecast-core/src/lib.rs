//! Forecast Core Implementations
//!
//! - [`validation`]: hyperparameter validation ([`ParameterValidator`])
//! - [`ingestion`]: CSV upload parsing
//! - [`records`]: JSON records to numeric series
//! - [`sarima`]: seasonal ARIMA estimator
//! - [`orchestrator`]: fit-and-forecast ([`SarimaForecaster`])
//! - [`optimization`]: Nelder-Mead minimizer used by the estimator
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::prelude::*;
//! use serde_json::json;
//!
//! let params = ParameterValidator::new()
//!     .validate(&json!({"order": [1, 0, 0], "seasonal_order": [0, 0, 0, 12], "steps": 3}))
//!     .unwrap();
//! let series: Series = (1..=24).map(|x| x as f64).collect();
//! let forecast = SarimaForecaster::new().forecast(&series, &params).unwrap();
//! assert_eq!(forecast.len(), 3);
//! ```

pub mod ingestion;
pub mod optimization;
pub mod orchestrator;
pub mod records;
pub mod sarima;
pub mod validation;

// Re-export from SPI
pub use forecast_spi::{
    Cell, FitError, ForecastError, ForecastResult, Forecaster, IngestionError, ModelParameters,
    Order, ParamValidator, Predictor, Result, SeasonalOrder, Series, Table, TsError, TsResult,
    ValidationError, DEFAULT_STEPS,
};

// Re-export implementations for convenience
pub use ingestion::ingest;
pub use orchestrator::SarimaForecaster;
pub use records::{series_from_records, DecodedSeries};
pub use sarima::Sarima;
pub use validation::{validate_params, ParameterValidator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ingestion::ingest;
    pub use crate::orchestrator::SarimaForecaster;
    pub use crate::records::series_from_records;
    pub use crate::sarima::Sarima;
    pub use crate::validation::ParameterValidator;
    pub use forecast_spi::{
        ForecastError, ForecastResult, Forecaster, ModelParameters, Order, ParamValidator,
        Predictor, SeasonalOrder, Series,
    };
}
