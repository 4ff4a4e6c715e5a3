//! Forecast Facade
//!
//! High-level API for the SARIMA forecasting stack. Re-exports the public
//! types of the SPI, API and core crates.
//!
//! # Example
//!
//! ```rust
//! use forecast_facade::prelude::*;
//!
//! let series: Series = (1..=24).map(|x| x as f64).collect();
//! let params = ModelParameters::new(
//!     Order::new(1, 0, 0),
//!     SeasonalOrder::new(0, 0, 0, 12).unwrap(),
//!     3,
//! )
//! .unwrap();
//! let forecast = SarimaForecaster::new().forecast(&series, &params).unwrap();
//! assert_eq!(forecast.len(), 3);
//! ```

// Re-export everything from core (includes implementations)
pub use forecast_core::*;

// Wire types
pub use forecast_api::{
    ErrorResponse, PredictRequest, PredictResponse, UploadResponse, UPLOAD_SUCCESS_MESSAGE,
    VALUE_COLUMN,
};

// Explicit re-exports for documentation
pub use forecast_core::prelude;
