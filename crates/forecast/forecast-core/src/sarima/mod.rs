//! Seasonal ARIMA estimation
//!
//! - [`Sarima`]: SARIMA(p, d, q)(P, D, Q, m) fitted by conditional sum of squares
//! - [`Differencing`]: regular and seasonal differencing with integration

pub mod diff;
pub mod model;
pub mod polynomial;

pub use diff::Differencing;
pub use model::Sarima;
