//! Data model for the forecasting service

mod forecast_result;
mod model_parameters;
mod series;
mod table;

pub use forecast_result::ForecastResult;
pub use model_parameters::{ModelParameters, Order, SeasonalOrder, DEFAULT_STEPS};
pub use series::Series;
pub use table::{Cell, Table};
