//! Contract module containing the capabilities the service is composed from
//!
//! - [`ParamValidator`]: boundary validation of hyperparameters
//! - [`Forecaster`]: fit-and-forecast orchestration
//! - [`Predictor`]: fit/predict interface of an estimator

mod forecaster;
mod param_validator;
mod predictor;

pub use forecaster::Forecaster;
pub use param_validator::ParamValidator;
pub use predictor::Predictor;
