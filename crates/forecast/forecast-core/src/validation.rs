//! Hyperparameter validation
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. `order` and `seasonal_order` are both present
//! 2. `order` is exactly three non-negative integers
//! 3. `seasonal_order` is exactly four elements, the first three non-negative integers
//! 4. the seasonal period (fourth element) is an integer of at least 1
//! 5. `steps`, when given, is an integer of at least 1
//!
//! Only JSON integers count as integers: `1.0`, `true` and `"1"` are rejected.

use forecast_spi::{
    ModelParameters, Order, ParamValidator, SeasonalOrder, ValidationError, DEFAULT_STEPS,
};
use serde_json::Value;

/// Default [`ParamValidator`] implementing the checks above
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterValidator;

impl ParameterValidator {
    pub fn new() -> Self {
        Self
    }
}

impl ParamValidator for ParameterValidator {
    fn validate(&self, params: &Value) -> Result<ModelParameters, ValidationError> {
        validate_params(params)
    }
}

/// Validate a parameter object and return the typed parameters.
pub fn validate_params(params: &Value) -> Result<ModelParameters, ValidationError> {
    let (order, seasonal_order) = match (params.get("order"), params.get("seasonal_order")) {
        (Some(order), Some(seasonal_order)) => (order, seasonal_order),
        _ => return Err(ValidationError::MissingKeys),
    };

    let order = parse_order(order)?;
    let seasonal_order = parse_seasonal_order(seasonal_order)?;
    let steps = parse_steps(params.get("steps"))?;

    ModelParameters::new(order, seasonal_order, steps)
}

fn parse_order(value: &Value) -> Result<Order, ValidationError> {
    let elements = fixed_array(value, 3).ok_or(ValidationError::InvalidOrder)?;
    let orders = non_negative_ints(elements).ok_or(ValidationError::InvalidOrder)?;
    Ok(Order::new(orders[0], orders[1], orders[2]))
}

fn parse_seasonal_order(value: &Value) -> Result<SeasonalOrder, ValidationError> {
    let elements = fixed_array(value, 4).ok_or(ValidationError::InvalidSeasonalOrder)?;
    let orders = non_negative_ints(&elements[..3]).ok_or(ValidationError::InvalidSeasonalOrder)?;

    let period = as_non_negative_int(&elements[3])
        .filter(|&m| m >= 1)
        .ok_or(ValidationError::InvalidSeasonalPeriod)?;

    SeasonalOrder::new(orders[0], orders[1], orders[2], period)
}

fn parse_steps(value: Option<&Value>) -> Result<usize, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(DEFAULT_STEPS),
        Some(v) => as_non_negative_int(v)
            .filter(|&steps| steps >= 1)
            .ok_or(ValidationError::InvalidSteps),
    }
}

fn fixed_array(value: &Value, len: usize) -> Option<&[Value]> {
    value
        .as_array()
        .filter(|elements| elements.len() == len)
        .map(Vec::as_slice)
}

fn non_negative_ints(values: &[Value]) -> Option<Vec<usize>> {
    values.iter().map(as_non_negative_int).collect()
}

/// `Some` only for JSON integers >= 0 that fit in `usize`
fn as_non_negative_int(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|v| usize::try_from(v).ok())
}
