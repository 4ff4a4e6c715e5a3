//! Boundary validation of model hyperparameters

use serde_json::Value;

use crate::error::ValidationError;
use crate::model::ModelParameters;

/// Turns a loosely typed parameter object into [`ModelParameters`].
///
/// Implementations are pure: no side effects, no coercion of ill-typed
/// values. Returning `Ok` is the only way to obtain parameters from
/// untrusted input.
pub trait ParamValidator: Send + Sync {
    fn validate(&self, params: &Value) -> Result<ModelParameters, ValidationError>;
}
