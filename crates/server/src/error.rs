//! HTTP mapping of service errors
//!
//! | failure | status | `error` message |
//! |---|---|---|
//! | missing file or `value` column | 400 | the error itself |
//! | parameter validation | 400 | `Parameter validation error: <msg>` |
//! | malformed upload | 400 | `invalid file format` |
//! | undecodable JSON body | 400 (413 when oversized) | `Invalid request body: <msg>` |
//! | fitting, or anything else | 500 | `Prediction failed: <msg>` |

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use forecast_facade::{ErrorResponse, ForecastError};
use thiserror::Error;

/// Error returned by request handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error("Invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },

    /// The forecasting task did not complete
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Status code and client-facing message
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Forecast(ForecastError::Validation(err)) => (
                StatusCode::BAD_REQUEST,
                format!("Parameter validation error: {err}"),
            ),
            ApiError::Forecast(ForecastError::Fit(err)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Prediction failed: {err}"),
            ),
            ApiError::Forecast(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::InvalidBody { status, .. } => (*status, self.to_string()),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Prediction failed: {msg}"),
            ),
        }
    }
}

/// Oversized bodies keep 413; every other undecodable body is a 400
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        ApiError::InvalidBody {
            status,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(%status, error = %message, "request failed");
        } else {
            tracing::debug!(%status, error = %message, "request rejected");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
