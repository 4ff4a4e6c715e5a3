//! Forecast Consumer API
//!
//! Request and response bodies of the HTTP surface.
//!
//! - [`PredictRequest`] / [`PredictResponse`]: `POST /predict`
//! - [`UploadResponse`]: `POST /upload`
//! - [`ErrorResponse`]: body of every failed request

use forecast_spi::{ForecastResult, Table};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Re-export the SPI types the wire types carry
pub use forecast_spi::{ForecastError, ModelParameters, Series};

/// Confirmation sent with a successfully parsed upload
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully!";

/// Name of the column holding the observations in a predict request
pub const VALUE_COLUMN: &str = "value";

/// Body of `POST /predict`
///
/// `data` is a list of records (column name to cell). `params` stays
/// loosely typed until the validator turns it into [`ModelParameters`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub data: Vec<Map<String, Value>>,
    #[serde(default)]
    pub params: Value,
}

/// Successful `POST /predict` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predictions: Vec<f64>,
}

impl From<ForecastResult> for PredictResponse {
    fn from(result: ForecastResult) -> Self {
        Self {
            predictions: result.into_inner(),
        }
    }
}

/// Successful `POST /upload` response
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub data: Table,
}

impl UploadResponse {
    pub fn new(data: Table) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}

/// Error body: every failure path carries an `error` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_spi::Cell;
    use serde_json::json;

    #[test]
    fn test_predict_request_decodes() {
        let req: PredictRequest = serde_json::from_value(json!({
            "data": [{"value": "1"}, {"value": 2}],
            "params": {"order": [1, 0, 0], "seasonal_order": [0, 0, 0, 12], "steps": 3}
        }))
        .unwrap();

        assert_eq!(req.data.len(), 2);
        assert_eq!(req.params["steps"], json!(3));
    }

    #[test]
    fn test_predict_request_fields_default() {
        let req: PredictRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.data.is_empty());
        assert!(req.params.is_null());
    }

    #[test]
    fn test_predict_request_rejects_non_record_rows() {
        let result: Result<PredictRequest, _> =
            serde_json::from_value(json!({"data": [1, 2, 3], "params": {}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_upload_response_shape() {
        let table = Table::new(vec!["value".into()], vec![vec![Cell::Integer(7)]]).unwrap();
        let body = serde_json::to_value(UploadResponse::new(table)).unwrap();
        assert_eq!(
            body,
            json!({"message": "File uploaded successfully!", "data": {"value": {"0": 7}}})
        );
    }

    #[test]
    fn test_predict_response_from_result() {
        let response = PredictResponse::from(ForecastResult::new(vec![1.0, 2.0]));
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"predictions": [1.0, 2.0]})
        );
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::new("No file uploaded")).unwrap();
        assert_eq!(body, json!({"error": "No file uploaded"}));
    }
}
