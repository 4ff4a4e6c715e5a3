//! API route handlers

use crate::error::ApiError;
use crate::AppState;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use forecast_facade::{
    ingest, series_from_records, ForecastError, IngestionError, PredictRequest, PredictResponse,
    UploadResponse, VALUE_COLUMN,
};
use std::sync::Arc;

/// Multipart field carrying the uploaded CSV
pub const FILE_FIELD: &str = "file";

/// `POST /upload`: parse an uploaded CSV and echo it back column-oriented
pub async fn upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(%rejection, "upload without multipart body");
        ForecastError::NoFile
    })?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(ForecastError::NoFile.into());
        }

        let bytes = field.bytes().await.map_err(multipart_error)?;
        let table = ingest(&bytes).map_err(ForecastError::from)?;

        tracing::info!(
            file = %filename,
            rows = table.num_rows(),
            columns = table.columns().len(),
            "file uploaded"
        );
        return Ok(Json(UploadResponse::new(table)));
    }

    Err(ForecastError::NoFile.into())
}

/// Oversized uploads keep 413; any other broken multipart stream is a format error
fn multipart_error(err: MultipartError) -> ApiError {
    match err.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::InvalidBody {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: err.body_text(),
        },
        _ => ForecastError::from(IngestionError::new(err.body_text())).into(),
    }
}

/// `POST /predict`: decode records, validate hyperparameters, fit and forecast
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload?;

    let decoded = series_from_records(&request.data, VALUE_COLUMN)?;
    let params = state
        .validator
        .validate(&request.params)
        .map_err(ForecastError::from)?;

    tracing::info!(
        observations = decoded.series.len(),
        dropped = decoded.dropped,
        steps = params.steps(),
        "forecast requested"
    );

    let forecaster = Arc::clone(&state.forecaster);
    let result = tokio::task::spawn_blocking(move || forecaster.forecast(&decoded.series, &params))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?
        .map_err(ForecastError::from)?;

    Ok(Json(result.into()))
}

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
