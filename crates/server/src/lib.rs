//! # forecast-server
//!
//! HTTP service for SARIMA forecasting.
//!
//! | route | method | purpose |
//! |---|---|---|
//! | `/upload` | POST | parse a multipart CSV upload (`file` field) |
//! | `/predict` | POST | fit a SARIMA model on `data` and forecast |
//! | `/health`, `/health/live` | GET | liveness |

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use forecast_facade::{Forecaster, ParamValidator, ParameterValidator, SarimaForecaster};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<dyn ParamValidator>,
    pub forecaster: Arc<dyn Forecaster>,
}

impl AppState {
    pub fn new(validator: Arc<dyn ParamValidator>, forecaster: Arc<dyn Forecaster>) -> Self {
        Self {
            validator,
            forecaster,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(ParameterValidator::new()),
            Arc::new(SarimaForecaster::new()),
        )
    }
}

/// Build the router with middleware
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health/live", get(routes::liveness))
        .route("/health", get(routes::liveness))
        .route("/upload", post(routes::upload))
        .route("/predict", post(routes::predict))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
