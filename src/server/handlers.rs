//! HTTP request handlers for API endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;

/// Health check endpoint
///
/// Returns a simple status response to verify the server is running
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

/// Response for transform listing
#[derive(Debug, Serialize)]
pub struct TransformsResponse {
    pub transforms: Vec<TransformInfo>,
}

/// Information about a registered transform
#[derive(Debug, Serialize)]
pub struct TransformInfo {
    pub name: String,
    pub symbol: String,
    pub arity: usize,
    pub default_lag: usize,
    pub description: String,
}

/// GET /transforms - List registered transforms
pub async fn list_transforms(State(state): State<Arc<AppState>>) -> Json<TransformsResponse> {
    let transforms = state
        .registry
        .entries()
        .iter()
        .map(|entry| TransformInfo {
            name: entry.name.to_string(),
            symbol: entry.symbol.clone(),
            arity: entry.arity,
            default_lag: entry.default_lag,
            description: entry.transform.description().to_string(),
        })
        .collect();

    Json(TransformsResponse { transforms })
}

/// Request body for a transform call
#[derive(Debug, Deserialize)]
pub struct TransformRequest {
    /// Input series; `null` entries are read as NaN
    pub values: Vec<Option<f64>>,
    /// Lag; omitted for the default
    #[serde(default)]
    pub lag: Option<i64>,
}

/// Response for a transform call
#[derive(Debug, Serialize)]
pub struct TransformResponse {
    pub transform: String,
    pub lag: usize,
    pub length: usize,
    /// Output series; non-finite values are `null`
    pub values: Vec<Option<f64>>,
}

/// POST /transforms/{name} - Apply a registered transform to a series
pub async fn apply_transform(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(request): Json<TransformRequest>,
) -> Result<Json<TransformResponse>, ApiError> {
    let series: Vec<f64> = request
        .values
        .iter()
        .map(|value| value.unwrap_or(f64::NAN))
        .collect();

    let output = state.registry.call(&name, &series, request.lag).map_err(|e| {
        tracing::debug!(transform = %name, error = %e, "transform call rejected");
        ApiError::from(e)
    })?;

    let values: Vec<Option<f64>> = output
        .iter()
        .map(|&value| if value.is_finite() { Some(value) } else { None })
        .collect();

    Ok(Json(TransformResponse {
        transform: name,
        lag: series.len() - output.len(),
        length: values.len(),
        values,
    }))
}
