use axum::{
    extract::{State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::application::service_context::{SERVICE_NAME, SERVICE_VERSION, ServiceContext};
use crate::domain::model_info::ModelInfo;
use crate::domain::prediction::{BatchPredictionResponse, PredictionResult};
use crate::domain::product::ProductRecord;
use crate::interfaces::http::error::{ApiError, MODEL_NOT_LOADED_DETAIL};
use crate::interfaces::http::state::AppState;

const PREDICT: &str = "predict";
const BATCH_PREDICT: &str = "batch_predict";
const MODEL_INFO: &str = "model_info";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    service: &'static str,
    status: &'static str,
    model_loaded: bool,
    version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    model_loaded: bool,
    model_path: String,
}

pub async fn root(State(context): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        service: SERVICE_NAME,
        status: "running",
        model_loaded: context.model_loaded(),
        version: SERVICE_VERSION,
    })
}

pub async fn health(State(context): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: context.status().as_str(),
        model_loaded: context.model_loaded(),
        model_path: context.model_path().display().to_string(),
    })
}

pub async fn predict(
    State(context): State<AppState>,
    payload: Result<Json<ProductRecord>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let started = Instant::now();
    let result = predict_one(&context, payload);
    observe(&context, PREDICT, started, result).map(Json)
}

fn predict_one(
    context: &ServiceContext,
    payload: Result<Json<ProductRecord>, JsonRejection>,
) -> Result<PredictionResult, ApiError> {
    let predictor = context
        .predictor()
        .map_err(|_| ApiError::Unavailable(MODEL_NOT_LOADED_DETAIL.to_string()))?;

    let Json(record) = payload?;
    record
        .validate()
        .map_err(|e| ApiError::invalid_record(None, e))?;

    let result = predictor
        .predict(&record)
        .map_err(|e| ApiError::from_prediction(e, "Prediction error"))?;

    context
        .metrics
        .record_predictions(PREDICT, usize::from(result.reorder_required), 1);
    Ok(result)
}

pub async fn batch_predict(
    State(context): State<AppState>,
    payload: Result<Json<Vec<ProductRecord>>, JsonRejection>,
) -> Result<Json<BatchPredictionResponse>, ApiError> {
    let started = Instant::now();
    let result = predict_many(&context, payload);
    observe(&context, BATCH_PREDICT, started, result).map(Json)
}

fn predict_many(
    context: &ServiceContext,
    payload: Result<Json<Vec<ProductRecord>>, JsonRejection>,
) -> Result<BatchPredictionResponse, ApiError> {
    let predictor = context
        .predictor()
        .map_err(|e| ApiError::from_prediction(e, "Batch prediction error"))?;

    let Json(records) = payload?;
    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|e| ApiError::invalid_record(Some(index), e))?;
    }

    let response = predictor
        .predict_batch(&records)
        .map_err(|e| ApiError::from_prediction(e, "Batch prediction error"))?;

    info!(
        "Batch prediction: {} products, {} need reorder",
        response.total_products, response.reorder_needed
    );
    context.metrics.record_predictions(
        BATCH_PREDICT,
        response.reorder_needed,
        response.total_products,
    );
    Ok(response)
}

pub async fn model_info(State(context): State<AppState>) -> Result<Json<ModelInfo>, ApiError> {
    context.model_info().map(Json).map_err(|e| {
        let err = ApiError::from_prediction(e, "Model info error");
        context.metrics.inc_errors(MODEL_INFO, err.kind());
        err
    })
}

pub async fn metrics(State(context): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        context.metrics.render(),
    )
}

/// Records latency on success, logs and counts failures.
fn observe<T>(
    context: &ServiceContext,
    endpoint: &str,
    started: Instant,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    match &result {
        Ok(_) => context
            .metrics
            .observe_latency(endpoint, started.elapsed().as_secs_f64()),
        Err(e @ ApiError::Internal(_)) => {
            error!("{} failed: {}", endpoint, e.detail());
            context.metrics.inc_errors(endpoint, e.kind());
        }
        Err(e) => {
            warn!("{} rejected ({}): {}", endpoint, e.status(), e.detail());
            context.metrics.inc_errors(endpoint, e.kind());
        }
    }
    result
}
