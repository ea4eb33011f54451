#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use reorder_predictor::application::service_context::ServiceContext;
use reorder_predictor::config::ModelEnvConfig;
use reorder_predictor::interfaces::http;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

pub fn fixture_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/stock_reorder_model.json")
}

pub fn temp_model_path() -> PathBuf {
    std::env::temp_dir().join(format!("reorder-model-{}.json", uuid::Uuid::new_v4()))
}

pub fn app_for(model_path: PathBuf) -> Router {
    let config = ModelEnvConfig {
        model_path,
        ..ModelEnvConfig::default()
    };
    let context = ServiceContext::bootstrap(&config).expect("context should build");
    http::router(Arc::new(context))
}

pub fn app_with_model() -> Router {
    app_for(fixture_model_path())
}

pub fn degraded_app() -> Router {
    app_for(temp_model_path())
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Stock far below its minimum level: the fixture model reorders it.
pub fn low_stock_record() -> Value {
    json!({
        "product_id": "SKU-001",
        "cost_price": 10.0,
        "selling_price": 15.0,
        "current_stock": 5,
        "minimum_stock_level": 50,
        "category": "Grocery"
    })
}

/// Well stocked product: the fixture model does not reorder it.
pub fn high_stock_record() -> Value {
    json!({
        "product_id": "SKU-002",
        "cost_price": 20.0,
        "selling_price": 30.0,
        "profit_margin": 50.0,
        "reorder_frequency": 14,
        "current_stock": 400,
        "minimum_stock_level": 20,
        "category": "Electronics",
        "brand": "Acme",
        "supplier": "Northwind"
    })
}

pub fn short_stock_record() -> Value {
    json!({
        "product_id": "SKU-003",
        "cost_price": 8.0,
        "selling_price": 12.0,
        "current_stock": 15,
        "minimum_stock_level": 80,
        "category": "Household",
        "brand": "Globex",
        "supplier": "Contoso"
    })
}
