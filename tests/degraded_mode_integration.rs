mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_missing_artifact_starts_degraded() {
    let app = degraded_app();

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["model_loaded"], false);

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["model_loaded"], false);
    assert!(body["model_path"].as_str().unwrap().contains("reorder-model-"));
}

#[tokio::test]
async fn test_prediction_endpoints_refuse_when_degraded() {
    let app = degraded_app();

    let (status, body) = send(&app, "POST", "/predict", Some(low_stock_record())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body["detail"],
        "Model not loaded. Please check server configuration."
    );

    let (status, body) = send(
        &app,
        "POST",
        "/batch-predict",
        Some(json!([low_stock_record()])),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["detail"], "Model not loaded");

    let (status, body) = send(&app, "GET", "/model-info", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["detail"], "Model not loaded");
}

#[tokio::test]
async fn test_unavailable_takes_precedence_over_bad_input() {
    let app = degraded_app();
    let (status, _) = send_raw(&app, "/predict", "{not json").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_corrupt_artifact_starts_degraded() {
    let path = temp_model_path();
    std::fs::write(&path, b"\x80\x04\x95 not a model").unwrap();

    let app = app_for(path.clone());
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");

    let (status, _) = send(&app, "POST", "/predict", Some(low_stock_record())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn test_incompatible_schema_starts_degraded() {
    let fixture = std::fs::read_to_string(fixture_model_path()).unwrap();
    let mut artifact: serde_json::Value = serde_json::from_str(&fixture).unwrap();
    artifact["numerical_features"][2] = json!("profit_margin");

    let path = temp_model_path();
    std::fs::write(&path, artifact.to_string()).unwrap();

    let app = app_for(path.clone());
    let (_, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["model_loaded"], false);

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn test_valid_artifact_copy_loads() {
    let path = temp_model_path();
    std::fs::copy(fixture_model_path(), &path).unwrap();

    let app = app_for(path.clone());
    let (_, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, "POST", "/predict", Some(low_stock_record())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reorder_required"], true);

    std::fs::remove_file(path).ok();
}
