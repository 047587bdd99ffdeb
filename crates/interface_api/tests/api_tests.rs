//! HTTP-level tests for the claim decision API

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_decision::{FraudModel, RuleConfig};
use interface_api::{config::ApiConfig, create_router, AppState};
use test_utils::{always_fraud_model, never_fraud_model};

fn test_server(model: FraudModel) -> TestServer {
    let state = AppState::new(model, RuleConfig::default(), ApiConfig::default());
    TestServer::new(create_router(state)).expect("router builds")
}

fn valid_claim_body() -> Value {
    json!({
        "insurance_type": "health",
        "policy_type": "basic",
        "incident_type": "accident",
        "payment_method": "online",
        "region": "north",
        "claim_amount": 50000.0,
        "customer_age": 35,
        "policy_tenure_days": 180,
        "num_previous_claims": 0,
        "days_since_last_claim": 200,
        "claim_processing_days": 10
    })
}

// ============================================================================
// Health Endpoints
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = test_server(never_fraud_model());

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_model() {
    let server = test_server(never_fraud_model());

    let response = server.get("/health/ready").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert!(body["model_id"].as_str().unwrap().starts_with("test-"));
    assert!(body["feature_count"].as_u64().unwrap() >= 1);
}

// ============================================================================
// Structured Decision Endpoint
// ============================================================================

#[tokio::test]
async fn test_decide_clear_claim() {
    let server = test_server(never_fraud_model());

    let response = server.post("/api/v1/claims/decide").json(&valid_claim_body()).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["prediction"], 0);
    let probability = body["probability"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&probability));
    assert_eq!(body["reasons"], json!([]));
}

#[tokio::test]
async fn test_decide_flagged_claim_has_reasons() {
    let server = test_server(always_fraud_model());

    let mut body = valid_claim_body();
    body["claim_amount"] = json!(400_000.0);
    body["policy_tenure_days"] = json!(10);
    body["num_previous_claims"] = json!(4);

    let response = server.post("/api/v1/claims/decide").json(&body).await;
    response.assert_status_ok();

    let decision: Value = response.json();
    assert_eq!(decision["prediction"], 1);
    assert!(!decision["reasons"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_decide_ineligible_claim_returns_violations() {
    let server = test_server(always_fraud_model());

    // Theft is not a health incident; the claim is structurally valid but
    // fails the eligibility rules
    let mut body = valid_claim_body();
    body["incident_type"] = json!("theft");

    let response = server.post("/api/v1/claims/decide").json(&body).await;
    response.assert_status_ok();

    let decision: Value = response.json();
    assert_eq!(decision["prediction"], 0);
    assert_eq!(decision["probability"], 0.0);
    assert!(!decision["reasons"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_decide_underage_claim_fails_validation() {
    let server = test_server(never_fraud_model());

    let mut body = valid_claim_body();
    body["customer_age"] = json!(17);

    let response = server.post("/api/v1/claims/decide").json(&body).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let error: Value = response.json();
    assert_eq!(error["error"], "validation_error");
}

#[tokio::test]
async fn test_decide_negative_amount_fails_validation() {
    let server = test_server(never_fraud_model());

    let mut body = valid_claim_body();
    body["claim_amount"] = json!(-5.0);

    let response = server.post("/api/v1/claims/decide").json(&body).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_decide_unknown_enum_value_rejected() {
    let server = test_server(never_fraud_model());

    let mut body = valid_claim_body();
    body["insurance_type"] = json!("pet");

    let response = server.post("/api/v1/claims/decide").json(&body).await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_decide_missing_field_rejected() {
    let server = test_server(never_fraud_model());

    let mut body = valid_claim_body();
    body.as_object_mut().unwrap().remove("region");

    let response = server.post("/api/v1/claims/decide").json(&body).await;
    assert!(response.status_code().is_client_error());
}

// ============================================================================
// Extraction Endpoint
// ============================================================================

#[tokio::test]
async fn test_extract_accident_description() {
    let server = test_server(never_fraud_model());

    let response = server
        .post("/api/v1/claims/extract")
        .json(&json!({
            "description": "Accident occurred last month, claimed 150000 for vehicle repair"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["claim_amount"], json!(150000.0));
    assert_eq!(body["incident_type"], "accident");
}

#[tokio::test]
async fn test_extract_empty_description_yields_empty_object() {
    let server = test_server(never_fraud_model());

    let response = server
        .post("/api/v1/claims/extract")
        .json(&json!({"description": ""}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({}));
}

// ============================================================================
// Free-Text Decision Endpoint
// ============================================================================

#[tokio::test]
async fn test_decide_from_text_fills_defaults() {
    let server = test_server(never_fraud_model());

    let response = server
        .post("/api/v1/claims/decide-text")
        .json(&json!({
            "description": "Accident occurred last month, claimed 150000 for vehicle repair",
            "overrides": {"insurance_type": "vehicle"}
        }))
        .await;
    response.assert_status_ok();

    let decision: Value = response.json();
    assert_eq!(decision["prediction"], 0);
    assert_eq!(decision["reasons"], json!([]));
}

#[tokio::test]
async fn test_decide_from_text_flagged() {
    let server = test_server(always_fraud_model());

    let response = server
        .post("/api/v1/claims/decide-text")
        .json(&json!({
            "description": "Accident occurred last month, claimed 150000 for vehicle repair",
            "overrides": {"insurance_type": "vehicle"}
        }))
        .await;
    response.assert_status_ok();

    let decision: Value = response.json();
    assert_eq!(decision["prediction"], 1);
}

#[tokio::test]
async fn test_decide_from_text_invalid_override_fails_validation() {
    let server = test_server(never_fraud_model());

    let response = server
        .post("/api/v1/claims/decide-text")
        .json(&json!({
            "description": "Minor scrape, nothing serious",
            "overrides": {"customer_age": 12}
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_decide_from_text_without_overrides() {
    let server = test_server(never_fraud_model());

    let response = server
        .post("/api/v1/claims/decide-text")
        .json(&json!({"description": ""}))
        .await;
    response.assert_status_ok();

    // Pure defaults: an eligible, clear claim
    let decision: Value = response.json();
    assert_eq!(decision["prediction"], 0);
}
