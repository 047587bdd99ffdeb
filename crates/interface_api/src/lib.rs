//! HTTP API Layer
//!
//! This crate provides the REST API for the claim decision system using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Decision, extraction, and health endpoints
//! - **DTOs**: Request/Response data transfer objects with validation
//! - **Error Handling**: Consistent error responses
//!
//! The decision pipeline itself is transport-agnostic; this layer only
//! validates input, hands well-formed claim records to the pipeline,
//! and serializes its verdicts. The canonical response shape is
//! `{prediction, probability, reasons}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(model, RuleConfig::default(), config);
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::ClaimDefaults;
use domain_decision::{
    DecisionPipeline, EligibilityRuleSet, FraudModel, ReasonRuleSet, RuleConfig,
    TextFeatureExtractor,
};

use crate::config::ApiConfig;
use crate::handlers::{claims, health};

/// Application state shared across handlers
///
/// Everything here is built once at startup and read-only afterwards;
/// the pipeline (and the model inside it) is shared across concurrent
/// requests without coordination.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<DecisionPipeline>,
    pub extractor: TextFeatureExtractor,
    pub defaults: ClaimDefaults,
    pub model_id: String,
    pub feature_count: usize,
    pub config: ApiConfig,
}

impl AppState {
    /// Assembles the application state around a loaded model and rule
    /// thresholds
    pub fn new(model: FraudModel, rules: RuleConfig, config: ApiConfig) -> Self {
        let model_id = model.model_id().to_string();
        let feature_count = model.feature_count();
        let pipeline = DecisionPipeline::new(
            EligibilityRuleSet::from_config(&rules.eligibility),
            ReasonRuleSet::from_config(&rules.reasons),
            Arc::new(model),
        );

        Self {
            pipeline: Arc::new(pipeline),
            extractor: TextFeatureExtractor::new(),
            defaults: ClaimDefaults::default(),
            model_id,
            feature_count,
            config,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let claims_routes = Router::new()
        .route("/decide", post(claims::decide_claim))
        .route("/extract", post(claims::extract_features))
        .route("/decide-text", post(claims::decide_from_text));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1/claims", claims_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
