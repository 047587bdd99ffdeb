//! Claim decision handlers

use axum::{extract::State, Json};
use validator::Validate;

use core_kernel::PartialClaimRecord;

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Decides a structured claim
pub async fn decide_claim(
    State(state): State<AppState>,
    Json(request): Json<DecideClaimRequest>,
) -> Result<Json<DecisionResponse>, ApiError> {
    request.validate()?;
    let claim = request.into_claim()?;
    let decision = state.pipeline.decide(&claim);
    Ok(Json(decision.into()))
}

/// Extracts structured fields from a free-text claim description
///
/// Best-effort and total: unmatched or ambiguous signals are simply
/// absent from the response.
pub async fn extract_features(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Json<PartialClaimRecord> {
    Json(state.extractor.extract(&request.description))
}

/// Decides a claim described in free text
///
/// Caller overrides win over extracted fields; anything still absent is
/// filled from the standard defaults before the pipeline runs.
pub async fn decide_from_text(
    State(state): State<AppState>,
    Json(request): Json<DecideTextRequest>,
) -> Result<Json<DecisionResponse>, ApiError> {
    let extracted = state.extractor.extract(&request.description);
    let merged = request.overrides.unwrap_or_default().or(extracted);
    let claim = merged.into_claim(&state.defaults)?;
    let decision = state.pipeline.decide(&claim);
    Ok(Json(decision.into()))
}
