use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::app_state::AppState;
use crate::models::validation::Violation;
use crate::services::{extractor, validation};

/// Request to validate a recommendation's ingredients.
///
/// Either an explicit `ingredients` list or free-form `text` to scan; an
/// explicit list takes precedence when both are present.
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateRequest {
    #[garde(length(max = 200), inner(length(min = 1, max = 200)))]
    pub ingredients: Option<Vec<String>>,

    #[garde(length(max = 20000))]
    pub text: Option<String>,

    #[garde(length(min = 1, max = 64))]
    pub authority: Option<String>,
}

/// Validation verdict surfaced alongside the recommendation payload.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub violations: Vec<Violation>,
    /// The ingredient names that were checked (extracted from text when no
    /// explicit list was given).
    pub ingredients: Vec<String>,
    pub authority: String,
}

/// POST /api/v1/validate — Validate ingredients against compliance records.
pub async fn validate_recommendation(
    State(state): State<AppState>,
    Json(payload): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, StatusCode> {
    if let Err(report) = payload.validate() {
        tracing::warn!(error = %report, "Rejected invalid validation request");
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let authority = payload
        .authority
        .as_deref()
        .unwrap_or(&state.default_authority);

    let ingredients = match (&payload.ingredients, &payload.text) {
        (Some(list), _) if !list.is_empty() => list.clone(),
        (_, Some(text)) => extractor::extract_ingredients(text),
        _ => return Err(StatusCode::BAD_REQUEST),
    };

    let start = Instant::now();
    let result = validation::validate_ingredients(state.store.as_ref(), &ingredients, authority)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Compliance store unavailable");
            StatusCode::SERVICE_UNAVAILABLE
        })?;

    metrics::counter!("compliance_validations_total").increment(1);
    metrics::counter!("compliance_violations_total").increment(result.violations.len() as u64);
    metrics::histogram!("compliance_validation_seconds").record(start.elapsed().as_secs_f64());

    tracing::info!(
        valid = result.valid,
        ingredients = ingredients.len(),
        violations = result.violations.len(),
        authority = authority,
        "Validation complete"
    );

    Ok(Json(ValidateResponse {
        valid: result.valid,
        violations: result.violations,
        ingredients,
        authority: authority.to_string(),
    }))
}
