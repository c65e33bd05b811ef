use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::models::compliance::{ComplianceRecord, ComplianceStatus, NewComplianceRecord};
use crate::services::resolution::{self, ComplianceStore};
use crate::services::normalizer;

/// All records for one ingredient name, least severe status first.
#[derive(Debug, Serialize)]
pub struct IngredientRecordsResponse {
    pub name: String,
    pub normalized: String,
    pub records: Vec<ComplianceRecord>,
}

/// GET /api/v1/ingredients/{name} — Records across all authorities.
pub async fn get_ingredient_records(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<IngredientRecordsResponse>, StatusCode> {
    let records = resolution::resolve_all(state.store.as_ref(), &name)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Compliance store unavailable");
            StatusCode::SERVICE_UNAVAILABLE
        })?;

    Ok(Json(IngredientRecordsResponse {
        normalized: normalizer::normalize(&name),
        name,
        records,
    }))
}

/// Administrative create-or-update of one compliance record.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertComplianceRequest {
    #[garde(length(min = 1, max = 200))]
    pub ingredient_name: String,

    #[garde(skip)]
    pub status: ComplianceStatus,

    #[garde(length(min = 1, max = 64))]
    pub authority: Option<String>,

    #[garde(length(max = 200))]
    pub fda_status: Option<String>,

    #[garde(length(max = 2000))]
    pub source_url: Option<String>,

    #[garde(length(max = 2000))]
    pub notes: Option<String>,
}

/// POST /api/v1/compliance — Upsert a compliance record.
///
/// Idempotent on `(ingredient_name, authority)`; overwrites status and
/// provenance fields and refreshes the last-verified timestamp.
pub async fn upsert_compliance_record(
    State(state): State<AppState>,
    Json(payload): Json<UpsertComplianceRequest>,
) -> Result<Json<ComplianceRecord>, StatusCode> {
    if let Err(report) = payload.validate() {
        tracing::warn!(error = %report, "Rejected invalid compliance upsert");
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let record = NewComplianceRecord {
        ingredient_name: payload.ingredient_name,
        status: payload.status,
        source_authority: payload
            .authority
            .unwrap_or_else(|| state.default_authority.clone()),
        fda_status: payload.fda_status,
        source_url: payload.source_url,
        notes: payload.notes,
    };

    let stored = state.store.upsert(&record).await.map_err(|e| {
        tracing::error!(error = %e, "Compliance store unavailable");
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    metrics::counter!("compliance_upserts_total").increment(1);
    tracing::info!(
        ingredient = %stored.ingredient_name,
        status = %stored.status,
        authority = %stored.source_authority,
        "Compliance record upserted"
    );

    Ok(Json(stored))
}
