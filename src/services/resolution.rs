//! Compliance record resolution.
//!
//! Resolves a free-text ingredient name to at most one compliance record
//! through a three-tier cascade: exact name match, match on the normalized
//! key, then a ranked partial (substring) match. Each tier is one store
//! round-trip and the cascade stops at the first tier with a hit.
//!
//! The store is abstracted behind [`ComplianceStore`] so the cascade and
//! its ranking stay free of I/O and unit-testable against a stub.

use async_trait::async_trait;
use std::cmp::Ordering;
use strsim::jaro_winkler;
use tracing::debug;

use crate::models::compliance::{ComplianceRecord, NewComplianceRecord};
use crate::services::normalizer;

/// Error type for compliance store operations.
///
/// "No record found" is not an error: lookups return `Ok(None)` or an
/// empty list. This only signals that the store itself could not answer,
/// and it propagates to the caller without local retries.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("compliance store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Narrow interface over the compliance record store.
///
/// Four operations: case-insensitive exact lookup, substring lookup (both
/// scoped to one authority), exact lookup across all authorities, and the
/// administrative upsert keyed on `(ingredient_name, authority)`.
#[async_trait]
pub trait ComplianceStore: Send + Sync {
    /// Case-insensitive equality lookup within one authority.
    async fn find_exact(
        &self,
        name: &str,
        authority: &str,
    ) -> Result<Option<ComplianceRecord>, StoreError>;

    /// Substring candidates within one authority: stored name contained in
    /// the fragment, or the fragment contained in the stored name.
    async fn find_partial(
        &self,
        fragment: &str,
        authority: &str,
    ) -> Result<Vec<ComplianceRecord>, StoreError>;

    /// Case-insensitive equality lookup across all authorities.
    async fn find_all(&self, name: &str) -> Result<Vec<ComplianceRecord>, StoreError>;

    /// Create-or-update keyed on `(ingredient_name, authority)`. Refreshes
    /// status, provenance fields, and the last-verified timestamp.
    async fn upsert(&self, record: &NewComplianceRecord) -> Result<ComplianceRecord, StoreError>;
}

/// Resolve a raw ingredient name to at most one record for an authority.
///
/// Tier 1 matches the trimmed raw name exactly (case-insensitive). Tier 2
/// retries with the normalized key. Tier 3 ranks substring candidates and
/// returns the best. `Ok(None)` means "unknown ingredient", a valid outcome.
pub async fn resolve<S: ComplianceStore + ?Sized>(
    store: &S,
    raw_name: &str,
    authority: &str,
) -> Result<Option<ComplianceRecord>, StoreError> {
    let trimmed = raw_name.trim();

    if let Some(record) = store.find_exact(trimmed, authority).await? {
        debug!(ingredient = trimmed, tier = "exact", "Resolved compliance record");
        metrics::counter!("ingredient_resolutions_total", "tier" => "exact").increment(1);
        return Ok(Some(record));
    }

    let normalized = normalizer::normalize(raw_name);
    if let Some(record) = store.find_exact(&normalized, authority).await? {
        debug!(
            ingredient = trimmed,
            normalized = %normalized,
            tier = "normalized",
            "Resolved compliance record"
        );
        metrics::counter!("ingredient_resolutions_total", "tier" => "normalized").increment(1);
        return Ok(Some(record));
    }

    let candidates = store.find_partial(&normalized, authority).await?;
    let best = pick_best_partial(candidates, &normalized);
    if best.is_some() {
        debug!(
            ingredient = trimmed,
            normalized = %normalized,
            tier = "partial",
            "Resolved compliance record"
        );
        metrics::counter!("ingredient_resolutions_total", "tier" => "partial").increment(1);
    } else {
        debug!(ingredient = trimmed, normalized = %normalized, "No compliance record found");
        metrics::counter!("ingredient_resolutions_total", "tier" => "none").increment(1);
    }
    Ok(best)
}

/// Every record for a name across all authorities, least severe status
/// first (`approved < pending < restricted < banned < unknown`).
pub async fn resolve_all<S: ComplianceStore + ?Sized>(
    store: &S,
    name: &str,
) -> Result<Vec<ComplianceRecord>, StoreError> {
    let mut records = store.find_all(name.trim()).await?;
    records.sort_by_key(|r| r.status);
    Ok(records)
}

/// Rank of a partial-match candidate; lower is better.
///
/// 0: stored name equals the normalized query. 1: stored name is a prefix
/// of the normalized query. 2: any other substring overlap.
fn partial_rank(record: &ComplianceRecord, normalized: &str) -> u8 {
    let stored = record.ingredient_name.to_lowercase();
    if stored == normalized {
        0
    } else if normalized.starts_with(&stored) {
        1
    } else {
        2
    }
}

/// Pick the best partial candidate deterministically.
///
/// Primary key is the rank tier; within a tier, candidates are ordered by
/// descending Jaro-Winkler similarity to the normalized query, then by
/// case-insensitive name, so the result never depends on store row order.
fn pick_best_partial(
    mut candidates: Vec<ComplianceRecord>,
    normalized: &str,
) -> Option<ComplianceRecord> {
    candidates.sort_by(|a, b| {
        let rank = partial_rank(a, normalized).cmp(&partial_rank(b, normalized));
        rank.then_with(|| {
            let sim_a = jaro_winkler(&a.ingredient_name.to_lowercase(), normalized);
            let sim_b = jaro_winkler(&b.ingredient_name.to_lowercase(), normalized);
            sim_b.partial_cmp(&sim_a).unwrap_or(Ordering::Equal)
        })
        .then_with(|| {
            a.ingredient_name
                .to_lowercase()
                .cmp(&b.ingredient_name.to_lowercase())
        })
    });
    candidates.into_iter().next()
}
