use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::compliance::{ComplianceRecord, ComplianceStatus, NewComplianceRecord};
use crate::services::resolution::{ComplianceStore, StoreError};

/// Upper bound on partial-match candidates fetched per lookup.
const PARTIAL_CANDIDATE_LIMIT: i64 = 25;

/// PostgreSQL-backed compliance record store.
#[derive(Clone)]
pub struct PgComplianceStore {
    pool: PgPool,
}

impl PgComplianceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComplianceStore for PgComplianceStore {
    async fn find_exact(
        &self,
        name: &str,
        authority: &str,
    ) -> Result<Option<ComplianceRecord>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, ingredient_name, status, source_authority, fda_status,
                   source_url, notes, last_verified_at, created_at, updated_at
            FROM compliance_records
            WHERE LOWER(ingredient_name) = LOWER($1)
              AND source_authority = $2
            LIMIT 1
            "#,
        )
        .bind(name)
        .bind(authority)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_record).transpose().map_err(StoreError::from)
    }

    async fn find_partial(
        &self,
        fragment: &str,
        authority: &str,
    ) -> Result<Vec<ComplianceRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, ingredient_name, status, source_authority, fda_status,
                   source_url, notes, last_verified_at, created_at, updated_at
            FROM compliance_records
            WHERE source_authority = $2
              AND (LOWER(ingredient_name) LIKE '%' || LOWER($1) || '%'
                   OR LOWER($1) LIKE '%' || LOWER(ingredient_name) || '%')
            LIMIT $3
            "#,
        )
        .bind(fragment)
        .bind(authority)
        .bind(PARTIAL_CANDIDATE_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| map_record(row).map_err(StoreError::from))
            .collect()
    }

    async fn find_all(&self, name: &str) -> Result<Vec<ComplianceRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, ingredient_name, status, source_authority, fda_status,
                   source_url, notes, last_verified_at, created_at, updated_at
            FROM compliance_records
            WHERE LOWER(ingredient_name) = LOWER($1)
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| map_record(row).map_err(StoreError::from))
            .collect()
    }

    async fn upsert(&self, record: &NewComplianceRecord) -> Result<ComplianceRecord, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO compliance_records
                (ingredient_name, status, source_authority, fda_status, source_url, notes, last_verified_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            ON CONFLICT (LOWER(ingredient_name), source_authority)
            DO UPDATE SET
                ingredient_name = EXCLUDED.ingredient_name,
                status = EXCLUDED.status,
                fda_status = EXCLUDED.fda_status,
                source_url = EXCLUDED.source_url,
                notes = EXCLUDED.notes,
                last_verified_at = NOW(),
                updated_at = NOW()
            RETURNING id, ingredient_name, status, source_authority, fda_status,
                      source_url, notes, last_verified_at, created_at, updated_at
            "#,
        )
        .bind(&record.ingredient_name)
        .bind(record.status.to_string())
        .bind(&record.source_authority)
        .bind(&record.fda_status)
        .bind(&record.source_url)
        .bind(&record.notes)
        .fetch_one(&self.pool)
        .await?;

        map_record(row).map_err(StoreError::from)
    }
}

/// Map a row to a record. Unrecognized status strings decode to `unknown`
/// rather than failing the whole lookup.
fn map_record(row: PgRow) -> Result<ComplianceRecord, sqlx::Error> {
    let status_str: String = row.try_get("status")?;
    let status = status_str.parse().unwrap_or(ComplianceStatus::Unknown);

    Ok(ComplianceRecord {
        id: row.try_get("id")?,
        ingredient_name: row.try_get("ingredient_name")?,
        status,
        source_authority: row.try_get("source_authority")?,
        fda_status: row.try_get("fda_status")?,
        source_url: row.try_get("source_url")?,
        notes: row.try_get("notes")?,
        last_verified_at: row.try_get("last_verified_at")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
