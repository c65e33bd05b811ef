use sqlx::PgPool;
use std::sync::Arc;

use crate::db::compliance_queries::PgComplianceStore;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub store: Arc<PgComplianceStore>,
    pub default_authority: String,
}

impl AppState {
    pub fn new(db: PgPool, default_authority: String) -> Self {
        let store = Arc::new(PgComplianceStore::new(db.clone()));
        Self {
            db,
            store,
            default_authority,
        }
    }
}
