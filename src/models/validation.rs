use serde::{Deserialize, Serialize};

use crate::models::compliance::ComplianceStatus;

/// A single ingredient's non-compliant classification.
///
/// `ingredient` is the name as submitted, not the normalized key, so the
/// caller can correlate violations with its own input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub ingredient: String,
    pub status: ComplianceStatus,
    pub reason: String,
}

/// Aggregate verdict for a set of ingredients.
///
/// Violations appear in submission order, one per failing ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<Violation>,
}
