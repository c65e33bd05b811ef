use tracing::debug;

use crate::models::compliance::ComplianceStatus;
use crate::models::validation::{ValidationResult, Violation};
use crate::services::classifier;
use crate::services::resolution::{self, ComplianceStore, StoreError};

/// Validate a set of ingredient names against one authority's records.
///
/// Each name is resolved and classified in submission order, one store
/// round-trip per ingredient. A failing ingredient never short-circuits
/// the rest; every name is always evaluated. The only error is a store
/// failure, which propagates unhandled. "No record" is a violation, not
/// an error.
pub async fn validate_ingredients<S: ComplianceStore + ?Sized>(
    store: &S,
    ingredient_names: &[String],
    authority: &str,
) -> Result<ValidationResult, StoreError> {
    let mut violations = Vec::new();

    for name in ingredient_names {
        let record = resolution::resolve(store, name, authority).await?;
        let verdict = classifier::classify(record.as_ref());

        if !verdict.compliant {
            let status = record
                .as_ref()
                .map(|r| r.status)
                .unwrap_or(ComplianceStatus::Unknown);
            debug!(
                ingredient = %name,
                status = %status,
                authority = authority,
                "Ingredient failed compliance check"
            );
            violations.push(Violation {
                ingredient: name.clone(),
                status,
                reason: verdict
                    .reason
                    .unwrap_or_else(|| "No compliance record found".to_string()),
            });
        }
    }

    Ok(ValidationResult {
        valid: violations.is_empty(),
        violations,
    })
}
