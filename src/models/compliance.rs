use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Regulatory status of an ingredient under a given authority.
///
/// Variant order is severity order: `approved` is the least severe,
/// `unknown` the most. The derived `Ord` is what `resolve_all` sorts by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Approved,
    Pending,
    Restricted,
    Banned,
    Unknown,
}

/// An authority's status assignment for an ingredient name.
///
/// At most one record exists per `(ingredient_name, source_authority)` pair;
/// the store enforces this with a unique index. Validation only reads
/// records; the upsert path is administrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceRecord {
    pub id: Uuid,
    pub ingredient_name: String,
    pub status: ComplianceStatus,
    pub source_authority: String,
    pub fda_status: Option<String>,
    pub source_url: Option<String>,
    pub notes: Option<String>,
    pub last_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Helper for upserting compliance records.
#[derive(Debug, Clone)]
pub struct NewComplianceRecord {
    pub ingredient_name: String,
    pub status: ComplianceStatus,
    pub source_authority: String,
    pub fda_status: Option<String>,
    pub source_url: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_severity_order() {
        assert!(ComplianceStatus::Approved < ComplianceStatus::Pending);
        assert!(ComplianceStatus::Pending < ComplianceStatus::Restricted);
        assert!(ComplianceStatus::Restricted < ComplianceStatus::Banned);
        assert!(ComplianceStatus::Banned < ComplianceStatus::Unknown);
    }

    #[test]
    fn test_status_string_roundtrip() {
        assert_eq!(ComplianceStatus::Banned.to_string(), "banned");
        assert_eq!(
            ComplianceStatus::from_str("restricted").unwrap(),
            ComplianceStatus::Restricted
        );
    }

    #[test]
    fn test_unrecognized_status_is_an_error() {
        // Callers fall back to Unknown on parse failure.
        assert!(ComplianceStatus::from_str("quarantined").is_err());
    }
}
