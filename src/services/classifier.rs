use crate::models::compliance::{ComplianceRecord, ComplianceStatus};

/// Reason attached when no record (or no usable status) exists.
const NO_RECORD_REASON: &str = "No compliance record found";

/// Per-ingredient compliance verdict.
#[derive(Debug, Clone)]
pub struct Classification {
    pub compliant: bool,
    pub reason: Option<String>,
}

/// Map a resolved record (or its absence) to a compliance verdict.
///
/// `approved` and `pending` pass. `restricted` and `banned` fail with the
/// authority and its notes in the reason. A missing record and any
/// unrecognized status both fail with the `unknown` fallback reason.
pub fn classify(record: Option<&ComplianceRecord>) -> Classification {
    let Some(record) = record else {
        return Classification {
            compliant: false,
            reason: Some(NO_RECORD_REASON.to_string()),
        };
    };

    match record.status {
        ComplianceStatus::Approved | ComplianceStatus::Pending => Classification {
            compliant: true,
            reason: None,
        },
        ComplianceStatus::Restricted => Classification {
            compliant: false,
            reason: Some(format!(
                "Restricted by {}: {}",
                record.source_authority,
                record.notes.as_deref().unwrap_or("No reason provided")
            )),
        },
        ComplianceStatus::Banned => Classification {
            compliant: false,
            reason: Some(format!(
                "Banned by {}: {}",
                record.source_authority,
                record.notes.as_deref().unwrap_or("No reason provided")
            )),
        },
        ComplianceStatus::Unknown => Classification {
            compliant: false,
            reason: Some(NO_RECORD_REASON.to_string()),
        },
    }
}
