//! Run reports produced by the synchronizer.

use serde::Serialize;

use crate::domain::models::release::ReleaseRecord;

/// Outcome of one attempted issue association, in attempt order.
#[derive(Debug, Clone, Serialize)]
pub struct AssociationOutcome {
    /// The tracker issue the release was attached to.
    pub issue_key: String,
    /// Whether the fix-version update succeeded.
    pub success: bool,
    /// Error rendering when the association failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AssociationOutcome {
    /// Record a successful association.
    pub fn added(issue_key: impl Into<String>) -> Self {
        Self {
            issue_key: issue_key.into(),
            success: true,
            error: None,
        }
    }

    /// Record a failed association, keeping the error text for the summary.
    pub fn failed(issue_key: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            issue_key: issue_key.into(),
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Everything one synchronizer run did, in the order it did it.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// The tag the run was invoked for.
    pub tag: String,
    /// The release the issues were associated with.
    pub release: ReleaseRecord,
    /// Whether the release record was created by this run (vs found).
    pub created: bool,
    /// Per-issue association outcomes, in attempt order.
    pub outcomes: Vec<AssociationOutcome>,
    /// Changes skipped because their title referenced no issue.
    pub skipped: usize,
}

impl SyncReport {
    /// Start an empty report for a resolved release.
    pub fn new(tag: impl Into<String>, release: ReleaseRecord, created: bool) -> Self {
        Self {
            tag: tag.into(),
            release,
            created,
            outcomes: Vec::new(),
            skipped: 0,
        }
    }

    /// Number of associations that failed. Drives the process exit code.
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.success).count()
    }

    /// Number of associations that succeeded.
    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    /// A run succeeds when every attempted association succeeded.
    /// No changes, or none referencing an issue, is still success.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release() -> ReleaseRecord {
        ReleaseRecord::new("10042", "v2.3.0")
    }

    #[test]
    fn test_empty_report_is_success() {
        let report = SyncReport::new("v2.3.0", release(), true);
        assert!(report.is_success());
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn test_one_failure_fails_the_run() {
        let mut report = SyncReport::new("v2.3.0", release(), false);
        report.outcomes.push(AssociationOutcome::failed("PROJ-1", "HTTP 500"));
        report.outcomes.push(AssociationOutcome::added("PROJ-2"));
        assert!(!report.is_success());
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.succeeded_count(), 1);
    }

    #[test]
    fn test_skips_do_not_affect_success() {
        let mut report = SyncReport::new("v2.3.0", release(), false);
        report.skipped = 3;
        assert!(report.is_success());
    }

    #[test]
    fn test_json_omits_error_on_success() {
        let outcome = AssociationOutcome::added("PROJ-9");
        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["success"], true);
    }
}
