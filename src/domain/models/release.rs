//! Release records as the issue tracker sees them.

use serde::{Deserialize, Serialize};

/// A release ("version" in tracker terms) owned by the issue tracker.
///
/// The synchronizer only reads or creates these; it never mutates an
/// existing record. At most one record may exist per exact name within a
/// project; two is upstream data corruption, detected and surfaced
/// rather than silently resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Tracker-assigned identifier.
    pub id: String,
    /// Exact release name, e.g. `v2.3.0`.
    pub name: String,
    /// Project the release belongs to, when the tracker reports it.
    pub project_id: Option<String>,
}

impl ReleaseRecord {
    /// Create a record with no project association.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            project_id: None,
        }
    }
}
