//! Port for changelog discovery.

use async_trait::async_trait;

use crate::domain::errors::SyncResult;
use crate::domain::models::ChangeEntry;

/// Where the changes shipping in a tagged release come from.
///
/// The production implementation reads the source host's generated
/// release notes; tests substitute an in-memory list. An empty change
/// set is a legitimate outcome, not an error.
#[async_trait]
pub trait ChangelogSource: Send + Sync {
    /// Collect the change entries attributed to `tag`, in changelog order.
    async fn extract_changes(&self, tag: &str) -> SyncResult<Vec<ChangeEntry>>;
}
