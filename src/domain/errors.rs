//! Error taxonomy for the release synchronization protocol.

use thiserror::Error;

/// Errors surfaced while talking to the issue tracker or the source host.
///
/// Where a variant is fatal depends on when it occurs: any failure during
/// release resolution aborts the run (there is no release to attach issues
/// to), while failures inside the per-issue association loop are caught,
/// logged, and counted without stopping the batch.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Network-level failure (connect, DNS, timeout, reset) before a
    /// response could be read.
    #[error("transport failure talking to upstream: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status, or with a 2xx response
    /// carrying an embedded error payload.
    #[error("upstream returned HTTP {status}: {body}")]
    Upstream {
        /// HTTP status code of the failing response.
        status: u16,
        /// Raw response body, kept verbatim for diagnosis.
        body: String,
    },

    /// The response was readable but lacks fields this tool cannot proceed
    /// without.
    #[error("malformed {context} response: {body}")]
    MalformedResponse {
        /// Which endpoint produced the unusable payload.
        context: String,
        /// Raw response body, kept verbatim for diagnosis.
        body: String,
    },

    /// More than one release record carries the exact target name.
    /// Duplicates mean the tracker's data needs manual cleanup; picking one
    /// silently would compound the problem.
    #[error("found {count} releases named '{name}'; duplicate release names must be resolved in the tracker")]
    AmbiguousRelease {
        /// The release name that matched more than once.
        name: String,
        /// How many records carried that exact name.
        count: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type SyncResult<T> = Result<T, SyncError>;

impl SyncError {
    /// Build an [`SyncError::Upstream`] from a status code and raw body.
    pub fn upstream(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        Self::Upstream {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    /// Build a [`SyncError::MalformedResponse`] naming the endpoint whose
    /// payload was unusable.
    pub fn malformed(context: impl Into<String>, body: impl Into<String>) -> Self {
        Self::MalformedResponse {
            context: context.into(),
            body: body.into(),
        }
    }
}
