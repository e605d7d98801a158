//! Domain layer: pure release-synchronization logic and its models.
//!
//! Nothing in here performs I/O beyond log emission; the HTTP surface
//! lives in `infrastructure`.

pub mod errors;
pub mod issue_key;
pub mod models;
pub mod naming;
pub mod ports;
pub mod version;

// Re-export the error type for convenient access
pub use errors::{SyncError, SyncResult};
