//! Domain model types.

pub mod change;
pub mod config;
pub mod release;
pub mod report;

pub use change::ChangeEntry;
pub use config::{Config, GithubConfig, JiraConfig, ReleaseConfig};
pub use release::ReleaseRecord;
pub use report::{AssociationOutcome, SyncReport};
