//! fixversion - tag-driven issue-tracker release synchronization
//!
//! fixversion runs once per freshly cut git tag. It derives the release's
//! canonical name from the tag, makes sure a matching release ("version")
//! record exists in the issue tracker, and links every changelog entry's
//! referenced issue to that release through the fix-version field.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pure synchronization logic and models
//! - **Service Layer** (`services`): The synchronizer orchestration
//! - **Infrastructure Layer** (`infrastructure`): Tracker and source-host
//!   REST clients, configuration
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use fixversion::infrastructure::config::ConfigLoader;
//! use fixversion::infrastructure::jira::JiraClient;
//! use fixversion::services::ReleaseSynchronizer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let jira = JiraClient::new(&config.jira)?;
//!     // Wire a changelog source and run the synchronizer...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{SyncError, SyncResult};
pub use domain::models::{
    AssociationOutcome, ChangeEntry, Config, GithubConfig, JiraConfig, ReleaseConfig,
    ReleaseRecord, SyncReport,
};
pub use domain::ports::ChangelogSource;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::ReleaseSynchronizer;
