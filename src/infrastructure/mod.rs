//! Infrastructure layer module
//!
//! External integrations and ambient plumbing:
//! - Issue-tracker (Jira) REST client
//! - Source-host (GitHub) REST client and changelog source
//! - Configuration management
//!
//! Infrastructure implementations satisfy the port traits defined in the
//! domain layer.

pub mod config;
pub mod github;
pub mod jira;
