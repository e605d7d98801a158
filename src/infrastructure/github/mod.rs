//! Source-host (GitHub) REST integration: release objects and the
//! changelog derived from their generated notes.

pub mod changelog;
pub mod client;
pub mod models;

pub use changelog::GitHubChangelogSource;
pub use client::GitHubClient;
