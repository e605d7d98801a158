//! Configuration management infrastructure
//!
//! Environment-driven configuration using figment:
//! - FIXVERSION_* environment overrides with `__` nesting
//! - CI variable fallbacks (GITHUB_REF_NAME and friends)
//! - Per-command validation
//! - Typed extraction into `domain::models::Config`

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
