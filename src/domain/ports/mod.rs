//! Port trait definitions.
//!
//! Async trait interfaces the infrastructure layer implements, keeping
//! the synchronizer independent of any concrete changelog backend.

pub mod changelog;

pub use changelog::ChangelogSource;
