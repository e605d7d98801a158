//! Issue-tracker (Jira) REST integration.

pub mod client;
pub mod models;

pub use client::JiraClient;
