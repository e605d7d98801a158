//! Command-line interface: argument types, command implementations, and
//! output formatting.

pub mod commands;
pub mod output;
pub mod types;

// Re-export commonly used items
pub use types::{Cli, Commands};

use std::process::ExitCode;

/// Print a fatal error in the requested format and pick the exit code.
///
/// With `--json` the error becomes a machine-readable object on stdout,
/// so callers parsing output never have to scrape stderr.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ExitCode {
    if json_mode {
        let payload = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    ExitCode::FAILURE
}
