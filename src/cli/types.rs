//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use crate::cli::commands::rename::RenameArgs;
use crate::cli::commands::sync::SyncArgs;

#[derive(Parser)]
#[command(name = "fixversion")]
#[command(
    about = "Keep an issue tracker's release record in sync with a git tag",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ensure the tracker release exists and attach changelog issues to it
    Sync(SyncArgs),

    /// Rename the source host's release object for a tag
    RenameRelease(RenameArgs),
}
