//! fixversion CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fixversion::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sync(args) => fixversion::cli::commands::sync::execute(args, cli.json).await,
        Commands::RenameRelease(args) => {
            fixversion::cli::commands::rename::execute(args, cli.json).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fixversion::cli::handle_error(&err, cli.json),
    }
}
