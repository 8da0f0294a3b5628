use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod cli;
mod command;
mod config;
mod materials;
mod metadata;
mod session;

use cli::{Cli, Commands};
use command::{run_login, run_logout, run_preview, run_status, run_sync};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Sync { dir, registry }) => {
            run_sync(dir, registry).await?;
        }
        Some(Commands::Preview { dir, verbose }) => {
            run_preview(dir, verbose).await?;
        }
        Some(Commands::Login { token, config_dir }) => {
            run_login(token, config_dir).await?;
        }
        Some(Commands::Logout) => {
            run_logout().await?;
        }
        Some(Commands::Status) => {
            run_status().await?;
        }
        None => {
            // No command specified, show help
            eprintln!("No command specified. Use --help for usage information.");
            eprintln!("Use 'atelier login' to authenticate or 'atelier sync' to push materials.");
        }
    }

    Ok(())
}
