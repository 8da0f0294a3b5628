use clap::{Parser, Subcommand};

/// Atelier CLI - publish design materials to a registry
#[derive(Parser)]
#[command(name = "atelier")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Push the local materials inventory to the project's site
    Sync {
        /// Project directory (defaults to current directory)
        #[arg(short = 'd', long)]
        dir: Option<String>,

        /// Registry base URL override
        #[arg(long, env = "ATELIER_REGISTRY_URL")]
        registry: Option<String>,
    },
    /// Show the batches a sync would upload (dry-run)
    Preview {
        /// Project directory (defaults to current directory)
        #[arg(short = 'd', long)]
        dir: Option<String>,

        /// List every identifier, not just the summary
        #[arg(short, long)]
        verbose: bool,
    },
    /// Store an access token for the registry
    Login {
        /// Access token; prompted for when omitted
        #[arg(long)]
        token: Option<String>,

        /// Directory to store Atelier config files (session data, etc.). Defaults to ~/.atelier
        #[arg(long)]
        config_dir: Option<String>,
    },
    /// Remove the stored session
    Logout,
    /// Show current session and sync status
    Status,
}
