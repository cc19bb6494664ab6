use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newswire_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "newswire")]
#[command(author, version, about = "RSS headline collector and feed store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the store HTTP server
    Serve {
        /// Bind address, overriding the configured one
        #[arg(long)]
        addr: Option<String>,
    },
    /// Run a single collector pass
    Collect,
    /// Print the most recent posts
    Feed {
        /// Maximum number of posts to print
        #[arg(short = 'n', long)]
        limit: Option<u32>,
    },
    /// Background daemon running collector passes on a schedule
    Daemon {
        #[command(subcommand)]
        action: DaemonAction,
    },
}

#[derive(Subcommand)]
enum DaemonAction {
    /// Start the background daemon
    Start,
    /// Stop the background daemon
    Stop,
    /// Check daemon status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Commands::Serve { addr } => commands::serve::run(config, addr).await,
        Commands::Collect => commands::collect::run(&config).await,
        Commands::Feed { limit } => commands::feed::run(&config, limit).await,
        Commands::Daemon { action } => match action {
            DaemonAction::Start => commands::daemon::start(config).await,
            DaemonAction::Stop => commands::daemon::stop().await,
            DaemonAction::Status => commands::daemon::status().await,
        },
    }
}
