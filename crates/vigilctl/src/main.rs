//! Vigil Control - CLI client for the Vigil report desk.
//!
//! Chat with the assistant, file reports, and browse tickets.

mod chat_api;
mod client;
mod commands;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vigilctl")]
#[command(about = "Vigil - suspicious activity report desk", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Talk to the assistant
    Chat,

    /// File a new report
    Report {
        /// Issue type (phishing, strange-login, lost-device, ...) or free text
        #[arg(long)]
        issue_type: String,

        /// Short summary
        #[arg(long)]
        title: String,

        /// What happened
        #[arg(long)]
        description: String,

        /// Where it happened
        #[arg(long)]
        location: Option<String>,
    },

    /// List filed reports
    Reports {
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Filter by status (applied to the fetched page only)
        #[arg(long)]
        status: Option<String>,

        /// Free-text search (applied to the fetched page only)
        #[arg(long)]
        search: Option<String>,
    },

    /// Show daemon health
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat => commands::chat().await,
        Commands::Report {
            issue_type,
            title,
            description,
            location,
        } => commands::report(issue_type, title, description, location).await,
        Commands::Reports {
            page,
            limit,
            status,
            search,
        } => commands::reports(page, limit, status, search).await,
        Commands::Status => commands::status().await,
    }
}
