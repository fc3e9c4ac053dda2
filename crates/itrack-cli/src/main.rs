//! itrack - terminal client for the itrack issue tracker API
//!
//! Every command is a plain HTTP call against the REST API; nothing is
//! stored locally except the in-flight edit draft.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod client;
mod commands;

use client::ApiClient;

#[derive(Parser)]
#[command(name = "itrack")]
#[command(about = "Terminal client for the itrack issue tracker")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL
    #[arg(long, global = true, env = "ITRACK_API_URL", default_value = "http://localhost:5000")]
    api: String,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List issues
    List,

    /// Show issue details
    Show {
        /// Issue ID
        id: String,
    },

    /// Create a new issue
    Create {
        /// Issue title
        title: String,

        /// Description
        #[arg(short, long)]
        description: Option<String>,

        /// Initial status (Open, "In Progress", Closed)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Edit an issue (changes are drafted locally, saved in one update)
    Edit {
        /// Issue ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New status (Open, "In Progress", Closed)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Delete an issue
    Delete {
        /// Issue ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.api);

    match cli.command {
        Commands::List => commands::list(&client, cli.json).await,
        Commands::Show { id } => commands::show(&client, &id, cli.json).await,
        Commands::Create {
            title,
            description,
            status,
        } => commands::create(&client, &title, description, status, cli.json).await,
        Commands::Edit {
            id,
            title,
            description,
            status,
        } => commands::edit(&client, &id, title, description, status, cli.json).await,
        Commands::Delete { id } => commands::delete(&client, &id).await,
    }
}
