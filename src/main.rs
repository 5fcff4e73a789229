use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mlog::model::{Credentials, UserId};
use mlog::snapshot::Snapshot;
use mlog::{logging, renderer, report};

#[derive(Parser)]
#[command(name = "mlog")]
#[command(about = "Message logger statistics and feed tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the statistics report over a full snapshot
    Stats {
        /// Path to the JSON snapshot exported by the data-access layer
        #[arg(long)]
        snapshot: PathBuf,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Assemble the feed for one user
    Feed {
        /// Path to the JSON snapshot exported by the data-access layer
        #[arg(long)]
        snapshot: PathBuf,

        /// User id whose feed to assemble
        #[arg(long)]
        user_id: u64,

        /// Emit the feed as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check credentials against a snapshot and print the matching user id
    Login {
        /// Path to the JSON snapshot exported by the data-access layer
        #[arg(long)]
        snapshot: PathBuf,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { snapshot, json } => {
            let snapshot = Snapshot::load_from_file(&snapshot)?;
            let report =
                report::compute_statistics(snapshot.all_users(), snapshot.all_messages())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", renderer::text::render(&report)?);
            }
        }
        Commands::Feed {
            snapshot,
            user_id,
            json,
        } => {
            let snapshot = Snapshot::load_from_file(&snapshot)?;
            let feed = snapshot.feed_for(UserId(user_id))?;
            tracing::info!(user = user_id, entries = feed.len(), "feed assembled");
            if json {
                println!("{}", serde_json::to_string_pretty(&feed)?);
            } else {
                print!("{}", renderer::text::render_feed(&feed, &snapshot)?);
            }
        }
        Commands::Login {
            snapshot,
            email,
            password,
        } => {
            let snapshot = Snapshot::load_from_file(&snapshot)?;
            let credentials = Credentials { email, password };
            let user = snapshot.authenticate(&credentials)?;
            println!("{}", user.id);
        }
    }

    Ok(())
}
