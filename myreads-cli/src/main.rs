//! MyReads CLI - command-line front end for the shelf store
//!
//! Plays the role of the routed views: `shelves` is the landing page,
//! `search` is the search page, and clap's usage error covers everything
//! else.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use myreads_core::Shelf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate a shelf argument (wire names, case-insensitive)
fn parse_shelf(s: &str) -> Result<Shelf, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "myreads")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the three reading shelves
    Shelves {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the book catalog
    Search {
        /// Free-text query
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a book between shelves
    Move {
        /// Book ID
        book_id: String,

        /// Shelf the book is currently on (currentlyReading, wantToRead, read, none)
        #[arg(value_parser = parse_shelf)]
        from: Shelf,

        /// Shelf to move the book to
        #[arg(value_parser = parse_shelf)]
        to: Shelf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "myreads_cli=debug,myreads_core=debug"
    } else {
        "myreads_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Shelves { json } => commands::shelves(json).await,

        Commands::Search { query, json } => commands::search(&query, json).await,

        Commands::Move { book_id, from, to } => commands::move_book(&book_id, from, to).await,
    }
}
