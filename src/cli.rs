use clap::{Parser, Subcommand};

use crate::commands::{add, auth, browse, edit, learn, list, quiz, remove, show, stats};

#[derive(Debug, Parser)]
#[command(name = "ecobrand", version)]
#[command(about = "Sustainable fashion brand catalog", long_about = None)]
pub struct Cli {
    /// Record store collection URL (default: http://localhost:3001/brands)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search, filter and sort the brand catalog
    List(list::Args),

    /// Show one brand in detail
    Show(show::Args),

    /// Show catalog statistics
    Stats(stats::Args),

    /// Add a new brand
    Add(add::Args),

    /// Edit an existing brand
    Edit(edit::Args),

    /// Delete a brand
    Remove(remove::Args),

    /// Sign up, sign in or sign out
    Auth(auth::Args),

    /// Read about sustainable fashion
    Learn,

    /// Take the sustainability quiz
    Quiz(quiz::Args),

    /// Browse the catalog interactively
    Browse,
}
