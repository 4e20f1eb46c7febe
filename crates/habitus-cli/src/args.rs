use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AddArgs, EditArgs, ItemRefArgs, ListArgs};

/// Habitus: track one-off tasks and recurring habits from the command line
///
/// Items are stored in a local SQLite database and always listed by priority
/// (highest first), then newest first. Running `habitus` without a command
/// lists every item. The `serve` command exposes the same operations as an
/// MCP (Model Context Protocol) server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "habitus")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/habitus/habitus.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Habitus CLI
///
/// Commands that take an `ID` accept either the full item id or any unique
/// prefix of it, such as the 8-character short id shown in listings.
#[derive(Subcommand)]
pub enum Commands {
    /// List items, optionally filtered
    #[command(alias = "ls")]
    List(ListArgs),
    /// Add a new task or habit
    #[command(alias = "a")]
    Add(AddArgs),
    /// Change an item's title, type, notes, priority or due date
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Mark an item as completed, or as not completed again
    #[command(alias = "t")]
    Toggle(ItemRefArgs),
    /// Permanently delete an item
    #[command(alias = "rm")]
    Delete(ItemRefArgs),
    /// Show all details of an item
    #[command(alias = "s")]
    Show(ItemRefArgs),
    /// Add a handful of sample tasks and habits
    Seed,
    /// Start the MCP server
    Serve,
}
