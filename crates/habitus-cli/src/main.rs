//! Habitus CLI Application
//!
//! Command-line interface and MCP server for the Habitus task and habit
//! tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ListArgs};
use habitus_core::EngineBuilder;
use log::info;
use mcp::{run_stdio_server, HabitusMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let engine = EngineBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open the item database")?;

    info!("Habitus started");

    if let Some(Serve) = command {
        info!("Starting Habitus MCP server");
        return run_stdio_server(HabitusMcpServer::new(engine))
            .await
            .context("MCP server failed");
    }

    let mut cli = Cli::new(engine, TerminalRenderer::new(!no_color));
    match command {
        Some(List(args)) => cli.list(args),
        Some(Add(args)) => cli.add(args),
        Some(Edit(args)) => cli.edit(args),
        Some(Toggle(args)) => cli.toggle(args),
        Some(Delete(args)) => cli.delete(args),
        Some(Show(args)) => cli.show(args),
        Some(Seed) => cli.seed(),
        Some(Serve) | None => cli.list(ListArgs::default()),
    }
}
