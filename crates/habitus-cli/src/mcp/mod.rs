//! MCP server implementation for Habitus
//!
//! Exposes the query engine's operations as Model Context Protocol tools over
//! stdio. Every tool call locks the shared engine, so calls are serialized
//! exactly as they are in the CLI.

use std::sync::Arc;

use anyhow::Result;
use habitus_core::{Database, QueryEngine};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{AddItem, Id, ListItems, McpResult, UpdateItem};

const INSTRUCTIONS: &str = r#"Habitus tracks one-off tasks and recurring habits.

## Items
Every item has a title, a type (task or habit), optional notes, a priority from 0 (none) to 3 (high), an optional due date (YYYY-MM-DD) and a completion flag.

Lists are always ordered by priority (highest first), then newest first.

## Identifying items
Tools that take an `id` accept the full id or any unique prefix of it, such as the 8-character short id shown in listings.

## Tools
- `list_items`: list items; filter is one of all, tasks, habits, completed, incomplete
- `add_item`: create a task or habit (title required)
- `update_item`: change only the given fields; use clear_notes / clear_due_date to remove them
- `toggle_item`: mark an item completed, or not completed again
- `show_item`: all details of one item
- `delete_item`: permanently delete an item"#;

/// MCP server for Habitus
#[derive(Clone)]
pub struct HabitusMcpServer {
    engine: Arc<Mutex<QueryEngine<Database>>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl HabitusMcpServer {
    /// Create a new Habitus MCP server
    pub fn new(engine: QueryEngine<Database>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.engine.clone())
    }

    #[tool(
        name = "list_items",
        description = "List tasks and habits, highest priority first and newest first within a priority. Filter with 'all' (default), 'tasks', 'habits', 'completed' or 'incomplete'. Each line shows completion, title, priority markers, type, due date and the short id."
    )]
    async fn list_items(&self, params: Parameters<ListItems>) -> McpResult {
        self.handlers().list_items(params).await
    }

    #[tool(
        name = "add_item",
        description = "Create a new item. Requires a non-blank title. Optional: type ('task' default or 'habit'), notes, priority (0-3, default 0) and due_date (YYYY-MM-DD). New items start not completed. Returns the new item with its id."
    )]
    async fn add_item(&self, params: Parameters<AddItem>) -> McpResult {
        self.handlers().add_item(params).await
    }

    #[tool(
        name = "update_item",
        description = "Change an existing item. Identify it with id (full or unique prefix). Only the fields provided change: title, type, notes, priority, due_date. Set clear_notes or clear_due_date to true to remove those. The title cannot be made blank."
    )]
    async fn update_item(&self, params: Parameters<UpdateItem>) -> McpResult {
        self.handlers().update_item(params).await
    }

    #[tool(
        name = "toggle_item",
        description = "Flip an item's completion: a not completed item becomes completed and vice versa. Identify it with id (full or unique prefix)."
    )]
    async fn toggle_item(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().toggle_item(params).await
    }

    #[tool(
        name = "delete_item",
        description = "Permanently delete an item. This cannot be undone. Identify it with id (full or unique prefix)."
    )]
    async fn delete_item(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_item(params).await
    }

    #[tool(
        name = "show_item",
        description = "Show every detail of one item: title, completion, notes, type, priority, due date, and creation and update times. Identify it with id (full or unique prefix)."
    )]
    async fn show_item(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_item(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for HabitusMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "habitus".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: HabitusMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Habitus MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
