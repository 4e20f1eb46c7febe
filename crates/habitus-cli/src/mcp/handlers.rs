//! MCP tool handlers implementation

use std::sync::Arc;

use habitus_core::{
    display::{CreateResult, DeleteResult, Items, OperationStatus, UpdateResult},
    params as core, Database, QueryEngine,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Wraps a core parameter type in a transparent serde container and forwards
// its JSON schema, so the core types carry no MCP-specific code.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type AddItem = McpParams<core::AddItem>;
pub type UpdateItem = McpParams<core::UpdateItem>;
pub type ListItems = McpParams<core::ListItems>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    engine: Arc<Mutex<QueryEngine<Database>>>,
}

impl McpHandlers {
    pub fn new(engine: Arc<Mutex<QueryEngine<Database>>>) -> Self {
        Self { engine }
    }

    pub async fn list_items(&self, Parameters(params): Parameters<ListItems>) -> McpResult {
        debug!("list_items: {params:?}");
        let filter = params.as_ref().filter;

        let mut engine = self.engine.lock().await;
        engine.set_filter(filter).map_err(to_mcp_error)?;
        let items = engine.items();

        if items.is_empty() {
            return text(Items(items).to_string());
        }
        text(format!("# {} ({})\n\n{}", filter, items.len(), Items(items)))
    }

    pub async fn add_item(&self, Parameters(params): Parameters<AddItem>) -> McpResult {
        debug!("add_item: {params:?}");

        let item = self
            .engine
            .lock()
            .await
            .add(params.into_inner())
            .map_err(to_mcp_error)?;
        text(CreateResult::new(item).to_string())
    }

    pub async fn update_item(&self, Parameters(params): Parameters<UpdateItem>) -> McpResult {
        debug!("update_item: {params:?}");
        let changes = params.as_ref();
        if changes.is_empty() {
            return Err(ErrorData::invalid_params(
                "Nothing to change: provide at least one field to update",
                None,
            ));
        }

        let mut engine = self.engine.lock().await;
        let before = engine.resolve(&changes.id).map_err(to_mcp_error)?;
        let after = engine
            .update(before.id, changes.apply_to(&before))
            .map_err(to_mcp_error)?;
        text(UpdateResult::diff(&before, after).to_string())
    }

    pub async fn toggle_item(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("toggle_item: {params:?}");

        let mut engine = self.engine.lock().await;
        let item = engine.resolve(&params.as_ref().id).map_err(to_mcp_error)?;
        let item = engine.toggle_completion(item.id).map_err(to_mcp_error)?;

        let state = if item.is_complete {
            "completed"
        } else {
            "not completed"
        };
        text(
            OperationStatus::success(format!(
                "Marked {} '{}' (ID: {}) as {state}",
                item.item_type,
                item.title,
                item.id.short()
            ))
            .to_string(),
        )
    }

    pub async fn delete_item(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_item: {params:?}");

        let mut engine = self.engine.lock().await;
        let item = engine.resolve(&params.as_ref().id).map_err(to_mcp_error)?;
        let removed = engine.delete(item.id).map_err(to_mcp_error)?;
        text(DeleteResult::new(removed).to_string())
    }

    pub async fn show_item(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_item: {params:?}");

        let item = self
            .engine
            .lock()
            .await
            .resolve(&params.as_ref().id)
            .map_err(to_mcp_error)?;
        text(item.to_string())
    }
}
