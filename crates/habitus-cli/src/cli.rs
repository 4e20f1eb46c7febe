//! Command-line argument wrappers and command handlers
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, which stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → QueryEngine
//! ```
//!
//! [`Cli`] runs a parsed command against the engine and renders the result
//! through the [`TerminalRenderer`].

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use habitus_core::{
    display::{datetime, CreateResult, DeleteResult, Items, OperationStatus, UpdateResult},
    models::{ItemFilter, ItemType, Priority},
    params::{ItemDraft, UpdateItem},
    samples, Database, QueryEngine,
};
use jiff::civil::Date;
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Command-line representation of the list filters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    /// Every item
    #[default]
    All,
    /// Only tasks
    Tasks,
    /// Only habits
    Habits,
    /// Only completed items
    Completed,
    /// Only items not yet completed
    Incomplete,
}

impl From<FilterArg> for ItemFilter {
    fn from(val: FilterArg) -> Self {
        match val {
            FilterArg::All => ItemFilter::All,
            FilterArg::Tasks => ItemFilter::Tasks,
            FilterArg::Habits => ItemFilter::Habits,
            FilterArg::Completed => ItemFilter::Completed,
            FilterArg::Incomplete => ItemFilter::Incomplete,
        }
    }
}

/// Command-line representation of the item types
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    /// A one-off task
    #[default]
    Task,
    /// A recurring habit
    Habit,
}

impl From<TypeArg> for ItemType {
    fn from(val: TypeArg) -> Self {
        match val {
            TypeArg::Task => ItemType::Task,
            TypeArg::Habit => ItemType::Habit,
        }
    }
}

/// List items
#[derive(Args, Default)]
pub struct ListArgs {
    #[arg(short, long, value_enum, default_value_t = FilterArg::All, help = "Which items to show")]
    pub filter: FilterArg,
}

/// Add a new item
///
/// CLI wrapper for ItemDraft. The title must contain at least one
/// non-whitespace character.
#[derive(Args)]
pub struct AddArgs {
    /// Title of the item
    pub title: String,
    #[arg(short = 't', long = "type", value_enum, default_value_t = TypeArg::Task, help = "Kind of item")]
    pub item_type: TypeArg,
    #[arg(short, long, help = "Optional free-form notes")]
    pub notes: Option<String>,
    #[arg(
        short,
        long,
        default_value = "none",
        help = "Priority: 0-3 or none, low, medium, high"
    )]
    pub priority: Priority,
    #[arg(short, long, help = "Due date as YYYY-MM-DD")]
    pub due: Option<Date>,
}

impl From<AddArgs> for ItemDraft {
    fn from(val: AddArgs) -> Self {
        ItemDraft {
            title: val.title,
            item_type: val.item_type.into(),
            notes: val.notes,
            priority: val.priority,
            due_date: val.due,
        }
    }
}

/// Edit an existing item
///
/// Only the given fields change; everything else keeps its current value.
#[derive(Args)]
pub struct EditArgs {
    #[arg(help = "Item id or unique id prefix")]
    pub id: String,
    #[arg(long, help = "New title")]
    pub title: Option<String>,
    #[arg(short = 't', long = "type", value_enum, help = "New kind of item")]
    pub item_type: Option<TypeArg>,
    #[arg(short, long, conflicts_with = "clear_notes", help = "New notes")]
    pub notes: Option<String>,
    #[arg(short, long, help = "New priority: 0-3 or none, low, medium, high")]
    pub priority: Option<Priority>,
    #[arg(short, long, conflicts_with = "clear_due", help = "New due date as YYYY-MM-DD")]
    pub due: Option<Date>,
    #[arg(long, help = "Remove the notes")]
    pub clear_notes: bool,
    #[arg(long, help = "Remove the due date")]
    pub clear_due: bool,
}

impl From<EditArgs> for UpdateItem {
    fn from(val: EditArgs) -> Self {
        UpdateItem {
            id: val.id,
            title: val.title,
            item_type: val.item_type.map(Into::into),
            notes: val.notes,
            priority: val.priority,
            due_date: val.due,
            clear_notes: val.clear_notes,
            clear_due_date: val.clear_due,
        }
    }
}

/// Address a single item
#[derive(Args)]
pub struct ItemRefArgs {
    #[arg(help = "Item id or unique id prefix")]
    pub id: String,
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs CLI commands against a query engine.
pub struct Cli {
    engine: QueryEngine<Database>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(engine: QueryEngine<Database>, renderer: TerminalRenderer) -> Self {
        Self { engine, renderer }
    }

    pub fn list(&mut self, args: ListArgs) -> Result<()> {
        let filter = ItemFilter::from(args.filter);
        debug!("list: {}", filter.as_str());
        self.engine.set_filter(filter)?;

        let items = self.engine.items();
        if items.is_empty() {
            return self.renderer.render(&Items(items).to_string());
        }
        self.renderer.render(&format!(
            "# {} ({})\n\n{}",
            filter,
            items.len(),
            Items(items)
        ))
    }

    pub fn add(&mut self, args: AddArgs) -> Result<()> {
        let item = self.engine.add(args.into())?;
        self.renderer.render(&CreateResult::new(item).to_string())
    }

    pub fn edit(&mut self, args: EditArgs) -> Result<()> {
        let changes = UpdateItem::from(args);
        if changes.is_empty() {
            bail!("Nothing to change: pass at least one of --title, --type, --notes, --priority, --due, --clear-notes, --clear-due");
        }

        let before = self.engine.resolve(&changes.id)?;
        let after = self.engine.update(before.id, changes.apply_to(&before))?;
        self.renderer
            .render(&UpdateResult::diff(&before, after).to_string())
    }

    pub fn toggle(&mut self, args: ItemRefArgs) -> Result<()> {
        let item = self.engine.resolve(&args.id)?;
        let item = self.engine.toggle_completion(item.id)?;
        let state = if item.is_complete {
            "completed"
        } else {
            "not completed"
        };
        let status = OperationStatus::success(format!(
            "Marked {} '{}' as {state}",
            item.item_type, item.title
        ));
        self.renderer.render(&status.to_string())
    }

    pub fn delete(&mut self, args: ItemRefArgs) -> Result<()> {
        let item = self.engine.resolve(&args.id)?;
        let removed = self.engine.delete(item.id)?;
        self.renderer.render(&DeleteResult::new(removed).to_string())
    }

    pub fn show(&mut self, args: ItemRefArgs) -> Result<()> {
        let item = self.engine.resolve(&args.id)?;
        self.renderer.render(&item.to_string())
    }

    pub fn seed(&mut self) -> Result<()> {
        let added = samples::seed(&mut self.engine, datetime::today())?;
        let status = OperationStatus::success(format!("Added {} sample items", added.len()));
        self.renderer.render(&status.to_string())?;
        self.list(ListArgs::default())
    }
}
