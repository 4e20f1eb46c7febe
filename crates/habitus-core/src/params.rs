//! Parameter structures for Habitus operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. Interface layers wrap or convert
//! them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schemas for MCP tool parameters are generated only when the `schema`
//! feature is enabled.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{Item, ItemFilter, ItemType, Priority};

/// Generic parameters for operations addressing a single item.
///
/// `id` is either a full item id or a unique prefix of one (the short id shown
/// in listings).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// Item id or unique id prefix
    pub id: String,
}

/// Every user-editable field of an item.
///
/// Used as-is to add an item, and as the full replacement value when an item
/// is updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ItemDraft {
    /// Title of the item (required, must not be blank)
    pub title: String,
    /// "task" (default) or "habit"
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    /// Optional free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Priority from 0 (none) to 3 (high)
    #[serde(default)]
    pub priority: Priority,
    /// Optional due date as YYYY-MM-DD
    #[serde(default)]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub due_date: Option<Date>,
}

impl ItemDraft {
    /// Draft with only a title set; every other field takes its default.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Captures the editable fields of an existing item.
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            item_type: item.item_type,
            notes: item.notes.clone(),
            priority: item.priority,
            due_date: item.due_date,
        }
    }
}

/// Parameters for adding a new item.
pub type AddItem = ItemDraft;

/// Parameters for editing an item.
///
/// Fields left as `None` keep their current value. Notes and due date can be
/// removed explicitly with the `clear_*` flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateItem {
    /// Item id or unique id prefix
    pub id: String,
    /// New title
    pub title: Option<String>,
    /// New type ("task" or "habit")
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
    /// New notes
    pub notes: Option<String>,
    /// New priority (0-3)
    pub priority: Option<Priority>,
    /// New due date as YYYY-MM-DD
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub due_date: Option<Date>,
    /// Remove the notes
    #[serde(default)]
    pub clear_notes: bool,
    /// Remove the due date
    #[serde(default)]
    pub clear_due_date: bool,
}

impl UpdateItem {
    /// Merges these changes over `item`, producing the complete replacement
    /// draft the engine's update expects.
    ///
    /// ```rust
    /// use habitus_core::params::{ItemDraft, UpdateItem};
    /// # use habitus_core::models::{Item, ItemId, ItemType, Priority};
    /// # let now = jiff::Timestamp::now();
    /// # let item = Item {
    /// #     id: ItemId::new(),
    /// #     title: "Read".to_string(),
    /// #     item_type: ItemType::Habit,
    /// #     notes: Some("30 pages".to_string()),
    /// #     priority: Priority::Low,
    /// #     due_date: None,
    /// #     is_complete: false,
    /// #     created_at: now,
    /// #     updated_at: now,
    /// # };
    ///
    /// let changes = UpdateItem {
    ///     priority: Some(Priority::High),
    ///     clear_notes: true,
    ///     ..Default::default()
    /// };
    /// let draft = changes.apply_to(&item);
    /// assert_eq!(draft.title, "Read");
    /// assert_eq!(draft.priority, Priority::High);
    /// assert_eq!(draft.notes, None);
    /// ```
    pub fn apply_to(&self, item: &Item) -> ItemDraft {
        let mut draft = ItemDraft::from_item(item);
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(item_type) = self.item_type {
            draft.item_type = item_type;
        }
        if self.clear_notes {
            draft.notes = None;
        } else if let Some(notes) = &self.notes {
            draft.notes = Some(notes.clone());
        }
        if let Some(priority) = self.priority {
            draft.priority = priority;
        }
        if self.clear_due_date {
            draft.due_date = None;
        } else if let Some(due_date) = self.due_date {
            draft.due_date = Some(due_date);
        }
        draft
    }

    /// Returns true if applying these changes would leave an item untouched.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.item_type.is_none()
            && self.notes.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && !self.clear_notes
            && !self.clear_due_date
    }
}

/// Parameters for listing items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListItems {
    /// One of all (default), tasks, habits, completed, incomplete
    #[serde(default)]
    pub filter: ItemFilter,
}
