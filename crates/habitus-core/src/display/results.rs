//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper prints a one-line confirmation naming the item's type and
//! short id, followed (for create and update) by the item's detail view.

use std::fmt;

use crate::models::Item;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use habitus_core::{
///     display::CreateResult,
///     models::{Item, ItemId, ItemType, Priority},
/// };
/// use jiff::Timestamp;
///
/// let now = Timestamp::now();
/// let item = Item {
///     id: ItemId::new(),
///     title: "Exercise".to_string(),
///     item_type: ItemType::Habit,
///     notes: Some("30 minutes of cardio".to_string()),
///     priority: Priority::Medium,
///     due_date: None,
///     is_complete: false,
///     created_at: now,
///     updated_at: now,
/// };
///
/// let output = CreateResult::new(item.clone()).to_string();
/// assert!(output.starts_with(&format!("Created habit with ID: {}", item.id.short())));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created {} with ID: {}",
            self.resource.item_type,
            self.resource.id.short()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can track and display specific changes made during the update,
/// providing users with clear feedback about what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl UpdateResult<Item> {
    /// Describes, field by field, how `after` differs from `before`.
    pub fn diff(before: &Item, after: Item) -> Self {
        let mut changes = Vec::new();
        if before.title != after.title {
            changes.push(format!("Title: {} → {}", before.title, after.title));
        }
        if before.item_type != after.item_type {
            changes.push(format!("Type: {} → {}", before.item_type, after.item_type));
        }
        if before.notes != after.notes {
            changes.push(match &after.notes {
                Some(_) => "Notes updated".to_string(),
                None => "Notes removed".to_string(),
            });
        }
        if before.priority != after.priority {
            changes.push(format!("Priority: {} → {}", before.priority, after.priority));
        }
        if before.due_date != after.due_date {
            changes.push(match after.due_date {
                Some(date) => format!("Due: {date}"),
                None => "Due date removed".to_string(),
            });
        }
        if before.is_complete != after.is_complete {
            changes.push(
                if after.is_complete {
                    "Marked as completed"
                } else {
                    "Marked as not completed"
                }
                .to_string(),
            );
        }
        Self::with_changes(after, changes)
    }
}

impl fmt::Display for UpdateResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Updated {} with ID: {}",
            self.resource.item_type,
            self.resource.id.short()
        )?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            self.resource.item_type,
            self.resource.title,
            self.resource.id.short()
        )
    }
}
