//! Item model definition and identifier type.

use std::{fmt, str::FromStr};

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ItemType, Priority};

/// Unique, immutable identifier of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The first eight hex digits, used as a short handle in listings.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ItemId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single task or habit record.
///
/// Field names serialize in the app's durable schema spelling (`type`,
/// `dueDate`, `isComplete`, `createdAt`, `updatedAt`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned at creation
    pub id: ItemId,

    /// Short non-empty title
    pub title: String,

    /// Whether this is a one-off task or a recurring habit
    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Priority from None (0) to High (3)
    pub priority: Priority,

    /// Optional due date (calendar date, no time of day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,

    /// Completion flag
    pub is_complete: bool,

    /// Timestamp when the item was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the item was last changed (UTC)
    pub updated_at: Timestamp,
}

impl Item {
    /// Returns true when the item's due date lies before `today` and the item
    /// is still open.
    pub fn is_overdue(&self, today: Date) -> bool {
        !self.is_complete && self.due_date.is_some_and(|due| due < today)
    }
}
