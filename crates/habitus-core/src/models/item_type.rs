//! Item kind enumeration.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of item kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// One-off piece of work
    #[default]
    Task,

    /// Recurring routine
    Habit,
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "task" => Ok(ItemType::Task),
            "habit" => Ok(ItemType::Habit),
            _ => Err(format!("Invalid item type: {s}")),
        }
    }
}

impl ItemType {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Task => "task",
            ItemType::Habit => "habit",
        }
    }
}
