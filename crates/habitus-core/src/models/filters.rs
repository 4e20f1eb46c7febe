//! Filter, predicate and sort types for querying items.

use std::{cmp::Ordering, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Item, ItemType};

/// The filter selection shown to the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ItemFilter {
    /// Every item
    #[default]
    All,
    /// Items of type task
    Tasks,
    /// Items of type habit
    Habits,
    /// Completed items
    Completed,
    /// Items not yet completed
    Incomplete,
}

impl ItemFilter {
    /// Every filter, in menu order.
    pub const ALL: [ItemFilter; 5] = [
        ItemFilter::All,
        ItemFilter::Tasks,
        ItemFilter::Habits,
        ItemFilter::Completed,
        ItemFilter::Incomplete,
    ];

    /// Compiles the filter into the predicate handed to the store.
    ///
    /// `All` has no predicate: the store returns every item.
    pub fn predicate(self) -> Option<Predicate> {
        match self {
            ItemFilter::All => None,
            ItemFilter::Tasks => Some(Predicate::TypeIs(ItemType::Task)),
            ItemFilter::Habits => Some(Predicate::TypeIs(ItemType::Habit)),
            ItemFilter::Completed => Some(Predicate::CompletionIs(true)),
            ItemFilter::Incomplete => Some(Predicate::CompletionIs(false)),
        }
    }

    /// Returns true when `item` belongs in a snapshot taken under this filter.
    pub fn matches(self, item: &Item) -> bool {
        self.predicate().map_or(true, |p| p.matches(item))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemFilter::All => "all",
            ItemFilter::Tasks => "tasks",
            ItemFilter::Habits => "habits",
            ItemFilter::Completed => "completed",
            ItemFilter::Incomplete => "incomplete",
        }
    }

    /// Heading used when listing items under this filter.
    pub fn label(&self) -> &'static str {
        match self {
            ItemFilter::All => "All Items",
            ItemFilter::Tasks => "Tasks",
            ItemFilter::Habits => "Habits",
            ItemFilter::Completed => "Completed",
            ItemFilter::Incomplete => "Incomplete",
        }
    }
}

impl FromStr for ItemFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ItemFilter::All),
            "tasks" | "task" => Ok(ItemFilter::Tasks),
            "habits" | "habit" => Ok(ItemFilter::Habits),
            "completed" | "complete" | "done" => Ok(ItemFilter::Completed),
            "incomplete" | "open" | "todo" => Ok(ItemFilter::Incomplete),
            _ => Err(format!("Invalid filter: {s}")),
        }
    }
}

/// A boolean condition selecting a subset of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `type == <kind>`
    TypeIs(ItemType),
    /// `is_complete == <flag>`
    CompletionIs(bool),
}

impl Predicate {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Predicate::TypeIs(kind) => item.item_type == *kind,
            Predicate::CompletionIs(flag) => item.is_complete == *flag,
        }
    }
}

/// Item field usable as a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Priority,
    CreatedAt,
    UpdatedAt,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One key of a multi-key sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub const fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub const fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Compares two items on this key alone.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        let ordering = match self.field {
            SortField::Priority => a.priority.cmp(&b.priority),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::Title => a.title.cmp(&b.title),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Compares two items key by key, falling through on ties.
    pub fn compare_all(keys: &[SortKey], a: &Item, b: &Item) -> Ordering {
        keys.iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// The fixed ordering of every snapshot: highest priority first, then newest
/// first.
pub const DEFAULT_SORT: [SortKey; 2] = [
    SortKey::descending(SortField::Priority),
    SortKey::descending(SortField::CreatedAt),
];
