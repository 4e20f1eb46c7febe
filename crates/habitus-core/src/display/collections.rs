//! Collection wrapper types for displaying lists of items.

use std::{fmt, ops::Index};

use super::datetime::{self, DueDate};
use crate::models::Item;

/// Newtype wrapper for displaying an ordered list of items.
///
/// Each item renders on one line: completion icon, title, priority markers,
/// type, due date and short id. The list keeps the order it was given, so
/// wrapping an engine snapshot shows the snapshot's order. An empty list
/// renders the "No Items" empty state.
///
/// # Examples
///
/// ```rust
/// use habitus_core::{
///     display::Items,
///     models::{Item, ItemId, ItemType, Priority},
/// };
/// use jiff::Timestamp;
///
/// let now = Timestamp::now();
/// let item = Item {
///     id: ItemId::new(),
///     title: "Complete Project".to_string(),
///     item_type: ItemType::Task,
///     notes: None,
///     priority: Priority::High,
///     due_date: None,
///     is_complete: false,
///     created_at: now,
///     updated_at: now,
/// };
/// let short = item.id.short();
///
/// let output = format!("{}", Items(vec![item]));
/// assert!(output.contains("**Complete Project** !!!"));
/// assert!(output.contains(&short));
/// ```
pub struct Items(pub Vec<Item>);

impl Items {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the item at the given index.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.0.get(index)
    }

    /// Get an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }
}

impl Index<usize> for Items {
    type Output = Item;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Items {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Item>> for Items {
    fn from(items: Vec<Item>) -> Self {
        Self(items)
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No Items")?;
            writeln!(f)?;
            return writeln!(
                f,
                "Start by adding your first task or habit to begin tracking your progress."
            );
        }

        let today = datetime::today();
        for item in &self.0 {
            write!(f, "- {} ", item.status_icon())?;
            if item.is_complete {
                write!(f, "~~{}~~", item.title)?;
            } else {
                write!(f, "**{}**", item.title)?;
            }
            if item.priority.value() > 0 {
                write!(f, " {}", item.priority.markers())?;
            }
            write!(f, " · {}", item.item_type)?;
            if let Some(date) = item.due_date {
                let due = DueDate {
                    date,
                    open: !item.is_complete,
                    today,
                };
                write!(f, " · due {due}")?;
            }
            writeln!(f, " · `{}`", item.id.short())?;
        }
        Ok(())
    }
}
