//! Display implementations for domain models.
//!
//! `Item` renders as its detail view; the compact list form lives with
//! [`Items`](super::Items).

use std::fmt;

use super::datetime::{self, DueDate, LocalDateTime};
use crate::models::{Item, ItemFilter, ItemType, Priority};

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for ItemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Item {
    /// Completion icon used in both the list and the detail view.
    pub(super) fn status_icon(&self) -> &'static str {
        if self.is_complete {
            "✓"
        } else {
            "○"
        }
    }

    pub(super) fn status_label(&self) -> &'static str {
        if self.is_complete {
            "Completed"
        } else {
            "Not completed"
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{} {}", self.status_icon(), self.status_label())?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "## Notes")?;
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        writeln!(f)?;
        writeln!(f, "## Details")?;
        writeln!(f)?;
        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f, "- **Type**: {}", self.item_type)?;
        writeln!(f, "- **Priority**: {}", self.priority)?;
        if let Some(date) = self.due_date {
            let due = DueDate {
                date,
                open: !self.is_complete,
                today: datetime::today(),
            };
            writeln!(f, "- **Due**: {due}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;

        Ok(())
    }
}
