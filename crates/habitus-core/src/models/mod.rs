//! Data models for tracked items.
//!
//! An [`Item`] is the only entity in Habitus: a task or a habit with a title,
//! optional notes, a [`Priority`] and an optional due date. Display
//! implementations for these models live in [`crate::display::models`] so the
//! model definitions stay free of presentation logic.
//!
//! # Querying
//!
//! The types in [`filters`] describe what the query engine asks of a store:
//!
//! - [`ItemFilter`]: the user-facing selection (all, tasks, habits, completed,
//!   incomplete)
//! - [`Predicate`]: the condition a filter compiles to (`None` for `all`)
//! - [`SortKey`]: one ordering key; the engine always sorts by
//!   [`DEFAULT_SORT`]
//!
//! # Examples
//!
//! ```rust
//! use habitus_core::models::{ItemFilter, ItemType, Predicate};
//!
//! assert_eq!(ItemFilter::All.predicate(), None);
//! assert_eq!(
//!     ItemFilter::Habits.predicate(),
//!     Some(Predicate::TypeIs(ItemType::Habit))
//! );
//! assert_eq!(
//!     ItemFilter::Incomplete.predicate(),
//!     Some(Predicate::CompletionIs(false))
//! );
//! ```

pub mod filters;
pub mod item;
pub mod item_type;
pub mod priority;


pub use filters::{ItemFilter, Predicate, SortDirection, SortField, SortKey, DEFAULT_SORT};
pub use item::{Item, ItemId};
pub use item_type::ItemType;
pub use priority::Priority;
