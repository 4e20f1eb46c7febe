//! Record store abstraction.
//!
//! A [`RecordStore`] owns every [`Item`]. It knows how to persist items and
//! how to answer a query made of an optional [`Predicate`] and a list of
//! [`SortKey`]s; it knows nothing about filters, snapshots or validation,
//! which belong to the [`QueryEngine`](crate::engine::QueryEngine).
//!
//! Two implementations ship with the crate:
//!
//! - [`Database`](crate::db::Database): SQLite, the durable store
//! - [`MemoryStore`]: in-memory, with injectable read and write failures

use crate::{
    error::Result,
    models::{Item, ItemId, Predicate, SortKey},
};

pub mod memory;

pub use memory::MemoryStore;

/// Durable collection of items.
///
/// Every write is complete and durable when the call returns.
pub trait RecordStore {
    /// Returns every item matching `predicate` (all items when `None`),
    /// ordered by `sort`.
    fn query(&self, predicate: Option<Predicate>, sort: &[SortKey]) -> Result<Vec<Item>>;

    /// Looks up a single item.
    fn get(&self, id: ItemId) -> Result<Option<Item>>;

    /// Persists a new item. The id must not already exist.
    fn insert(&mut self, item: &Item) -> Result<()>;

    /// Replaces a stored item with the same id.
    ///
    /// Fails with [`HabitusError::ItemNotFound`](crate::HabitusError::ItemNotFound)
    /// if the id is unknown.
    fn update(&mut self, item: &Item) -> Result<()>;

    /// Removes an item.
    ///
    /// Fails with [`HabitusError::ItemNotFound`](crate::HabitusError::ItemNotFound)
    /// if the id is unknown.
    fn delete(&mut self, id: ItemId) -> Result<()>;
}
