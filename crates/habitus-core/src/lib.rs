//! Core library for the Habitus task and habit tracker.
//!
//! This crate holds the item model, the record stores and the query engine
//! that sits between a store and whatever view renders its items.
//!
//! - **Models** ([`models`]): items, filters, priorities and sort keys
//! - **Stores** ([`store`], [`db`]): the [`RecordStore`] trait with an SQLite
//!   implementation and an in-memory one for tests
//! - **Engine** ([`engine`]): validates input, writes through the store, then
//!   refetches and publishes the filtered, sorted snapshot
//! - **Display** ([`display`]): Markdown formatting for lists, details and
//!   operation results
//!
//! # Quick Start
//!
//! ```rust
//! use habitus_core::{EngineBuilder, models::ItemFilter, params::ItemDraft};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = EngineBuilder::new()
//!     .with_database_path(Some("habitus.db"))
//!     .with_filter(ItemFilter::Incomplete)
//!     .build()?;
//!
//! let item = engine.add(ItemDraft::titled("Water the plants"))?;
//! engine.toggle_completion(item.id)?;
//!
//! // Completed items drop out of the incomplete view
//! assert!(engine.items().iter().all(|i| i.id != item.id));
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod samples;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, Items, OperationStatus, UpdateResult};
pub use engine::{EngineBuilder, Failure, FailureKind, QueryEngine, Subscription, ViewState};
pub use error::{HabitusError, Result};
pub use models::{Item, ItemFilter, ItemId, ItemType, Priority};
pub use params::{AddItem, Id, ItemDraft, ListItems, UpdateItem};
pub use store::{MemoryStore, RecordStore};
