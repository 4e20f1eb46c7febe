//! Display formatting for items, lists and operation results.
//!
//! Domain models implement `Display` directly; collections and operation
//! outcomes get newtype wrappers. Everything renders as Markdown so the same
//! text works in a terminal renderer and in MCP tool responses.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │  (Item, Filter) │───▶│ Items, *Result  │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: the [`Items`] list, including the empty state
//! - [`results`]: operation result types (CreateResult, UpdateResult,
//!   DeleteResult)
//! - [`status`]: status and confirmation messages (OperationStatus)
//! - [`datetime`]: timestamp and due date formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use habitus_core::{
//!     display::{CreateResult, Items, OperationStatus},
//!     models::{Item, ItemId, ItemType, Priority},
//! };
//! use jiff::Timestamp;
//!
//! let now = Timestamp::now();
//! let item = Item {
//!     id: ItemId::new(),
//!     title: "Morning Meditation".to_string(),
//!     item_type: ItemType::Habit,
//!     notes: None,
//!     priority: Priority::Medium,
//!     due_date: None,
//!     is_complete: false,
//!     created_at: now,
//!     updated_at: now,
//! };
//!
//! let created = format!("{}", CreateResult::new(item.clone()));
//! assert!(created.starts_with("Created habit"));
//!
//! let list = format!("{}", Items(vec![item]));
//! assert!(list.contains("Morning Meditation"));
//! assert!(list.contains("!!"));
//!
//! let empty = format!("{}", Items(vec![]));
//! assert!(empty.starts_with("No Items"));
//!
//! let status = OperationStatus::failure("Title cannot be empty".to_string());
//! assert_eq!(status.to_string(), "Error: Title cannot be empty\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Items;
pub use datetime::{DueDate, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
