//! Item query engine: the view model between a record store and its views.
//!
//! The [`QueryEngine`] owns a [`RecordStore`] and keeps one derived value: the
//! snapshot of items matching the current [`ItemFilter`], ordered by
//! [`DEFAULT_SORT`]. Every mutation goes through the store and is followed by
//! a full refetch, so the snapshot can never drift from the filter or sort
//! rules, even when an edit changes an item's sort key or filter membership.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   View layer    │    │   QueryEngine   │    │   RecordStore   │
//! │  (CLI, MCP)     │───▶│ validate, write │───▶│ (SQLite/memory) │
//! │                 │◀───│ refetch, publish│◀───│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Failures
//!
//! Operations return [`Failure`] and also publish it in the [`ViewState`], so
//! a view can react either to the return value or to its subscription. A
//! failed query leaves the previous snapshot in place. A failed write leaves
//! the store and the snapshot untouched. Store errors never cross this
//! boundary unconverted.
//!
//! # Example
//!
//! ```rust
//! use habitus_core::{
//!     engine::{FailureKind, QueryEngine},
//!     models::{ItemFilter, Priority},
//!     params::ItemDraft,
//!     store::MemoryStore,
//! };
//!
//! let mut engine = QueryEngine::new(MemoryStore::new());
//! let mut view = engine.subscribe();
//!
//! engine.add(ItemDraft::titled("Water plants")).unwrap();
//! engine
//!     .add(ItemDraft {
//!         priority: Priority::High,
//!         ..ItemDraft::titled("File taxes")
//!     })
//!     .unwrap();
//!
//! assert!(view.has_changed());
//! let titles: Vec<_> = view.current().items.into_iter().map(|i| i.title).collect();
//! assert_eq!(titles, ["File taxes", "Water plants"]);
//!
//! let failure = engine.add(ItemDraft::titled("   ")).unwrap_err();
//! assert_eq!(failure.kind, FailureKind::Validation);
//!
//! engine.set_filter(ItemFilter::Completed).unwrap();
//! assert!(engine.items().is_empty());
//! ```

use jiff::{SignedDuration, Timestamp};
use log::{debug, warn};
use tokio::sync::watch;

pub mod builder;
pub mod failure;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use failure::{Failure, FailureKind};
pub use state::{Subscription, ViewState};

use crate::{
    models::{Item, ItemFilter, ItemId, DEFAULT_SORT},
    params::ItemDraft,
    store::RecordStore,
};

const FETCH_CONTEXT: &str = "Failed to fetch items";
const SAVE_CONTEXT: &str = "Failed to save changes";

/// View model over a record store.
pub struct QueryEngine<S> {
    store: S,
    filter: ItemFilter,
    state: watch::Sender<ViewState>,
}

impl<S: RecordStore> QueryEngine<S> {
    /// Creates an engine showing every item and performs the initial fetch.
    pub fn new(store: S) -> Self {
        Self::with_filter(store, ItemFilter::All)
    }

    /// Creates an engine with an initial filter and performs the initial
    /// fetch.
    ///
    /// A failed initial fetch is not an error here: it is published as the
    /// pending failure and the snapshot starts empty.
    pub fn with_filter(store: S, filter: ItemFilter) -> Self {
        let (state, _) = watch::channel(ViewState {
            filter,
            ..ViewState::default()
        });
        let mut engine = Self {
            store,
            filter,
            state,
        };
        let _ = engine.refresh();
        engine
    }

    /// The active filter.
    pub fn filter(&self) -> ItemFilter {
        self.filter
    }

    /// A copy of the current snapshot.
    pub fn items(&self) -> Vec<Item> {
        self.state.borrow().items.clone()
    }

    /// Borrows the current published state.
    pub fn state(&self) -> watch::Ref<'_, ViewState> {
        self.state.borrow()
    }

    /// The pending failure, if the last failed operation has not been
    /// dismissed.
    pub fn failure(&self) -> Option<Failure> {
        self.state.borrow().failure.clone()
    }

    /// Clears the pending failure.
    pub fn dismiss_failure(&mut self) {
        if self.state.borrow().failure.is_some() {
            self.publish(|state| state.failure = None);
        }
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> Subscription {
        Subscription::new(self.state.subscribe())
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the engine, handing back its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Re-derives the snapshot from the store.
    ///
    /// On failure the previous snapshot stays published next to a
    /// [`FailureKind::StoreRead`] failure.
    pub fn refresh(&mut self) -> Result<(), Failure> {
        debug!("refresh: filter={}", self.filter.as_str());
        match self.store.query(self.filter.predicate(), &DEFAULT_SORT) {
            Ok(items) => {
                let filter = self.filter;
                self.publish(|state| {
                    state.filter = filter;
                    state.items = items;
                });
                Ok(())
            }
            Err(e) => Err(self.fail(Failure::store_read(FETCH_CONTEXT, &e))),
        }
    }

    /// Replaces the filter and refetches.
    pub fn set_filter(&mut self, filter: ItemFilter) -> Result<(), Failure> {
        debug!("set_filter: {}", filter.as_str());
        self.filter = filter;
        self.refresh()
    }

    /// Creates a new item from `draft` and refetches.
    ///
    /// Returns the stored item. A blank title is rejected without touching
    /// the store. If the write succeeds but the refetch fails, the item is
    /// stored and the read failure is returned.
    pub fn add(&mut self, draft: ItemDraft) -> Result<Item, Failure> {
        debug!("add: {:?}", draft.title);
        validate_title(&draft.title).map_err(|f| self.fail(f))?;

        let now = Timestamp::now();
        let item = Item {
            id: ItemId::new(),
            title: draft.title,
            item_type: draft.item_type,
            notes: normalize_notes(draft.notes),
            priority: draft.priority,
            due_date: draft.due_date,
            is_complete: false,
            created_at: now,
            updated_at: now,
        };

        self.store
            .insert(&item)
            .map_err(|e| self.fail(Failure::store_write(SAVE_CONTEXT, &e)))?;
        self.refresh()?;
        Ok(item)
    }

    /// Overwrites every editable field of an item and refetches.
    ///
    /// The title is validated the same way as in [`add`](Self::add).
    pub fn update(&mut self, id: ItemId, draft: ItemDraft) -> Result<Item, Failure> {
        debug!("update: {id}");
        validate_title(&draft.title).map_err(|f| self.fail(f))?;

        let mut item = self.load(id)?;
        item.title = draft.title;
        item.item_type = draft.item_type;
        item.notes = normalize_notes(draft.notes);
        item.priority = draft.priority;
        item.due_date = draft.due_date;
        item.updated_at = advance(item.updated_at);

        self.persist(&item)?;
        Ok(item)
    }

    /// Flips an item's completion flag and refetches.
    pub fn toggle_completion(&mut self, id: ItemId) -> Result<Item, Failure> {
        debug!("toggle_completion: {id}");
        let mut item = self.load(id)?;
        item.is_complete = !item.is_complete;
        item.updated_at = advance(item.updated_at);

        self.persist(&item)?;
        Ok(item)
    }

    /// Removes an item and refetches. Returns the removed item.
    pub fn delete(&mut self, id: ItemId) -> Result<Item, Failure> {
        debug!("delete: {id}");
        let item = self.load(id)?;
        self.store
            .delete(id)
            .map_err(|e| self.fail(Failure::store_write(SAVE_CONTEXT, &e)))?;
        self.refresh()?;
        Ok(item)
    }

    /// Finds the one item whose id is `reference` or starts with it.
    ///
    /// Searches the whole store, not just the snapshot, and leaves the
    /// snapshot untouched. Hyphens in `reference` are ignored, so both the
    /// short id and the full id work.
    pub fn resolve(&mut self, reference: &str) -> Result<Item, Failure> {
        let needle: String = reference
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_lowercase();
        if needle.is_empty() {
            return Err(self.fail(Failure::validation("Item id cannot be empty")));
        }

        let items = self
            .store
            .query(None, &DEFAULT_SORT)
            .map_err(|e| self.fail(Failure::store_read(FETCH_CONTEXT, &e)))?;
        let mut matches = items
            .into_iter()
            .filter(|item| item.id.as_uuid().simple().to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(item),
            (None, _) => Err(self.fail(Failure::validation(format!(
                "No item matches id '{reference}'"
            )))),
            (Some(_), Some(_)) => Err(self.fail(Failure::validation(format!(
                "Id '{reference}' is ambiguous; use more characters"
            )))),
        }
    }

    /// Reads the current stored version of an item for a mutation.
    fn load(&mut self, id: ItemId) -> Result<Item, Failure> {
        match self.store.get(id) {
            Ok(Some(item)) => Ok(item),
            Ok(None) => Err(self.fail(Failure {
                kind: FailureKind::StoreWrite,
                message: format!("{SAVE_CONTEXT}: item with ID {id} not found"),
            })),
            Err(e) => Err(self.fail(Failure::store_read(FETCH_CONTEXT, &e))),
        }
    }

    fn persist(&mut self, item: &Item) -> Result<(), Failure> {
        self.store
            .update(item)
            .map_err(|e| self.fail(Failure::store_write(SAVE_CONTEXT, &e)))?;
        self.refresh()
    }

    /// Publishes `failure` as the pending failure and hands it back.
    fn fail(&mut self, failure: Failure) -> Failure {
        warn!("{} failure: {}", failure.kind.as_str(), failure.message);
        let published = failure.clone();
        self.publish(|state| state.failure = Some(published));
        failure
    }

    fn publish(&mut self, change: impl FnOnce(&mut ViewState)) {
        self.state.send_modify(|state| {
            change(state);
            state.revision += 1;
        });
    }
}

fn validate_title(title: &str) -> Result<(), Failure> {
    if title.trim().is_empty() {
        return Err(Failure::validation("Title cannot be empty"));
    }
    Ok(())
}

/// Blank notes are stored as no notes.
fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes.filter(|n| !n.trim().is_empty())
}

/// A fresh `updated_at` strictly later than `previous`, even when the clock
/// has not moved.
fn advance(previous: Timestamp) -> Timestamp {
    let now = Timestamp::now();
    if now > previous {
        now
    } else {
        previous
            .checked_add(SignedDuration::from_nanos(1))
            .unwrap_or(now)
    }
}
