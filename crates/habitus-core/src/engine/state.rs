//! Published view state and subscriptions.

use tokio::sync::watch;

use super::Failure;
use crate::models::{Item, ItemFilter};

/// Everything a view needs to render: the active filter, the ordered
/// snapshot and the pending failure, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub filter: ItemFilter,
    pub items: Vec<Item>,
    pub failure: Option<Failure>,
    /// Incremented on every publish
    pub revision: u64,
}

impl ViewState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A view's handle on the engine's published state.
///
/// Created by [`QueryEngine::subscribe`](super::QueryEngine::subscribe). A new
/// subscription has already seen the state current at the time it was made;
/// [`has_changed`](Self::has_changed) turns true on the next publish.
#[derive(Debug)]
pub struct Subscription {
    receiver: watch::Receiver<ViewState>,
}

impl Subscription {
    pub(super) fn new(receiver: watch::Receiver<ViewState>) -> Self {
        Self { receiver }
    }

    /// True if the engine published since the last [`current`](Self::current)
    /// call. False once the engine is gone.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Returns the latest state and marks it as seen.
    pub fn current(&mut self) -> ViewState {
        self.receiver.borrow_and_update().clone()
    }

    /// Waits for the next publish. Returns false if the engine was dropped.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }

    /// Ends the subscription.
    pub fn unsubscribe(self) {
        drop(self);
    }
}
