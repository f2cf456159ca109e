//! Change notification.
//!
//! Observers are invoked synchronously, in subscription order, after a
//! mutation has been committed. They only ever see whole snapshots.

use crate::action::ActionKind;
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle returned by `AppStateStore::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub:{}", self.0)
    }
}

/// What just happened to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreEvent {
    /// Increases by one per committed action
    pub revision: u64,
    pub kind: ActionKind,
}

/// Receives the new state after every committed mutation
pub trait StateObserver {
    fn on_change(&mut self, event: &StoreEvent, state: &AppState);
}

impl<F> StateObserver for F
where
    F: FnMut(&StoreEvent, &AppState),
{
    fn on_change(&mut self, event: &StoreEvent, state: &AppState) {
        self(event, state)
    }
}
