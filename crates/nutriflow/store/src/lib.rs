//! NutriFlow Store - in-memory session state for the tracking front-end
//!
//! `AppStateStore` is the single authoritative holder of a session's state:
//! the meal log, dietary filters, macro totals and workout stats. All
//! mutations go through one ordered channel (`dispatch`) and every committed
//! mutation is announced to subscribed observers with the new snapshot.
//!
//! Macro totals are derived, not caller-maintained: adding or removing a meal
//! re-sums the log. Manual adjustments made through `update_macros` are kept
//! separately and survive later log changes, so at every revision
//!
//! ```text
//! macros == MacroTotals::from_meals(meals) + adjustment
//! ```
//!
//! The store is single-writer and synchronous. It owns no external
//! resources; persistence, if wanted, happens at the edges through
//! `SessionSnapshot`.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod action;
mod config;
mod error;
mod observer;
mod snapshot;
mod state;
mod store;

pub use action::{ActionKind, StoreAction};
pub use config::{FilterPolicy, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use observer::{StateObserver, StoreEvent, SubscriptionId};
pub use snapshot::{SessionSnapshot, SNAPSHOT_FORMAT_VERSION};
pub use state::AppState;
pub use store::AppStateStore;

pub use nutriflow_types::{
    DietaryFilterSet, FilterPatch, FoodId, FoodItem, MacroPatch, MacroTotals, UserProfile,
    ValidationError, WorkoutStats, WorkoutStatsPatch,
};
