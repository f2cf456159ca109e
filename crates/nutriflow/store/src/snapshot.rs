//! Session snapshots.
//!
//! A snapshot is the whole state tree plus enough metadata to restore a
//! store from it. It is the only serialized form the store produces; where
//! the bytes go is up to the caller.

use crate::error::StoreResult;
use crate::state::AppState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current snapshot layout
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Exported state of one session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub format_version: u32,
    pub session_id: Uuid,
    pub exported_at: DateTime<Utc>,
    /// Store revision at export time
    pub revision: u64,
    pub state: AppState,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
