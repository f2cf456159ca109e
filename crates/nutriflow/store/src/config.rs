//! Store configuration

use nutriflow_types::DEFAULT_USER_NAME;
use serde::{Deserialize, Serialize};

/// How the store treats filter names outside the known set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterPolicy {
    /// Accept any name
    #[default]
    Open,
    /// Reject a patch that names an unknown filter
    Strict,
}

/// Settings fixed at store construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Profile name for a fresh session
    pub user_name: String,

    pub filter_policy: FilterPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            filter_policy: FilterPolicy::Open,
        }
    }
}

impl StoreConfig {
    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = name.into();
        self
    }

    pub fn with_filter_policy(mut self, policy: FilterPolicy) -> Self {
        self.filter_policy = policy;
        self
    }
}
