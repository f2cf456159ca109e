use serde::{Deserialize, Serialize};

/// Name a fresh session is created with
pub const DEFAULT_USER_NAME: &str = "Erudita";

/// The person a session belongs to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Reference to an avatar image, e.g. a URI
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(DEFAULT_USER_NAME)
    }
}
