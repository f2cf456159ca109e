//! Identifiers for logged foods.
//!
//! The backend hands out ids as JSON strings for some records and as bare
//! integers for others, so `FoodId` accepts either and normalizes to text.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier of a food entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FoodId(String);

impl FoodId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FoodId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FoodId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for FoodId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFoodId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl<'de> Deserialize<'de> for FoodId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawFoodId::deserialize(deserializer)? {
            RawFoodId::Text(s) => Self(s),
            RawFoodId::Unsigned(n) => Self(n.to_string()),
            RawFoodId::Signed(n) => Self(n.to_string()),
        })
    }
}
