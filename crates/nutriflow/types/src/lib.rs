//! NutriFlow Types - domain model for diet and fitness sessions
//!
//! This crate holds the records a tracking session is made of:
//! - `FoodItem`: a catalog entry or an ad-hoc food the user logged
//! - `MacroTotals`: calories/protein/carbs/fat, and their aggregation
//! - `WorkoutStats`: burned calories, steps and heart rate
//! - `DietaryFilterSet`: open-ended boolean dietary toggles
//! - `UserProfile`: who the session belongs to
//!
//! Partial updates are expressed with explicit patch types (`MacroPatch`,
//! `WorkoutStatsPatch`) whose absent fields are left untouched on merge.
//!
//! JSON field names follow the backend's camelCase convention.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod error;
mod filters;
mod food;
mod ids;
mod profile;
mod workout;

pub use error::{ValidationError, ValidationResult};
pub use filters::{DietaryFilterSet, FilterPatch, KNOWN_FILTERS};
pub use food::{FoodItem, MacroPatch, MacroTotals};
pub use ids::FoodId;
pub use profile::{UserProfile, DEFAULT_USER_NAME};
pub use workout::{WorkoutStats, WorkoutStatsPatch};

/// Reject NaN and infinities for a named numeric field.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> ValidationResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}

/// Deserialize an amount, mapping `null` to zero.
///
/// Used together with `#[serde(default)]` so that both an absent field and
/// an explicit `null` contribute nothing to a sum.
pub(crate) fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
