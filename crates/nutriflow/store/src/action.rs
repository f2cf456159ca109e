//! Mutations accepted by the store.
//!
//! Each action is validated as a whole before anything is applied, so a
//! rejected action has no effect and observers never see half of one.

use crate::config::{FilterPolicy, StoreConfig};
use crate::error::StoreResult;
use nutriflow_types::{
    DietaryFilterSet, FilterPatch, FoodId, FoodItem, MacroPatch, ValidationError,
    WorkoutStatsPatch,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A single store mutation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreAction {
    /// Append a food to the end of the meal log
    AddMeal(FoodItem),
    /// Remove the first logged entry with this id
    RemoveMeal(FoodId),
    /// Merge filter toggles key by key
    SetFilters(FilterPatch),
    /// Overwrite individual macro totals
    UpdateMacros(MacroPatch),
    /// Overwrite individual workout metrics
    UpdateWorkoutStats(WorkoutStatsPatch),
}

/// Discriminant of a `StoreAction`, carried on change events
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    AddMeal,
    RemoveMeal,
    SetFilters,
    UpdateMacros,
    UpdateWorkoutStats,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AddMeal => "add_meal",
            Self::RemoveMeal => "remove_meal",
            Self::SetFilters => "set_filters",
            Self::UpdateMacros => "update_macros",
            Self::UpdateWorkoutStats => "update_workout_stats",
        };
        f.write_str(name)
    }
}

impl StoreAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::AddMeal(_) => ActionKind::AddMeal,
            Self::RemoveMeal(_) => ActionKind::RemoveMeal,
            Self::SetFilters(_) => ActionKind::SetFilters,
            Self::UpdateMacros(_) => ActionKind::UpdateMacros,
            Self::UpdateWorkoutStats(_) => ActionKind::UpdateWorkoutStats,
        }
    }

    /// Boundary checks for this action under `config`
    pub fn validate(&self, config: &StoreConfig) -> StoreResult<()> {
        match self {
            Self::AddMeal(item) => item.validate()?,
            Self::RemoveMeal(_) => {}
            Self::SetFilters(patch) => {
                validate_filter_names(patch.keys().map(String::as_str), config.filter_policy)?
            }
            Self::UpdateMacros(patch) => patch.validate()?,
            Self::UpdateWorkoutStats(patch) => patch.validate()?,
        }
        Ok(())
    }
}

/// Under `FilterPolicy::Strict` every name must be a known filter
pub(crate) fn validate_filter_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
    policy: FilterPolicy,
) -> Result<(), ValidationError> {
    if policy == FilterPolicy::Open {
        return Ok(());
    }

    match names.into_iter().find(|name| !DietaryFilterSet::is_known(name)) {
        Some(unknown) => {
            warn!(filter = %unknown, "Rejected unknown dietary filter");
            Err(ValidationError::UnknownFilter(unknown.to_string()))
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;

    #[test]
    fn test_wire_shape_matches_reducer_actions() {
        let action = StoreAction::RemoveMeal(FoodId::from(1u64));
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "REMOVE_MEAL");
        assert_eq!(json["payload"], "1");
    }

    #[test]
    fn test_strict_policy_rejects_unknown_filter() {
        let config = StoreConfig::default().with_filter_policy(FilterPolicy::Strict);
        let patch: FilterPatch = [("keto".to_string(), true), ("paleo".to_string(), true)]
            .into_iter()
            .collect();

        let err = StoreAction::SetFilters(patch.clone())
            .validate(&config)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::UnknownFilter(ref name)) if name == "paleo"
        ));

        assert!(StoreAction::SetFilters(patch)
            .validate(&StoreConfig::default())
            .is_ok());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ActionKind::UpdateWorkoutStats.to_string(), "update_workout_stats");
        assert_eq!(
            StoreAction::AddMeal(FoodItem::new("Apple")).kind(),
            ActionKind::AddMeal
        );
    }
}
