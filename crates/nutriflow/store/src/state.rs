use nutriflow_types::{DietaryFilterSet, FoodItem, MacroTotals, UserProfile, WorkoutStats};
use serde::{Deserialize, Serialize};

/// The full session state tree handed to observers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub user: UserProfile,
    /// Logging order, duplicates allowed
    pub meals: Vec<FoodItem>,
    pub filters: DietaryFilterSet,
    pub macros: MacroTotals,
    pub workout_stats: WorkoutStats,
}

impl AppState {
    /// Session start: empty log, zeroed numbers, all known filters off
    pub fn new(user: UserProfile) -> Self {
        Self {
            user,
            meals: Vec::new(),
            filters: DietaryFilterSet::default(),
            macros: MacroTotals::default(),
            workout_stats: WorkoutStats::default(),
        }
    }

    /// Totals contributed by the meal log alone
    pub fn logged_macros(&self) -> MacroTotals {
        MacroTotals::from_meals(&self.meals)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(UserProfile::default())
    }
}
