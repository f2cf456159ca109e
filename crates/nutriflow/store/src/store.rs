//! The session state container.

use crate::action::{validate_filter_names, ActionKind, StoreAction};
use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::observer::{StateObserver, StoreEvent, SubscriptionId};
use crate::snapshot::{SessionSnapshot, SNAPSHOT_FORMAT_VERSION};
use crate::state::AppState;
use crate::StoreError;
use chrono::Utc;
use nutriflow_types::{
    DietaryFilterSet, FilterPatch, FoodId, FoodItem, MacroPatch, MacroTotals, UserProfile,
    WorkoutStatsPatch,
};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Single-writer, in-memory holder of a tracking session
pub struct AppStateStore {
    session_id: Uuid,
    config: StoreConfig,
    state: AppState,
    /// Macro contribution from outside the meal log
    adjustment: MacroTotals,
    revision: u64,
    observers: Vec<(SubscriptionId, Box<dyn StateObserver>)>,
    next_subscription: u64,
}

impl AppStateStore {
    /// Start a fresh session
    pub fn new(config: StoreConfig) -> Self {
        let state = AppState::new(UserProfile::new(config.user_name.clone()));
        let session_id = Uuid::new_v4();
        debug!(session = %session_id, user = %state.user.name, "Session store created");

        Self {
            session_id,
            config,
            state,
            adjustment: MacroTotals::default(),
            revision: 0,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Rebuild a store from an exported snapshot.
    ///
    /// Every logged meal is validated again, and filter names are checked
    /// against the configured policy. Whatever part of the stored
    /// totals the meal log does not explain becomes the manual adjustment.
    pub fn from_snapshot(snapshot: SessionSnapshot, config: StoreConfig) -> StoreResult<Self> {
        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(StoreError::UnsupportedSnapshotVersion {
                expected: SNAPSHOT_FORMAT_VERSION,
                found: snapshot.format_version,
            });
        }
        for meal in &snapshot.state.meals {
            meal.validate()?;
        }
        validate_filter_names(
            snapshot.state.filters.iter().map(|(name, _)| name),
            config.filter_policy,
        )?;
        snapshot.state.macros.validate()?;

        let adjustment = snapshot.state.macros - snapshot.state.logged_macros();
        adjustment.validate()?;
        info!(
            session = %snapshot.session_id,
            meals = snapshot.state.meals.len(),
            revision = snapshot.revision,
            "Session restored from snapshot"
        );

        Ok(Self {
            session_id: snapshot.session_id,
            config,
            state: snapshot.state,
            adjustment,
            revision: snapshot.revision,
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Current snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of committed actions
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn meals(&self) -> &[FoodItem] {
        &self.state.meals
    }

    pub fn macros(&self) -> MacroTotals {
        self.state.macros
    }

    pub fn filters(&self) -> &DietaryFilterSet {
        &self.state.filters
    }

    /// Part of the totals set manually rather than by logged meals
    pub fn adjustment(&self) -> MacroTotals {
        self.adjustment
    }

    // ========== Mutations ==========

    pub fn add_meal(&mut self, item: FoodItem) -> StoreResult<()> {
        self.dispatch(StoreAction::AddMeal(item))
    }

    pub fn remove_meal(&mut self, id: impl Into<FoodId>) -> StoreResult<()> {
        self.dispatch(StoreAction::RemoveMeal(id.into()))
    }

    pub fn set_filters(&mut self, patch: FilterPatch) -> StoreResult<()> {
        self.dispatch(StoreAction::SetFilters(patch))
    }

    pub fn update_macros(&mut self, patch: MacroPatch) -> StoreResult<()> {
        self.dispatch(StoreAction::UpdateMacros(patch))
    }

    pub fn update_workout_stats(&mut self, patch: WorkoutStatsPatch) -> StoreResult<()> {
        self.dispatch(StoreAction::UpdateWorkoutStats(patch))
    }

    /// Drop manual macro adjustments so totals equal the meal log again
    pub fn reset_adjustments(&mut self) -> StoreResult<()> {
        let logged = self.state.logged_macros();
        self.dispatch(StoreAction::UpdateMacros(MacroPatch::from(logged)))
    }

    /// Apply one action, then notify every observer.
    ///
    /// Actions are applied in call order. The action runs against a working
    /// copy first and is committed only if the resulting totals and
    /// adjustment are still finite. A rejected action changes nothing and
    /// notifies no one.
    #[instrument(skip(self, action), fields(kind = %action.kind(), revision = self.revision))]
    pub fn dispatch(&mut self, action: StoreAction) -> StoreResult<()> {
        action.validate(&self.config)?;

        let kind = action.kind();
        let mut next = self.state.clone();
        let mut adjustment = self.adjustment;
        apply(&mut next, &mut adjustment, action);

        if let Err(e) = next.macros.validate().and_then(|_| adjustment.validate()) {
            warn!(error = %e, "Rejected action: macro totals would overflow");
            return Err(e.into());
        }

        self.state = next;
        self.adjustment = adjustment;
        self.revision += 1;
        if matches!(kind, ActionKind::AddMeal | ActionKind::RemoveMeal) {
            info!(
                meals = self.state.meals.len(),
                calories = self.state.macros.calories,
                "Meal log changed"
            );
        }

        let event = StoreEvent {
            revision: self.revision,
            kind,
        };
        self.notify(&event);
        Ok(())
    }

    fn notify(&mut self, event: &StoreEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_change(event, &self.state);
        }
    }

    // ========== Observation ==========

    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(subscription = %id, "Observer subscribed");
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ========== Snapshots ==========

    pub fn export_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            format_version: SNAPSHOT_FORMAT_VERSION,
            session_id: self.session_id,
            exported_at: Utc::now(),
            revision: self.revision,
            state: self.state.clone(),
        }
    }
}

fn apply(state: &mut AppState, adjustment: &mut MacroTotals, action: StoreAction) {
    match action {
        StoreAction::AddMeal(item) => {
            debug!(food = %item.name, calories = item.calories, "Logging meal");
            state.meals.push(item);
            recompute_macros(state, *adjustment);
        }
        StoreAction::RemoveMeal(id) => match state.meals.iter().position(|m| m.has_id(&id)) {
            Some(index) => {
                let removed = state.meals.remove(index);
                debug!(food = %removed.name, id = %id, "Removing meal");
                recompute_macros(state, *adjustment);
            }
            None => debug!(id = %id, "No logged meal with this id"),
        },
        StoreAction::SetFilters(patch) => {
            for key in patch.keys().filter(|k| !DietaryFilterSet::is_known(k)) {
                debug!(filter = %key, "Adding unlisted dietary filter");
            }
            state.filters.merge(&patch);
        }
        StoreAction::UpdateMacros(patch) => {
            let logged = state.logged_macros();
            let offsets = MacroPatch {
                calories: patch.calories.map(|v| v - logged.calories),
                protein: patch.protein.map(|v| v - logged.protein),
                carbs: patch.carbs.map(|v| v - logged.carbs),
                fat: patch.fat.map(|v| v - logged.fat),
            };
            offsets.apply_to(adjustment);
            patch.apply_to(&mut state.macros);
            debug!(adjustment = ?adjustment, "Macro totals adjusted");
        }
        StoreAction::UpdateWorkoutStats(patch) => {
            patch.apply_to(&mut state.workout_stats);
            debug!(stats = ?state.workout_stats, "Workout stats updated");
        }
    }
}

fn recompute_macros(state: &mut AppState, adjustment: MacroTotals) {
    state.macros = state.logged_macros() + adjustment;
}

impl Default for AppStateStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl std::fmt::Debug for AppStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStateStore")
            .field("session_id", &self.session_id)
            .field("revision", &self.revision)
            .field("state", &self.state)
            .field("adjustment", &self.adjustment)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterPolicy;
    use nutriflow_types::ValidationError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn toast() -> FoodItem {
        FoodItem::new("Toast")
            .with_id(1u64)
            .with_calories(320.0)
            .with_protein(8.0)
            .with_carbs(40.0)
            .with_fat(12.0)
    }

    fn yogurt() -> FoodItem {
        FoodItem::new("Yogurt")
            .with_id(2u64)
            .with_calories(210.0)
            .with_protein(15.0)
            .with_carbs(20.0)
            .with_fat(5.0)
    }

    fn filters(entries: &[(&str, bool)]) -> FilterPatch {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_fresh_session_defaults() {
        let store = AppStateStore::default();
        let state = store.state();
        assert_eq!(state.user.name, "Erudita");
        assert!(state.user.avatar.is_none());
        assert!(state.meals.is_empty());
        assert!(state.macros.is_zero());
        assert_eq!(state.workout_stats, Default::default());
        assert_eq!(state.filters.active().count(), 0);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_add_and_remove_recompute_totals() {
        let mut store = AppStateStore::default();
        store.add_meal(toast()).unwrap();
        store.add_meal(yogurt()).unwrap();
        assert_eq!(store.macros(), MacroTotals::new(530.0, 23.0, 60.0, 17.0));

        store.remove_meal(1u64).unwrap();
        assert_eq!(store.macros(), MacroTotals::new(210.0, 15.0, 20.0, 5.0));
        assert_eq!(store.meals().len(), 1);
        assert_eq!(store.meals()[0].name, "Yogurt");
    }

    #[test]
    fn test_absent_macros_count_as_zero() {
        let mut store = AppStateStore::default();
        let apple: FoodItem = serde_json::from_str(r#"{"name":"Apple","calories":95}"#).unwrap();
        store.add_meal(apple).unwrap();
        assert_eq!(store.macros(), MacroTotals::new(95.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = AppStateStore::default();
        store.add_meal(toast()).unwrap();
        let before = store.state().clone();

        store.remove_meal("missing").unwrap();
        assert_eq!(store.state(), &before);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_remove_takes_first_duplicate_only() {
        let mut store = AppStateStore::default();
        store.add_meal(toast()).unwrap();
        store.add_meal(yogurt()).unwrap();
        store.add_meal(toast()).unwrap();

        store.remove_meal(1u64).unwrap();
        let names: Vec<_> = store.meals().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Yogurt", "Toast"]);
        assert_eq!(store.macros().calories, 530.0);
    }

    #[test]
    fn test_invalid_meal_leaves_state_untouched() {
        let mut store = AppStateStore::default();
        let seen = Rc::new(RefCell::new(0));
        let counter = seen.clone();
        store.subscribe(move |_: &StoreEvent, _: &AppState| *counter.borrow_mut() += 1);

        let err = store
            .add_meal(FoodItem::new("Bad").with_protein(-3.0))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::Negative { field: "protein", .. })
        ));
        assert!(store.meals().is_empty());
        assert_eq!(store.revision(), 0);
        assert_eq!(*seen.borrow(), 0);
    }

    #[test]
    fn test_filters_merge_key_by_key() {
        let mut store = AppStateStore::default();
        store.set_filters(filters(&[("vegan", true)])).unwrap();
        store.set_filters(filters(&[("keto", true)])).unwrap();
        store.set_filters(filters(&[("vegan", false)])).unwrap();

        assert!(!store.filters().is_active("vegan"));
        assert!(store.filters().is_active("keto"));
        assert_eq!(store.filters().get("glutenFree"), Some(false));
    }

    #[test]
    fn test_strict_store_rejects_unknown_filter() {
        let config = StoreConfig::default().with_filter_policy(FilterPolicy::Strict);
        let mut store = AppStateStore::new(config);
        let before = store.filters().clone();

        assert!(store
            .set_filters(filters(&[("vegan", true), ("carnivore", true)]))
            .is_err());
        assert_eq!(store.filters(), &before);

        store.set_filters(filters(&[("vegan", true)])).unwrap();
        assert!(store.filters().is_active("vegan"));
    }

    #[test]
    fn test_manual_macros_survive_log_changes() {
        let mut store = AppStateStore::default();
        store.add_meal(toast()).unwrap();
        store
            .update_macros(MacroPatch::default().calories(1000.0))
            .unwrap();
        assert_eq!(store.macros().calories, 1000.0);
        assert_eq!(store.macros().protein, 8.0);
        assert_eq!(store.adjustment().calories, 680.0);

        store.add_meal(yogurt()).unwrap();
        assert_eq!(store.macros().calories, 1210.0);
        assert_eq!(store.macros().protein, 23.0);

        store.reset_adjustments().unwrap();
        assert!(store.adjustment().is_zero());
        assert_eq!(store.macros(), MacroTotals::new(530.0, 23.0, 60.0, 17.0));
    }

    #[test]
    fn test_workout_stats_merge() {
        let mut store = AppStateStore::default();
        store
            .update_workout_stats(WorkoutStatsPatch::default().heart_rate(72.0))
            .unwrap();
        store
            .update_workout_stats(WorkoutStatsPatch::default().steps(500.0))
            .unwrap();
        store
            .update_workout_stats(WorkoutStatsPatch::default().steps(4200.0))
            .unwrap();

        let stats = store.state().workout_stats;
        assert_eq!(stats.steps, 4200.0);
        assert_eq!(stats.heart_rate, 72.0);
        assert_eq!(stats.calories_burned, 0.0);
    }

    #[test]
    fn test_observers_receive_each_commit_in_order() {
        let mut store = AppStateStore::default();
        let log: Rc<RefCell<Vec<(u64, ActionKind, usize)>>> = Rc::default();
        let sink = log.clone();
        store.subscribe(move |event: &StoreEvent, state: &AppState| {
            sink.borrow_mut()
                .push((event.revision, event.kind, state.meals.len()));
        });

        store.add_meal(toast()).unwrap();
        store.set_filters(filters(&[("detox", true)])).unwrap();
        store.remove_meal(1u64).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                (1, ActionKind::AddMeal, 1),
                (2, ActionKind::SetFilters, 1),
                (3, ActionKind::RemoveMeal, 0),
            ]
        );
    }

    #[test]
    fn test_observer_sees_consistent_totals() {
        let mut store = AppStateStore::default();
        let consistent = Rc::new(RefCell::new(true));
        let flag = consistent.clone();
        store.subscribe(move |_: &StoreEvent, state: &AppState| {
            if state.macros != state.logged_macros() {
                *flag.borrow_mut() = false;
            }
        });

        store.add_meal(toast()).unwrap();
        store.add_meal(yogurt()).unwrap();
        store.remove_meal(2u64).unwrap();
        assert!(*consistent.borrow());
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = AppStateStore::default();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let id = store.subscribe(move |_: &StoreEvent, _: &AppState| *counter.borrow_mut() += 1);

        store.add_meal(toast()).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_meal(yogurt()).unwrap();

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn test_overflowing_meal_is_rejected() {
        let huge = || FoodItem::new("Huge").with_calories(1e308);
        let mut store = AppStateStore::default();
        let seen = Rc::new(RefCell::new(0));
        let counter = seen.clone();
        store.subscribe(move |_: &StoreEvent, _: &AppState| *counter.borrow_mut() += 1);

        store.add_meal(huge()).unwrap();
        let before = store.state().clone();

        let err = store.add_meal(huge()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::NotFinite { field: "calories", .. })
        ));
        assert_eq!(store.state(), &before);
        assert_eq!(store.revision(), 1);
        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn test_totals_stay_finite_after_manual_override() {
        let mut store = AppStateStore::default();
        store.add_meal(FoodItem::new("Huge").with_calories(1e308)).unwrap();
        store
            .update_macros(MacroPatch::default().calories(0.0))
            .unwrap();

        assert!(store
            .add_meal(FoodItem::new("Huge").with_calories(1e308))
            .is_err());
        store
            .add_meal(FoodItem::new("Apple").with_calories(95.0))
            .unwrap();
        assert!(store.macros().calories.is_finite());
        assert!(store.adjustment().calories.is_finite());

        let json = store.export_snapshot().to_json().unwrap();
        let snapshot = SessionSnapshot::from_json(&json).unwrap();
        let restored = AppStateStore::from_snapshot(snapshot, StoreConfig::default()).unwrap();
        assert!(restored.macros().calories.is_finite());
        assert_eq!(restored.meals().len(), 2);
        assert_eq!(restored.revision(), store.revision());
    }
}
