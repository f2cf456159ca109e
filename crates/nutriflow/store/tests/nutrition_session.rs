//! End-to-end session flows as a front-end would drive them.

use nutriflow_store::*;
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
        .with_category("Dairy")
}

#[test]
fn test_breakfast_then_undo() {
    let mut store = AppStateStore::default();

    store.add_meal(toast()).unwrap();
    store.add_meal(yogurt()).unwrap();
    assert_eq!(store.macros(), MacroTotals::new(530.0, 23.0, 60.0, 17.0));

    store.remove_meal(1u64).unwrap();
    assert_eq!(store.macros(), MacroTotals::new(210.0, 15.0, 20.0, 5.0));
}

#[test]
fn test_catalog_results_feed_the_log() {
    // Shape the backend returns from a food search.
    let results: Vec<FoodItem> = serde_json::from_str(
        r#"[
            {"id": 11, "name": "Banana", "calories": 105, "carbs": 27, "category": "Fruit"},
            {"id": "egg-1", "name": "Boiled egg", "calories": 78, "protein": 6, "fat": 5},
            {"name": "Black coffee", "calories": 2, "protein": null}
        ]"#,
    )
    .unwrap();

    let mut store = AppStateStore::default();
    for item in results {
        store.add_meal(item).unwrap();
    }

    assert_eq!(store.macros(), MacroTotals::new(185.0, 6.0, 27.0, 5.0));
    store.remove_meal("egg-1").unwrap();
    assert_eq!(store.macros(), MacroTotals::new(107.0, 0.0, 27.0, 0.0));
}

#[test]
fn test_presentation_layer_renders_every_change() {
    let mut store = AppStateStore::default();
    let rendered: Rc<RefCell<Vec<String>>> = Rc::default();
    let screen = rendered.clone();
    store.subscribe(move |event: &StoreEvent, state: &AppState| {
        screen.borrow_mut().push(format!(
            "#{} {} kcal={} active={:?}",
            event.revision,
            event.kind,
            state.macros.calories,
            state.filters.active().collect::<Vec<_>>()
        ));
    });

    store.add_meal(toast()).unwrap();
    store
        .set_filters([("highProtein".to_string(), true)].into_iter().collect())
        .unwrap();
    store
        .update_workout_stats(WorkoutStatsPatch::default().steps(5400.0))
        .unwrap();

    assert_eq!(
        *rendered.borrow(),
        vec![
            "#1 add_meal kcal=320 active=[]".to_string(),
            "#2 set_filters kcal=320 active=[\"highProtein\"]".to_string(),
            "#3 update_workout_stats kcal=320 active=[\"highProtein\"]".to_string(),
        ]
    );
}

#[test]
fn test_dispatch_accepts_serialized_actions() {
    let actions: Vec<StoreAction> = serde_json::from_str(
        r#"[
            {"type": "ADD_MEAL", "payload": {"id": 5, "name": "Rice", "calories": 200, "carbs": 45}},
            {"type": "SET_FILTERS", "payload": {"glutenFree": true}},
            {"type": "UPDATE_WORKOUT_STATS", "payload": {"caloriesBurned": 310}},
            {"type": "REMOVE_MEAL", "payload": 5}
        ]"#,
    )
    .unwrap();

    let mut store = AppStateStore::default();
    for action in actions {
        store.dispatch(action).unwrap();
    }

    assert!(store.meals().is_empty());
    assert!(store.macros().is_zero());
    assert!(store.filters().is_active("glutenFree"));
    assert_eq!(store.state().workout_stats.calories_burned, 310.0);
    assert_eq!(store.revision(), 4);
}

#[test]
fn test_named_user_session() {
    let store = AppStateStore::new(StoreConfig::default().with_user_name("Sam"));
    assert_eq!(store.state().user.name, "Sam");
}
