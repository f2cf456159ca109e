//! Session logging
//!
//! Drives a fresh session store the way the nutrition screen does: search,
//! add the picked results, toggle filters, record activity. Nothing is kept
//! after the command exits.

use crate::error::CliResult;
use crate::output::{self, print_info, print_success, OutputFormat};
use clap::Args;
use nutriflow_client::FoodCatalog;
use nutriflow_store::{
    AppState, AppStateStore, FilterPatch, StoreConfig, StoreEvent, WorkoutStatsPatch,
};

/// Arguments for `nutriflow log`
#[derive(Debug, Args)]
pub struct LogArgs {
    /// Food search query
    pub query: String,

    /// Number of search results to log
    #[arg(short, long, default_value = "1")]
    pub take: usize,

    /// Dietary filter toggle, e.g. `vegan=true` (repeatable)
    #[arg(short, long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(String, bool)>,

    /// Calories burned
    #[arg(long)]
    pub burned: Option<f64>,

    /// Step count
    #[arg(long)]
    pub steps: Option<f64>,

    /// Heart rate in bpm
    #[arg(long)]
    pub heart_rate: Option<f64>,
}

impl LogArgs {
    fn workout_patch(&self) -> WorkoutStatsPatch {
        WorkoutStatsPatch {
            calories_burned: self.burned,
            steps: self.steps,
            heart_rate: self.heart_rate,
        }
    }
}

pub async fn execute(
    args: LogArgs,
    catalog: &dyn FoodCatalog,
    store_config: StoreConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let foods = catalog.search_foods(&args.query).await?;
    if foods.is_empty() && matches!(format, OutputFormat::Table) {
        print_info(&format!("No foods match \"{}\"", args.query));
    }

    let mut store = AppStateStore::new(store_config);
    if matches!(format, OutputFormat::Table) {
        store.subscribe(|event: &StoreEvent, state: &AppState| {
            print_success(&format!(
                "#{} {}: {}",
                event.revision,
                event.kind,
                output::format_macros(&state.macros)
            ));
        });
    }

    for food in foods.into_iter().take(args.take) {
        store.add_meal(food)?;
    }

    if !args.filters.is_empty() {
        let patch: FilterPatch = args.filters.iter().cloned().collect();
        store.set_filters(patch)?;
    }

    let workout = args.workout_patch();
    if !workout.is_empty() {
        store.update_workout_stats(workout)?;
    }

    print_state(store.state(), format)
}

fn print_state(state: &AppState, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            output::print_foods(&state.meals, format)?;
            println!("Totals:  {}", output::format_macros(&state.macros));
            let active: Vec<&str> = state.filters.active().collect();
            if !active.is_empty() {
                println!("Filters: {}", active.join(", "));
            }
            let stats = &state.workout_stats;
            println!(
                "Workout: {} kcal burned | {} steps | {} bpm",
                stats.calories_burned, stats.steps, stats.heart_rate
            );
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Yaml => output::print_single(state, format),
    }
}

fn parse_filter(raw: &str) -> Result<(String, bool), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=true|false, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err("filter name must not be empty".to_string());
    }
    let value = value
        .trim()
        .parse::<bool>()
        .map_err(|_| format!("filter value must be true or false, got `{value}`"))?;
    Ok((key.to_string(), value))
}
