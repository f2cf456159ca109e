//! Output formatting utilities

use crate::error::CliResult;
use colored::*;
use nutriflow_types::{FoodItem, MacroTotals};
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Table row for a food
#[derive(Debug, Serialize, Tabled)]
pub struct FoodRow {
    id: String,
    name: String,
    kcal: f64,
    #[tabled(rename = "protein (g)")]
    protein: f64,
    #[tabled(rename = "carbs (g)")]
    carbs: f64,
    #[tabled(rename = "fat (g)")]
    fat: f64,
    category: String,
}

impl From<&FoodItem> for FoodRow {
    fn from(food: &FoodItem) -> Self {
        Self {
            id: food
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            name: food.name.clone(),
            kcal: food.calories,
            protein: food.protein,
            carbs: food.carbs,
            fat: food.fat,
            category: food.category.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Print a list of foods in the specified format
pub fn print_foods(foods: &[FoodItem], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            if foods.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                let rows: Vec<FoodRow> = foods.iter().map(FoodRow::from).collect();
                println!("{}", Table::new(rows));
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Yaml => print_single(&foods, format),
    }
}

/// Print a single item in the specified format
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(data)?);
        }
    }
    Ok(())
}

/// One-line macro summary
pub fn format_macros(macros: &MacroTotals) -> String {
    format!(
        "{} kcal | protein {}g | carbs {}g | fat {}g",
        macros.calories, macros.protein, macros.carbs, macros.fat
    )
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}
