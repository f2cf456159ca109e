//! Food search

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use nutriflow_client::FoodCatalog;

pub async fn execute(
    query: &str,
    catalog: &dyn FoodCatalog,
    format: OutputFormat,
) -> CliResult<()> {
    let foods = catalog.search_foods(query).await?;
    output::print_foods(&foods, format)
}
