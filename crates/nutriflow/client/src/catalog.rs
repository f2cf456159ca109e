//! Food catalog lookup.

use crate::ClientResult;
use async_trait::async_trait;
use nutriflow_types::FoodItem;

/// Text search over a food catalog
#[async_trait]
pub trait FoodCatalog: Send + Sync {
    /// Foods matching `query`. A blank query matches nothing.
    async fn search_foods(&self, query: &str) -> ClientResult<Vec<FoodItem>>;
}

/// Catalog over a fixed list of foods
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    foods: Vec<FoodItem>,
}

impl InMemoryCatalog {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[async_trait]
impl FoodCatalog for InMemoryCatalog {
    async fn search_foods(&self, query: &str) -> ClientResult<Vec<FoodItem>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .foods
            .iter()
            .filter(|food| {
                food.name.to_lowercase().contains(&needle)
                    || food
                        .category
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}
