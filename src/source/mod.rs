mod http;
pub(crate) mod wire;

pub use http::MealDbClient;

use crate::error::MealError;
use crate::model::{AreaName, CategoryName, RecipeDetail, RecipeSummary};
use async_trait::async_trait;

/// Read-only access to a recipe catalogue
///
/// Empty results are `Ok` with an empty list (or `None` for lookups); only
/// transport and decode failures are errors.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "themealdb")
    fn source_name(&self) -> &str;

    async fn list_areas(&self) -> Result<Vec<AreaName>, MealError>;

    async fn list_categories(&self) -> Result<Vec<CategoryName>, MealError>;

    async fn filter_by_area(&self, area: &str) -> Result<Vec<RecipeSummary>, MealError>;

    async fn filter_by_category(&self, category: &str)
        -> Result<Vec<RecipeSummary>, MealError>;

    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>, MealError>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory catalogue that records every call made against it.

    use super::*;
    use crate::model::Ingredient;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub(crate) struct FakeSource {
        pub areas: Vec<String>,
        pub categories: Vec<String>,
        pub by_area: HashMap<String, Vec<RecipeSummary>>,
        pub by_category: HashMap<String, Vec<RecipeSummary>>,
        pub details: HashMap<String, RecipeDetail>,
        /// Calls whose key starts with one of these fail with a status error
        pub failing: Vec<String>,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) -> Result<(), MealError> {
            let fails = self.failing.iter().any(|prefix| call.starts_with(prefix));
            self.calls.lock().unwrap().push(call.clone());
            if fails {
                return Err(MealError::StatusError {
                    url: call,
                    status: 500,
                });
            }
            Ok(())
        }

        /// Adds a meal to both filter indexes and the lookup table
        pub fn with_meal(mut self, id: &str, name: &str, area: &str, category: &str) -> Self {
            let detail = detail(id, name, area, category);
            self.by_area
                .entry(area.to_string())
                .or_default()
                .push(detail.summary());
            self.by_category
                .entry(category.to_string())
                .or_default()
                .push(detail.summary());
            self.details.insert(id.to_string(), detail);
            self
        }
    }

    pub(crate) fn detail(id: &str, name: &str, area: &str, category: &str) -> RecipeDetail {
        RecipeDetail {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail_url: format!("https://img.example/{id}.jpg"),
            category: Some(category.to_string()),
            area: Some(area.to_string()),
            instructions: format!("Cook {name}."),
            ingredients: vec![Ingredient {
                slot: 1,
                name: "Salt".to_string(),
                measure: "1 tsp".to_string(),
            }],
        }
    }

    #[async_trait]
    impl RecipeSource for FakeSource {
        fn source_name(&self) -> &str {
            "fake"
        }

        async fn list_areas(&self) -> Result<Vec<AreaName>, MealError> {
            self.record("areas".to_string())?;
            Ok(self.areas.clone())
        }

        async fn list_categories(&self) -> Result<Vec<CategoryName>, MealError> {
            self.record("categories".to_string())?;
            Ok(self.categories.clone())
        }

        async fn filter_by_area(&self, area: &str) -> Result<Vec<RecipeSummary>, MealError> {
            self.record(format!("area:{area}"))?;
            Ok(self.by_area.get(area).cloned().unwrap_or_default())
        }

        async fn filter_by_category(
            &self,
            category: &str,
        ) -> Result<Vec<RecipeSummary>, MealError> {
            self.record(format!("category:{category}"))?;
            Ok(self.by_category.get(category).cloned().unwrap_or_default())
        }

        async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>, MealError> {
            self.record(format!("lookup:{id}"))?;
            Ok(self.details.get(id).cloned())
        }
    }
}
