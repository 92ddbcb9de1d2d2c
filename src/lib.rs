//! Browse TheMealDB recipes by cuisine area and category.
//!
//! The service can filter by area or by category but not by both, so a
//! combined selection fetches the area's meals and looks each one up to
//! check its category.

pub mod app;
pub mod builder;
pub mod config;
pub mod detail;
pub mod error;
pub mod model;
pub mod query;
pub mod render;
pub mod selector;
pub mod source;

pub use app::App;
pub use builder::{MealFinder, MealFinderBuilder};
pub use config::FinderConfig;
pub use detail::DetailOutcome;
pub use error::MealError;
pub use model::{Ingredient, Meal, RecipeDetail, RecipeSummary, Selection};
pub use query::{EmptyResult, QueryEngine, QueryOutcome};
pub use render::{HtmlRenderer, Renderer, TextRenderer, View};
pub use selector::{FilterSelectors, SelectOption, Selector};
pub use source::{MealDbClient, RecipeSource};

/// All area names offered by the service
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let areas = meal_finder::list_areas().await?;
/// # Ok(())
/// # }
/// ```
pub async fn list_areas() -> Result<Vec<String>, MealError> {
    let finder = MealFinder::from_env()?;
    finder.source().list_areas().await
}

/// All category names offered by the service
pub async fn list_categories() -> Result<Vec<String>, MealError> {
    let finder = MealFinder::from_env()?;
    finder.source().list_categories().await
}

/// Meals matching an optional area and an optional category
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use meal_finder::QueryOutcome;
///
/// if let QueryOutcome::Meals(meals) = meal_finder::find_meals(Some("Italian"), Some("Seafood")).await? {
///     for meal in meals {
///         println!("{}", meal.name());
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub async fn find_meals(
    area: Option<&str>,
    category: Option<&str>,
) -> Result<QueryOutcome, MealError> {
    let finder = MealFinder::from_env()?;
    Ok(finder.find(&Selection::new(area, category)).await)
}

/// Full record for one meal id
pub async fn fetch_meal_details(id: &str) -> Result<DetailOutcome, MealError> {
    let finder = MealFinder::from_env()?;
    Ok(finder.details(id).await)
}
