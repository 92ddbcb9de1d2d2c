use crate::error::MealError;
use crate::model::{Meal, RecipeDetail, Selection};
use crate::source::RecipeSource;
use log::{debug, error, info};

pub const ERROR_FETCHING_MEALS: &str = "Error fetching meals.";

/// Which well-formed-but-empty answer a query ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyResult {
    /// The area filter returned nothing (also used when both filters are set)
    Area,
    Category,
    /// Area had candidates but none carried the selected category
    AreaAndCategory,
}

impl EmptyResult {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyResult::Area => "No meals found for this area.",
            EmptyResult::Category => "No meals found for this category.",
            EmptyResult::AreaAndCategory => "No meals found for this area and category.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Neither filter chosen; nothing was requested
    NoFilter,
    /// Matches in display order
    Meals(Vec<Meal>),
    Empty(EmptyResult),
    /// A request or decode failed; the whole query is abandoned
    Failed,
}

impl QueryOutcome {
    /// Replacement text for the display region, if this outcome has one
    pub fn message(&self) -> Option<&'static str> {
        match self {
            QueryOutcome::Empty(empty) => Some(empty.message()),
            QueryOutcome::Failed => Some(ERROR_FETCHING_MEALS),
            QueryOutcome::NoFilter | QueryOutcome::Meals(_) => None,
        }
    }
}

/// Runs area/category selections against a recipe source
pub struct QueryEngine<'a> {
    source: &'a dyn RecipeSource,
}

impl<'a> QueryEngine<'a> {
    pub fn new(source: &'a dyn RecipeSource) -> Self {
        Self { source }
    }

    pub async fn run(&self, selection: &Selection) -> QueryOutcome {
        match self.try_run(selection).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Query {:?} failed: {}", selection, e);
                QueryOutcome::Failed
            }
        }
    }

    async fn try_run(&self, selection: &Selection) -> Result<QueryOutcome, MealError> {
        let outcome = match (selection.area.as_deref(), selection.category.as_deref()) {
            (None, None) => QueryOutcome::NoFilter,
            (Some(area), None) => {
                let meals = self.source.filter_by_area(area).await?;
                found_or(meals.into_iter().map(Meal::Summary).collect(), EmptyResult::Area)
            }
            (None, Some(category)) => {
                let meals = self.source.filter_by_category(category).await?;
                found_or(
                    meals.into_iter().map(Meal::Summary).collect(),
                    EmptyResult::Category,
                )
            }
            (Some(area), Some(category)) => self.area_and_category(area, category).await?,
        };
        Ok(outcome)
    }

    /// The service has no combined filter, so each area candidate is looked
    /// up one after another and kept only if its category matches exactly.
    async fn area_and_category(
        &self,
        area: &str,
        category: &str,
    ) -> Result<QueryOutcome, MealError> {
        let candidates = self.source.filter_by_area(area).await?;
        if candidates.is_empty() {
            return Ok(QueryOutcome::Empty(EmptyResult::Area));
        }

        info!(
            "Checking {} candidates from {} for category {}",
            candidates.len(),
            area,
            category
        );

        let mut survivors: Vec<RecipeDetail> = Vec::new();
        for candidate in &candidates {
            let detail = self.source.lookup(&candidate.id).await?;
            match detail {
                Some(detail) if detail.category.as_deref() == Some(category) => {
                    survivors.push(detail)
                }
                Some(_) => {}
                None => debug!("Candidate {} has no detail record", candidate.id),
            }
        }

        Ok(found_or(
            survivors.into_iter().map(Meal::Detail).collect(),
            EmptyResult::AreaAndCategory,
        ))
    }
}

fn found_or(meals: Vec<Meal>, empty: EmptyResult) -> QueryOutcome {
    if meals.is_empty() {
        QueryOutcome::Empty(empty)
    } else {
        QueryOutcome::Meals(meals)
    }
}
