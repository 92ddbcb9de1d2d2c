use crate::model::RecipeDetail;
use crate::source::RecipeSource;
use log::error;

pub const NO_DETAILS_FOUND: &str = "No details found.";
pub const ERROR_FETCHING_DETAILS: &str = "Error fetching meal details.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Found(RecipeDetail),
    NotFound,
    Failed,
}

impl DetailOutcome {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DetailOutcome::Found(_) => None,
            DetailOutcome::NotFound => Some(NO_DETAILS_FOUND),
            DetailOutcome::Failed => Some(ERROR_FETCHING_DETAILS),
        }
    }
}

/// Fetch the full record for one recipe id
pub async fn resolve(source: &dyn RecipeSource, id: &str) -> DetailOutcome {
    match source.lookup(id).await {
        Ok(Some(detail)) => DetailOutcome::Found(detail),
        Ok(None) => DetailOutcome::NotFound,
        Err(e) => {
            error!("Lookup of meal {} failed: {}", id, e);
            DetailOutcome::Failed
        }
    }
}
