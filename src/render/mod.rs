mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::detail::DetailOutcome;
use crate::model::{Meal, RecipeDetail};
use crate::query::QueryOutcome;

pub const RESULTS_ID: &str = "results";
pub const BACK_BUTTON_ID: &str = "back-btn";

/// Contents of the display region
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Blank,
    /// A single plain-text message replacing everything else
    Message(String),
    /// Selectable recipe cards, in order
    Cards(Vec<Meal>),
    Detail(RecipeDetail),
}

impl View {
    pub fn message(text: impl Into<String>) -> Self {
        View::Message(text.into())
    }
}

impl From<QueryOutcome> for View {
    fn from(outcome: QueryOutcome) -> Self {
        if let Some(message) = outcome.message() {
            return View::message(message);
        }
        match outcome {
            QueryOutcome::Meals(meals) => View::Cards(meals),
            _ => View::Blank,
        }
    }
}

impl From<DetailOutcome> for View {
    fn from(outcome: DetailOutcome) -> Self {
        if let Some(message) = outcome.message() {
            return View::message(message);
        }
        match outcome {
            DetailOutcome::Found(detail) => View::Detail(detail),
            _ => View::Blank,
        }
    }
}

/// Turns the display region into output for one presentation layer
pub trait Renderer {
    fn render(&self, view: &View) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::EmptyResult;

    #[test]
    fn test_view_from_outcomes() {
        assert_eq!(View::from(QueryOutcome::NoFilter), View::Blank);
        assert_eq!(
            View::from(QueryOutcome::Empty(EmptyResult::Category)),
            View::message("No meals found for this category.")
        );
        assert_eq!(
            View::from(QueryOutcome::Failed),
            View::message("Error fetching meals.")
        );
        assert_eq!(
            View::from(DetailOutcome::NotFound),
            View::message("No details found.")
        );
        assert_eq!(View::from(QueryOutcome::Meals(Vec::new())), View::Cards(Vec::new()));
    }
}
