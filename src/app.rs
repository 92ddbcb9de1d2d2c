use crate::detail::{self, DetailOutcome};
use crate::model::Selection;
use crate::query::QueryEngine;
use crate::render::View;
use crate::selector::FilterSelectors;
use crate::source::RecipeSource;
use log::{debug, info};
use std::sync::Arc;

/// Everything the page holds: both filter controls, the current choice and
/// the display region.
///
/// Events take `&mut self`, so each one runs to completion before the next
/// starts and the display always reflects the latest event.
pub struct App {
    source: Arc<dyn RecipeSource>,
    selectors: FilterSelectors,
    selection: Selection,
    /// Selection the last query ran with; `back` repeats it
    last_query: Option<Selection>,
    view: View,
}

impl App {
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        Self {
            source,
            selectors: FilterSelectors::default(),
            selection: Selection::default(),
            last_query: None,
            view: View::Blank,
        }
    }

    /// Fill both filter controls from the source
    pub async fn start(&mut self) {
        self.selectors = FilterSelectors::bootstrap(self.source.as_ref()).await;
        info!(
            "Ready with {} areas and {} categories",
            self.selectors.area.names().count(),
            self.selectors.category.names().count()
        );
    }

    pub fn selectors(&self) -> &FilterSelectors {
        &self.selectors
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// `None` or an empty name picks the "no filter" entry
    pub async fn select_area(&mut self, area: Option<&str>) -> &View {
        self.selection.set_area(area);
        self.refresh().await
    }

    pub async fn select_category(&mut self, category: Option<&str>) -> &View {
        self.selection.set_category(category);
        self.refresh().await
    }

    /// Run the query for the current selection
    pub async fn refresh(&mut self) -> &View {
        let selection = self.selection.clone();
        self.run_query(selection).await
    }

    /// Leave the detail view by repeating the last query
    pub async fn back(&mut self) -> &View {
        let selection = self
            .last_query
            .clone()
            .unwrap_or_else(|| self.selection.clone());
        self.run_query(selection).await
    }

    async fn run_query(&mut self, selection: Selection) -> &View {
        self.view = View::Blank;
        debug!("Running query for {:?}", selection);

        let outcome = QueryEngine::new(self.source.as_ref()).run(&selection).await;
        self.last_query = Some(selection);
        self.view = outcome.into();
        &self.view
    }

    /// Show the full record for a card
    pub async fn open_meal(&mut self, id: &str) -> &View {
        let outcome = detail::resolve(self.source.as_ref(), id).await;
        if let DetailOutcome::Found(detail) = &outcome {
            debug!("Showing {} ({})", detail.name, detail.id);
        }
        self.view = outcome.into();
        &self.view
    }

    /// Id of the n-th card (1-based) currently displayed
    pub fn card_id(&self, position: usize) -> Option<&str> {
        match &self.view {
            View::Cards(meals) => position
                .checked_sub(1)
                .and_then(|index| meals.get(index))
                .map(|meal| meal.id()),
            _ => None,
        }
    }
}
