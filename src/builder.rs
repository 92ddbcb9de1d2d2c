use std::sync::Arc;
use std::time::Duration;

use crate::{
    detail, App, DetailOutcome, FilterSelectors, FinderConfig, MealDbClient, MealError,
    QueryEngine, QueryOutcome, RecipeSource, Selection,
};

/// Builder for configuring a [`MealFinder`]
#[derive(Default)]
pub struct MealFinderBuilder {
    config: Option<FinderConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    source: Option<Arc<dyn RecipeSource>>,
}

impl MealFinderBuilder {
    /// Start from a loaded configuration instead of the defaults
    ///
    /// # Example
    /// ```no_run
    /// use meal_finder::{FinderConfig, MealFinder};
    ///
    /// let config = FinderConfig::load().unwrap();
    /// let builder = MealFinder::builder().config(config);
    /// ```
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Point the client at another TheMealDB-compatible endpoint
    ///
    /// # Example
    /// ```
    /// use meal_finder::MealFinder;
    ///
    /// let builder = MealFinder::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use meal_finder::MealFinder;
    /// use std::time::Duration;
    ///
    /// let builder = MealFinder::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use an existing source; HTTP settings are then ignored
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Build the finder
    ///
    /// # Errors
    /// Returns `MealError` if:
    /// - The timeout is zero
    /// - The base URL cannot be parsed
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<MealFinder, MealError> {
        if let Some(source) = self.source {
            return Ok(MealFinder { source });
        }

        let mut config = self.config.unwrap_or_default();
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }

        let timeout = match self.timeout {
            Some(timeout) if timeout.is_zero() => {
                return Err(MealError::BuilderError(
                    "Timeout must be greater than zero".to_string(),
                ));
            }
            Some(timeout) => timeout,
            None => config.timeout(),
        };

        let client = MealDbClient::with_timeout(&config, timeout)?;
        Ok(MealFinder {
            source: Arc::new(client),
        })
    }
}

/// Entry point for browsing recipes by area and category
#[derive(Clone)]
pub struct MealFinder {
    source: Arc<dyn RecipeSource>,
}

impl MealFinder {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use meal_finder::MealFinder;
    ///
    /// let finder = MealFinder::builder().build().unwrap();
    /// ```
    pub fn builder() -> MealFinderBuilder {
        MealFinderBuilder::default()
    }

    /// Finder configured from `meal-finder.toml` and `MEAL_FINDER__*` variables
    pub fn from_env() -> Result<Self, MealError> {
        let config = FinderConfig::load()?;
        Self::builder().config(config).build()
    }

    pub fn source(&self) -> Arc<dyn RecipeSource> {
        self.source.clone()
    }

    pub async fn selectors(&self) -> FilterSelectors {
        FilterSelectors::bootstrap(self.source.as_ref()).await
    }

    pub async fn find(&self, selection: &Selection) -> QueryOutcome {
        QueryEngine::new(self.source.as_ref()).run(selection).await
    }

    pub async fn details(&self, id: &str) -> DetailOutcome {
        detail::resolve(self.source.as_ref(), id).await
    }

    /// Fresh page state backed by this finder's source
    pub fn app(&self) -> App {
        App::new(self.source.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = MealFinder::builder().timeout(Duration::ZERO).build();
        assert!(matches!(result, Err(MealError::BuilderError(_))));
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let result = MealFinder::builder().base_url("::nope::").build();
        assert!(matches!(result, Err(MealError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_builder_defaults() {
        let finder = MealFinder::builder().build().unwrap();
        assert_eq!(finder.source().source_name(), "themealdb");
    }
}
