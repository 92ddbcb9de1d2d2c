use crate::config::FinderConfig;
use crate::error::MealError;
use crate::model::{AreaName, CategoryName, RecipeDetail, RecipeSummary};
use crate::source::wire::{
    detail_from_entry, AreaEntry, CategoryEntry, DetailEntry, Envelope, SummaryEntry,
};
use crate::source::RecipeSource;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// TheMealDB over HTTP
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &FinderConfig) -> Result<Self, MealError> {
        Self::with_timeout(config, config.timeout())
    }

    /// Like [`MealDbClient::new`] with a request timeout finer than whole seconds
    pub fn with_timeout(config: &FinderConfig, timeout: Duration) -> Result<Self, MealError> {
        Url::parse(&config.base_url)
            .map_err(|e| MealError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MealError> {
        Self::new(&FinderConfig {
            base_url: base_url.into(),
            ..FinderConfig::default()
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, MealError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.client.get(url.as_str()).query(query).send().await?;
        debug!("GET {} -> {}", response.url(), response.status());

        let status = response.status();
        if !status.is_success() {
            return Err(MealError::StatusError {
                url: response.url().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.into_meals())
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    fn source_name(&self) -> &str {
        "themealdb"
    }

    async fn list_areas(&self) -> Result<Vec<AreaName>, MealError> {
        let entries: Vec<AreaEntry> = self.get("list.php", &[("a", "list")]).await?;
        Ok(entries.into_iter().map(|entry| entry.area).collect())
    }

    async fn list_categories(&self) -> Result<Vec<CategoryName>, MealError> {
        let entries: Vec<CategoryEntry> = self.get("list.php", &[("c", "list")]).await?;
        Ok(entries.into_iter().map(|entry| entry.category).collect())
    }

    async fn filter_by_area(&self, area: &str) -> Result<Vec<RecipeSummary>, MealError> {
        let entries: Vec<SummaryEntry> = self.get("filter.php", &[("a", area)]).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>, MealError> {
        let entries: Vec<SummaryEntry> = self.get("filter.php", &[("c", category)]).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>, MealError> {
        let entries: Vec<DetailEntry> = self.get("lookup.php", &[("i", id)]).await?;
        Ok(entries.first().map(detail_from_entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_list_areas() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/list.php")
            .match_query(Matcher::UrlEncoded("a".into(), "list".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": [{"strArea": "American"}, {"strArea": "British"}]}"#)
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(server.url()).unwrap();
        let areas = client.list_areas().await.unwrap();

        assert_eq!(areas, vec!["American", "British"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_filter_encodes_query_value() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("c".into(), "Side & Starter".into()))
            .with_status(200)
            .with_body(
                r#"{"meals": [{"strMeal": "Fries", "strMealThumb": "https://x/f.jpg", "idMeal": "7"}]}"#,
            )
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(format!("{}/", server.url())).unwrap();
        let meals = client.filter_by_category("Side & Starter").await.unwrap();

        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Fries");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_lookup_unknown_id_is_none() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "0".into()))
            .with_status(200)
            .with_body(r#"{"meals": null}"#)
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(server.url()).unwrap();
        assert!(client.lookup("0").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/list.php")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(server.url()).unwrap();
        let result = client.list_categories().await;
        assert!(matches!(
            result,
            Err(MealError::StatusError { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(server.url()).unwrap();
        let result = client.filter_by_area("Italian").await;
        assert!(matches!(result, Err(MealError::ParseError(_))));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = MealDbClient::with_base_url("not a url");
        assert!(matches!(result, Err(MealError::InvalidBaseUrl(_))));
    }
}
