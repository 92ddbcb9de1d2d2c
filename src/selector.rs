use crate::source::RecipeSource;
use log::{debug, warn};

pub const AREA_SELECT_ID: &str = "area-select";
pub const CATEGORY_SELECT_ID: &str = "category-select";

/// One entry of a choice control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Empty for the "no filter" sentinel
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn named(name: String) -> Self {
        Self {
            value: name.clone(),
            label: name,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.value.is_empty()
    }
}

/// A choice control: a stable identifier plus its options, sentinel first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub id: &'static str,
    pub options: Vec<SelectOption>,
}

impl Selector {
    fn with_sentinel(id: &'static str, label: &str) -> Self {
        Self {
            id,
            options: vec![SelectOption {
                value: String::new(),
                label: label.to_string(),
            }],
        }
    }

    pub fn area() -> Self {
        Self::with_sentinel(AREA_SELECT_ID, "Select Area")
    }

    pub fn category() -> Self {
        Self::with_sentinel(CATEGORY_SELECT_ID, "Select Category")
    }

    /// Names offered besides the sentinel, in upstream order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|option| !option.is_sentinel())
            .map(|option| option.value.as_str())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.names().any(|name| name == value)
    }
}

/// Both filter controls as filled at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelectors {
    pub area: Selector,
    pub category: Selector,
}

impl Default for FilterSelectors {
    fn default() -> Self {
        Self {
            area: Selector::area(),
            category: Selector::category(),
        }
    }
}

impl FilterSelectors {
    /// Clear both controls and fill them from the source
    ///
    /// A failed list request leaves that control with only its sentinel;
    /// the failure is logged and otherwise ignored.
    pub async fn bootstrap(source: &dyn RecipeSource) -> Self {
        let mut selectors = Self::default();

        match source.list_areas().await {
            Ok(areas) => {
                debug!("Loaded {} areas from {}", areas.len(), source.source_name());
                selectors
                    .area
                    .options
                    .extend(areas.into_iter().map(SelectOption::named));
            }
            Err(e) => warn!("Failed to load areas: {}", e),
        }

        match source.list_categories().await {
            Ok(categories) => {
                debug!(
                    "Loaded {} categories from {}",
                    categories.len(),
                    source.source_name()
                );
                selectors
                    .category
                    .options
                    .extend(categories.into_iter().map(SelectOption::named));
            }
            Err(e) => warn!("Failed to load categories: {}", e),
        }

        selectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::FakeSource;

    #[tokio::test]
    async fn test_bootstrap_prefixes_sentinel() {
        let source = FakeSource {
            areas: vec!["Canadian".to_string(), "Italian".to_string()],
            categories: vec!["Beef".to_string()],
            ..Default::default()
        };

        let selectors = FilterSelectors::bootstrap(&source).await;

        assert_eq!(selectors.area.id, "area-select");
        assert_eq!(selectors.area.options[0].label, "Select Area");
        assert!(selectors.area.options[0].is_sentinel());
        assert_eq!(
            selectors.area.names().collect::<Vec<_>>(),
            vec!["Canadian", "Italian"]
        );
        assert_eq!(selectors.category.options[0].label, "Select Category");
        assert!(selectors.category.contains("Beef"));
        assert_eq!(source.calls(), vec!["areas", "categories"]);
    }

    #[tokio::test]
    async fn test_failed_list_leaves_only_sentinel() {
        let source = FakeSource {
            areas: vec!["Canadian".to_string()],
            categories: vec!["Beef".to_string()],
            failing: vec!["areas".to_string()],
            ..Default::default()
        };

        let selectors = FilterSelectors::bootstrap(&source).await;

        assert_eq!(selectors.area, Selector::area());
        assert_eq!(selectors.category.names().count(), 1);
    }
}
