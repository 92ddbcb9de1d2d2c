/// Number of ingredient/measure slots a detail record carries
pub const INGREDIENT_SLOTS: usize = 20;

/// Cuisine area, used verbatim as label and filter key
pub type AreaName = String;

/// Recipe category, used verbatim as label and filter key
pub type CategoryName = String;

/// Minimal record returned by the filter endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

/// One filled ingredient slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    /// Slot number in 1..=20, kept so gaps never renumber later slots
    pub slot: usize,
    pub name: String,
    pub measure: String,
}

impl Ingredient {
    /// `"<ingredient> - <measure>"`
    pub fn line(&self) -> String {
        format!("{} - {}", self.name, self.measure)
    }
}

/// Full record returned by the lookup endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub category: Option<CategoryName>,
    pub area: Option<AreaName>,
    pub instructions: String,
    /// Non-empty slots only, in slot order
    pub ingredients: Vec<Ingredient>,
}

impl RecipeDetail {
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
        }
    }
}

/// A recipe shown as a card: either the filter summary or, for combined
/// queries, the detail record that confirmed the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Meal {
    Summary(RecipeSummary),
    Detail(RecipeDetail),
}

impl Meal {
    pub fn id(&self) -> &str {
        match self {
            Meal::Summary(summary) => &summary.id,
            Meal::Detail(detail) => &detail.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Meal::Summary(summary) => &summary.name,
            Meal::Detail(detail) => &detail.name,
        }
    }

    pub fn thumbnail_url(&self) -> &str {
        match self {
            Meal::Summary(summary) => &summary.thumbnail_url,
            Meal::Detail(detail) => &detail.thumbnail_url,
        }
    }
}

/// Current filter choice; `None` means the "no filter" sentinel is chosen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub area: Option<AreaName>,
    pub category: Option<CategoryName>,
}

impl Selection {
    pub fn new(area: Option<&str>, category: Option<&str>) -> Self {
        Self {
            area: normalize(area),
            category: normalize(category),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.area.is_none() && self.category.is_none()
    }

    pub fn set_area(&mut self, area: Option<&str>) {
        self.area = normalize(area);
    }

    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = normalize(category);
    }
}

// The sentinel option carries an empty value
fn normalize(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
