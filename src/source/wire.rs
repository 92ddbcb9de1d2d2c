//! JSON shapes returned by TheMealDB.
//!
//! Every endpoint wraps its payload in `{ "meals": [...] }`, and answers
//! `{ "meals": null }` (or omits the field) when nothing matches.

use crate::model::{Ingredient, RecipeDetail, RecipeSummary, INGREDIENT_SLOTS};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    meals: Option<Vec<T>>,
}

impl<T> Envelope<T> {
    pub(crate) fn into_meals(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AreaEntry {
    #[serde(rename = "strArea")]
    pub area: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryEntry {
    #[serde(rename = "strCategory")]
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryEntry {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
}

impl From<SummaryEntry> for RecipeSummary {
    fn from(entry: SummaryEntry) -> Self {
        RecipeSummary {
            id: entry.id,
            name: entry.name,
            thumbnail_url: entry.thumbnail.unwrap_or_default(),
        }
    }
}

/// Lookup records have ~50 loosely typed fields, most of them nullable,
/// so they are read field by field from the raw object.
pub(crate) type DetailEntry = Map<String, Value>;

fn text(record: &DetailEntry, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

pub(crate) fn detail_from_entry(record: &DetailEntry) -> RecipeDetail {
    // Slots keep their own numbering; blank ones are skipped without shifting later slots
    let ingredients = (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let name = text(record, &format!("strIngredient{slot}"))?;
            if name.trim().is_empty() {
                return None;
            }
            let measure = text(record, &format!("strMeasure{slot}")).unwrap_or_default();
            Some(Ingredient {
                slot,
                name,
                measure,
            })
        })
        .collect();

    RecipeDetail {
        id: text(record, "idMeal").unwrap_or_default(),
        name: text(record, "strMeal").unwrap_or_default(),
        thumbnail_url: text(record, "strMealThumb").unwrap_or_default(),
        category: text(record, "strCategory"),
        area: text(record, "strArea"),
        instructions: text(record, "strInstructions").unwrap_or_default(),
        ingredients,
    }
}
