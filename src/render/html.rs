//! HTML fragments for the display region and the filter page.
//!
//! Every value coming from the recipe service goes through `html_escape`,
//! so names and instructions are always inserted as text, never as markup.

use crate::model::{Meal, RecipeDetail, Selection};
use crate::render::{Renderer, View, BACK_BUTTON_ID, RESULTS_ID};
use crate::selector::{FilterSelectors, Selector};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn card(out: &mut String, meal: &Meal) {
        let _ = write!(
            out,
            r#"<div class="meal" data-id="{id}"><h3>{name}</h3><img src="{src}" alt="{alt}"></div>"#,
            id = encode_double_quoted_attribute(meal.id()),
            name = encode_text(meal.name()),
            src = encode_double_quoted_attribute(meal.thumbnail_url()),
            alt = encode_double_quoted_attribute(meal.name()),
        );
    }

    fn detail(out: &mut String, detail: &RecipeDetail) {
        let _ = write!(
            out,
            r#"<div class="meal-detail"><h2>{name}</h2><img src="{src}" alt="{alt}" style="width:300px; border-radius:8px;">"#,
            name = encode_text(&detail.name),
            src = encode_double_quoted_attribute(&detail.thumbnail_url),
            alt = encode_double_quoted_attribute(&detail.name),
        );

        out.push_str("<h3>Ingredients:</h3><ul>");
        for ingredient in &detail.ingredients {
            let _ = write!(out, "<li>{}</li>", encode_text(&ingredient.line()));
        }
        out.push_str("</ul>");

        let _ = write!(
            out,
            r#"<h3>Instructions:</h3><p>{}</p><button id="{}">Back to results</button></div>"#,
            encode_text(&detail.instructions),
            BACK_BUTTON_ID,
        );
    }

    fn select(out: &mut String, selector: &Selector, chosen: Option<&str>) {
        let _ = write!(out, r#"<select id="{}">"#, selector.id);
        for option in &selector.options {
            let selected = match chosen {
                Some(value) => option.value == value,
                None => option.is_sentinel(),
            };
            let _ = write!(
                out,
                r#"<option value="{}"{}>{}</option>"#,
                encode_double_quoted_attribute(&option.value),
                if selected { " selected" } else { "" },
                encode_text(&option.label),
            );
        }
        out.push_str("</select>");
    }

    /// Both selectors followed by the results region
    pub fn render_page(
        &self,
        selectors: &FilterSelectors,
        selection: &Selection,
        view: &View,
    ) -> String {
        let mut out = String::new();
        Self::select(&mut out, &selectors.area, selection.area.as_deref());
        Self::select(&mut out, &selectors.category, selection.category.as_deref());
        let _ = write!(
            out,
            r#"<div id="{}">{}</div>"#,
            RESULTS_ID,
            self.render(view)
        );
        out
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, view: &View) -> String {
        let mut out = String::new();
        match view {
            View::Blank => {}
            View::Message(message) => out.push_str(&encode_text(message)),
            View::Cards(meals) => {
                for meal in meals {
                    Self::card(&mut out, meal);
                }
            }
            View::Detail(detail) => Self::detail(&mut out, detail),
        }
        out
    }
}
