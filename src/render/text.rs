use crate::render::{Renderer, View};

/// Plain text for terminals
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, view: &View) -> String {
        match view {
            View::Blank => String::new(),
            View::Message(message) => format!("{message}\n"),
            View::Cards(meals) => meals
                .iter()
                .enumerate()
                .map(|(i, meal)| {
                    format!(
                        "{}. {} [{}]\n   {}\n",
                        i + 1,
                        meal.name(),
                        meal.id(),
                        meal.thumbnail_url()
                    )
                })
                .collect(),
            View::Detail(detail) => {
                let mut out = format!("{}\n{}\n\nIngredients:\n", detail.name, detail.thumbnail_url);
                for ingredient in &detail.ingredients {
                    out.push_str(&format!("- {}\n", ingredient.line()));
                }
                out.push_str(&format!("\nInstructions:\n{}\n", detail.instructions));
                out
            }
        }
    }
}
