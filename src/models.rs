use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Shown wherever a recipe carries no image reference of its own.
pub const PLACEHOLDER_IMAGE: &str = "placeholder://recipe-card";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Recipe {
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Card summary line: the first three ingredients, with an ellipsis
    /// appended when more exist.
    pub fn ingredient_summary(&self) -> String {
        let mut summary = self
            .ingredients
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if self.ingredients.len() > 3 {
            summary.push_str("...");
        }
        summary
    }
}

/// A recipe as captured by the authoring form, before an id is assigned.
///
/// The multi-line fields hold raw form text; each line becomes one element
/// when the recipe is materialized, blank lines included.
#[derive(Debug, Clone, Default)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub image: String,
}

impl NewRecipe {
    pub fn into_recipe(self, id: i64) -> Recipe {
        let image = if self.image.trim().is_empty() {
            None
        } else {
            Some(self.image)
        };
        Recipe {
            id,
            name: self.name,
            ingredients: split_lines(&self.ingredients),
            instructions: split_lines(&self.instructions),
            image,
        }
    }
}

fn split_lines(field: &str) -> Vec<String> {
    field.split('\n').map(str::to_string).collect()
}

/// Millisecond timestamp used as the id of a freshly authored recipe.
/// Two recipes authored within the same millisecond collide, as would a
/// catalog id equal to a timestamp; the store does not guard against either.
pub fn timestamp_id() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
