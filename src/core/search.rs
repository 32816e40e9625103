use crate::models::Recipe;

/// Case-insensitive substring filter over recipe names and ingredients.
///
/// Returns references in input order; the underlying collection is never
/// mutated, only the displayed subset changes. An empty term matches
/// everything.
pub fn filter<'a>(recipes: &'a [Recipe], term: &str) -> Vec<&'a Recipe> {
    let needle = term.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| {
            recipe.name.to_lowercase().contains(&needle)
                || recipe
                    .ingredients
                    .iter()
                    .any(|ingredient| ingredient.to_lowercase().contains(&needle))
        })
        .collect()
}
