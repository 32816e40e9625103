use crate::models::Recipe;

/// Appends `recipe` unless one with the same id is already present.
/// Returns whether the collection changed.
pub fn save_recipe(my_recipes: &mut Vec<Recipe>, recipe: Recipe) -> bool {
    if my_recipes.iter().any(|r| r.id == recipe.id) {
        return false;
    }
    my_recipes.push(recipe);
    true
}

/// Removes the recipe with the given id, if present.
/// Returns whether the collection changed.
pub fn delete_recipe(my_recipes: &mut Vec<Recipe>, id: i64) -> bool {
    let before = my_recipes.len();
    my_recipes.retain(|r| r.id != id);
    my_recipes.len() != before
}

/// Looks up an id across the catalog and the personal shelf, catalog first.
pub fn find_recipe<'a>(
    catalog: &'a [Recipe],
    my_recipes: &'a [Recipe],
    id: i64,
) -> Option<&'a Recipe> {
    catalog
        .iter()
        .chain(my_recipes.iter())
        .find(|r| r.id == id)
}
