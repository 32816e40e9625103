//! Tests for shelf mutations and form-authored recipes.
//!
//! Tests cover:
//! - Idempotent save by id
//! - Delete of an absent id as a no-op
//! - Catalog-first lookup across both collections
//! - Line-splitting of authored multi-line fields
//! - The card summary projection

mod common;

use common::*;
use recipeshelf::core::collection;

#[tokio::test]
async fn test_save_is_idempotent_by_id() -> anyhow::Result<()> {
    let (store, _dir) = create_test_store().await;
    let mut my_recipes = Vec::new();

    assert!(collection::save_recipe(
        &mut my_recipes,
        make_recipe(1, "Pasta", &["tomato"])
    ));
    store.save_all(&my_recipes).await?;

    // Saving the same id again leaves the collection unchanged.
    assert!(!collection::save_recipe(
        &mut my_recipes,
        make_recipe(1, "Pasta", &["tomato"])
    ));
    store.save_all(&my_recipes).await?;

    assert_eq!(my_recipes.len(), 1);
    assert_eq!(store.load().await?, my_recipes);

    Ok(())
}

#[test]
fn test_delete_missing_id_is_noop() {
    let mut my_recipes = vec![make_recipe(1, "Pasta", &["tomato"])];

    assert!(!collection::delete_recipe(&mut my_recipes, 99));
    assert_eq!(my_recipes.len(), 1);

    assert!(collection::delete_recipe(&mut my_recipes, 1));
    assert!(my_recipes.is_empty());
}

#[test]
fn test_lookup_prefers_catalog_over_shelf() {
    let catalog = vec![make_recipe(1, "Catalog Pasta", &["tomato"])];
    let my_recipes = vec![
        make_recipe(1, "Shelf Pasta", &["tomato"]),
        make_recipe(2, "Soup", &["water"]),
    ];

    let found = collection::find_recipe(&catalog, &my_recipes, 1).expect("recipe should exist");
    assert_eq!(found.name, "Catalog Pasta");

    let found = collection::find_recipe(&catalog, &my_recipes, 2).expect("recipe should exist");
    assert_eq!(found.name, "Soup");

    assert!(collection::find_recipe(&catalog, &my_recipes, 3).is_none());
}

#[test]
fn test_form_fields_split_on_line_breaks() {
    let form = NewRecipe {
        name: "Omelette".to_string(),
        ingredients: "egg\nflour".to_string(),
        instructions: "Whisk.\nFry.".to_string(),
        image: String::new(),
    };

    let recipe = form.into_recipe(17);

    assert_eq!(recipe.id, 17);
    assert_eq!(recipe.ingredients, vec!["egg", "flour"]);
    assert_eq!(recipe.instructions, vec!["Whisk.", "Fry."]);

    // Blank image field falls back to the placeholder.
    assert_eq!(recipe.image, None);
    assert_eq!(recipe.image_or_placeholder(), PLACEHOLDER_IMAGE);
}

#[test]
fn test_blank_lines_become_empty_elements() {
    let form = NewRecipe {
        name: "Bread".to_string(),
        ingredients: "flour\n\nwater".to_string(),
        instructions: "Knead.".to_string(),
        image: "  ".to_string(),
    };

    let recipe = form.into_recipe(18);

    assert_eq!(recipe.ingredients, vec!["flour", "", "water"]);
    assert_eq!(recipe.image, None);
}

#[test]
fn test_summary_truncates_after_three_ingredients() {
    let pasta = make_recipe(1, "Pasta", &["tomato", "basil", "pasta", "salt"]);
    assert_eq!(pasta.ingredient_summary(), "tomato, basil, pasta...");

    let soup = make_recipe(2, "Soup", &["water", "leek"]);
    assert_eq!(soup.ingredient_summary(), "water, leek");
}
