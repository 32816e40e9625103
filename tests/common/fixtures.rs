use recipeshelf::{Recipe, ShelfDb};

/// Builds a recipe with the given id, name, and ingredients, a single
/// placeholder instruction, and no image.
pub fn make_recipe(id: i64, name: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: vec!["Combine everything.".to_string()],
        image: None,
    }
}

/// Creates a ShelfDb backed by a temp directory.
/// Returns both the store and the temp dir (which must be kept alive).
pub async fn create_test_store() -> (ShelfDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("test-shelf.db");
    let store = ShelfDb::open(&path).await.expect("Failed to open test store");
    (store, dir)
}
