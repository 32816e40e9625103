mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from recipeshelf for tests
pub use recipeshelf::{NewRecipe, PLACEHOLDER_IMAGE, Recipe, RecipeCatalog, ShelfDb, ShelfRepository};
