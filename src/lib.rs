pub mod core;
pub mod models;

pub use crate::core::catalog::RecipeCatalog;
pub use crate::core::store::{ShelfDb, ShelfRepository};
pub use crate::models::{NewRecipe, PLACEHOLDER_IMAGE, Recipe};

#[cfg(feature = "gui")]
pub mod gui;
