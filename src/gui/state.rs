use iced::Task;
use tracing::error;

use crate::{
    core::{
        collection,
        store::{ShelfDb, ShelfRepository},
    },
    models::Recipe,
};

use super::message::BootData;

/// Page to open once startup data is loaded, resolved from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPage {
    BrowseAll,
    MyRecipes,
    AddRecipe,
    Detail(Option<i64>),
}

/// Session state owned by the application: the read-only catalog, the
/// user's personal collection, and the store it persists to.
///
/// A `None` store means opening or loading it failed at startup; mutations
/// then stay in memory for the session.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Vec<Recipe>,
    pub my_recipes: Vec<Recipe>,
    pub store: Option<ShelfDb>,
    pub start_page: StartPage,
}

impl AppState {
    pub fn new(start_page: StartPage) -> Self {
        Self {
            catalog: Vec::new(),
            my_recipes: Vec::new(),
            store: None,
            start_page,
        }
    }

    pub fn apply_boot(&mut self, boot: BootData) {
        self.catalog = boot.catalog;
        self.store = boot.store;
        self.my_recipes = boot.my_recipes;
    }

    /// Catalog-first lookup across both collections.
    pub fn find_recipe(&self, id: i64) -> Option<&Recipe> {
        collection::find_recipe(&self.catalog, &self.my_recipes, id)
    }

    /// Rewrites the whole persisted collection from the in-memory one.
    pub fn persist_my_recipes(&self) -> Task<Result<(), String>> {
        let Some(store) = self.store.clone() else {
            error!("Recipe store unavailable; changes are kept in memory only");
            return Task::none();
        };
        let recipes = self.my_recipes.clone();
        Task::perform(
            async move { store.save_all(&recipes).await.map_err(|e| format!("{e:#}")) },
            |result| result,
        )
    }
}
