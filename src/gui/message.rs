use crate::{core::store::ShelfDb, models::Recipe};

use super::screens::{
    ScreenMessage, add_recipe::AddRecipeScreen, browse_all::BrowseAllScreen,
    loading_page::LoadingScreen, my_recipes::MyRecipesScreen, recipe_detail::RecipeDetailScreen,
};

/// Everything loaded at startup before the first page is shown.
#[derive(Debug, Clone)]
pub struct BootData {
    pub catalog: Vec<Recipe>,
    pub store: Option<ShelfDb>,
    pub my_recipes: Vec<Recipe>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loading(ScreenMessage<LoadingScreen>),
    BrowseAll(ScreenMessage<BrowseAllScreen>),
    MyRecipes(ScreenMessage<MyRecipesScreen>),
    RecipeDetail(ScreenMessage<RecipeDetailScreen>),
    AddRecipe(ScreenMessage<AddRecipeScreen>),
    Booted(BootData),
}
