pub mod add_recipe;
pub mod browse_all;
pub mod loading_page;
pub mod my_recipes;
pub mod recipe_detail;

use std::convert::Infallible;

use iced::{Element, Task};

use crate::gui::{
    AppState, Message,
    state::StartPage,
    widgets::Page,
};

use add_recipe::AddRecipeScreen;
use browse_all::BrowseAllScreen;
use loading_page::LoadingScreen;
use my_recipes::MyRecipesScreen;
use recipe_detail::RecipeDetailScreen;

pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

impl<S: Screen> Clone for ScreenMessage<S> {
    fn clone(&self) -> Self {
        match self {
            Self::ScreenMessage(message) => Self::ScreenMessage(message.clone()),
            Self::ParentMessage(message) => Self::ParentMessage(message.clone()),
        }
    }
}

impl<S: Screen> std::fmt::Debug for ScreenMessage<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScreenMessage(message) => f.debug_tuple("ScreenMessage").field(message).finish(),
            Self::ParentMessage(message) => f.debug_tuple("ParentMessage").field(message).finish(),
        }
    }
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug)]
pub enum ScreenData {
    Loading(LoadingScreen),
    BrowseAll(BrowseAllScreen),
    MyRecipes(MyRecipesScreen),
    RecipeDetail(RecipeDetailScreen),
    AddRecipe(AddRecipeScreen),
}

impl ScreenData {
    /// Builds the screen for a navigation target from the current state.
    pub fn for_page(target: Page, state: &AppState) -> Self {
        match target {
            Page::BrowseAll => ScreenData::BrowseAll(BrowseAllScreen::new(state.catalog.clone())),
            Page::MyRecipes => {
                ScreenData::MyRecipes(MyRecipesScreen::new(state.my_recipes.clone()))
            }
            Page::AddRecipe => ScreenData::AddRecipe(AddRecipeScreen::new()),
            Page::Detail(id) => {
                ScreenData::RecipeDetail(RecipeDetailScreen::new(state.find_recipe(id).cloned()))
            }
        }
    }

    fn for_start(state: &AppState) -> Self {
        match state.start_page {
            StartPage::BrowseAll => Self::for_page(Page::BrowseAll, state),
            StartPage::MyRecipes => Self::for_page(Page::MyRecipes, state),
            StartPage::AddRecipe => Self::for_page(Page::AddRecipe, state),
            StartPage::Detail(Some(id)) => Self::for_page(Page::Detail(id), state),
            StartPage::Detail(None) => ScreenData::RecipeDetail(RecipeDetailScreen::new(None)),
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Loading(screen) => screen.view().map(Message::Loading),
            ScreenData::BrowseAll(screen) => screen.view().map(Message::BrowseAll),
            ScreenData::MyRecipes(screen) => screen.view().map(Message::MyRecipes),
            ScreenData::RecipeDetail(screen) => screen.view().map(Message::RecipeDetail),
            ScreenData::AddRecipe(screen) => screen.view().map(Message::AddRecipe),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (screen, Message::Booted(boot)) => {
                state.apply_boot(boot);
                *screen = ScreenData::for_start(state);
                Task::none()
            }
            (ScreenData::BrowseAll(page), Message::BrowseAll(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state)
                    .map(Message::BrowseAll)
                    .map(ScreenMessage::ScreenMessage)
            }
            (screen, Message::BrowseAll(ScreenMessage::ParentMessage(target))) => {
                *screen = ScreenData::for_page(target, state);
                Task::none()
            }
            (ScreenData::MyRecipes(page), Message::MyRecipes(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state)
                    .map(Message::MyRecipes)
                    .map(ScreenMessage::ScreenMessage)
            }
            (screen, Message::MyRecipes(ScreenMessage::ParentMessage(target))) => {
                *screen = ScreenData::for_page(target, state);
                Task::none()
            }
            (
                ScreenData::RecipeDetail(page),
                Message::RecipeDetail(ScreenMessage::ScreenMessage(msg)),
            ) => page
                .update(msg, state)
                .map(Message::RecipeDetail)
                .map(ScreenMessage::ScreenMessage),
            (screen, Message::RecipeDetail(ScreenMessage::ParentMessage(target))) => {
                *screen = ScreenData::for_page(target, state);
                Task::none()
            }
            (ScreenData::AddRecipe(page), Message::AddRecipe(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state)
                    .map(Message::AddRecipe)
                    .map(ScreenMessage::ScreenMessage)
            }
            (screen, Message::AddRecipe(ScreenMessage::ParentMessage(target))) => {
                *screen = ScreenData::for_page(target, state);
                Task::none()
            }
            _ => Task::none(),
        }
    }
}
