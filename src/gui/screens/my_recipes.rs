use iced::{
    Element, Task,
    widget::{column, scrollable, text, text_input},
};
use tracing::error;

use crate::{
    core::{collection, search},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{self, CardAction, Page},
    },
    models::Recipe,
};

/// Grid over the personal collection; every card offers "Delete".
#[derive(Debug, Clone)]
pub struct MyRecipesScreen {
    recipes: Vec<Recipe>,
    search: String,
}

#[derive(Debug, Clone)]
pub enum MyRecipesMessage {
    SearchChanged(String),
    Delete(i64),
    Deleted(Result<(), String>),
}

impl MyRecipesScreen {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            search: String::new(),
        }
    }
}

impl Screen for MyRecipesScreen {
    type Message = MyRecipesMessage;
    type ParentMessage = Page;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let shown = search::filter(&self.recipes, &self.search);

        let content = column![
            text("My Recipes").size(28),
            text_input("Search by name or ingredient...", &self.search).on_input(|term| {
                ScreenMessage::ScreenMessage(MyRecipesMessage::SearchChanged(term))
            }),
            scrollable(widgets::recipe_grid(
                shown,
                CardAction::Delete,
                |id| ScreenMessage::ParentMessage(Page::Detail(id)),
                |id| ScreenMessage::ScreenMessage(MyRecipesMessage::Delete(id)),
            )),
        ]
        .spacing(15);

        widgets::layout(Some(Page::MyRecipes), ScreenMessage::ParentMessage, content)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            MyRecipesMessage::SearchChanged(term) => {
                self.search = term;
                Task::none()
            }
            MyRecipesMessage::Delete(id) => {
                if !collection::delete_recipe(&mut state.my_recipes, id) {
                    return Task::none();
                }
                self.recipes = state.my_recipes.clone();
                state
                    .persist_my_recipes()
                    .map(|result| ScreenMessage::ScreenMessage(MyRecipesMessage::Deleted(result)))
            }
            MyRecipesMessage::Deleted(Ok(())) => Task::none(),
            MyRecipesMessage::Deleted(Err(e)) => {
                error!("Failed to persist deletion: {e}");
                Task::none()
            }
        }
    }
}
