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

/// Grid over the full catalog; every card offers "Save to My Recipes".
#[derive(Debug, Clone)]
pub struct BrowseAllScreen {
    recipes: Vec<Recipe>,
    search: String,
    notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum BrowseAllMessage {
    SearchChanged(String),
    Save(i64),
    Saved(Result<(), String>),
}

impl BrowseAllScreen {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            search: String::new(),
            notice: None,
        }
    }
}

impl Screen for BrowseAllScreen {
    type Message = BrowseAllMessage;
    type ParentMessage = Page;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let shown = search::filter(&self.recipes, &self.search);

        let mut content = column![
            text("All Recipes").size(28),
            text_input("Search by name or ingredient...", &self.search).on_input(|term| {
                ScreenMessage::ScreenMessage(BrowseAllMessage::SearchChanged(term))
            }),
        ]
        .spacing(15);

        if let Some(notice) = &self.notice {
            content = content.push(widgets::notice(notice));
        }

        content = content.push(scrollable(widgets::recipe_grid(
            shown,
            CardAction::Save,
            |id| ScreenMessage::ParentMessage(Page::Detail(id)),
            |id| ScreenMessage::ScreenMessage(BrowseAllMessage::Save(id)),
        )));

        widgets::layout(Some(Page::BrowseAll), ScreenMessage::ParentMessage, content)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            BrowseAllMessage::SearchChanged(term) => {
                self.search = term;
                Task::none()
            }
            BrowseAllMessage::Save(id) => {
                let Some(recipe) = self.recipes.iter().find(|r| r.id == id).cloned() else {
                    return Task::none();
                };
                if !collection::save_recipe(&mut state.my_recipes, recipe) {
                    // Already on the shelf; duplicate saves are silent no-ops.
                    return Task::none();
                }
                state
                    .persist_my_recipes()
                    .map(|result| ScreenMessage::ScreenMessage(BrowseAllMessage::Saved(result)))
            }
            BrowseAllMessage::Saved(Ok(())) => {
                self.notice = Some("Recipe saved to My Recipes!".to_string());
                Task::none()
            }
            BrowseAllMessage::Saved(Err(e)) => {
                error!("Failed to persist saved recipe: {e}");
                Task::none()
            }
        }
    }
}
