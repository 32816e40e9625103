use iced::{
    Element, Task,
    widget::{column, scrollable, text},
};

use crate::{
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{self, Page},
    },
    models::Recipe,
};

/// Full single-recipe view, or the not-found notice when the looked-up id
/// matched nothing.
#[derive(Debug, Clone)]
pub struct RecipeDetailScreen {
    recipe: Option<Recipe>,
}

#[derive(Debug, Clone)]
pub enum RecipeDetailMessage {}

impl RecipeDetailScreen {
    pub fn new(recipe: Option<Recipe>) -> Self {
        Self { recipe }
    }
}

impl Screen for RecipeDetailScreen {
    type Message = RecipeDetailMessage;
    type ParentMessage = Page;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let content: Element<'_, ScreenMessage<Self>> = match &self.recipe {
            Some(recipe) => {
                let mut ingredients = column![].spacing(4);
                for ingredient in &recipe.ingredients {
                    ingredients = ingredients.push(text(format!("\u{2022} {ingredient}")));
                }
                let mut instructions = column![].spacing(4);
                for (i, step) in recipe.instructions.iter().enumerate() {
                    instructions = instructions.push(text(format!("{}. {step}", i + 1)));
                }
                scrollable(
                    column![
                        text(recipe.image_or_placeholder()).size(12),
                        text(recipe.name.as_str()).size(32),
                        text("Ingredients:").size(22),
                        ingredients,
                        text("Instructions:").size(22),
                        instructions,
                    ]
                    .spacing(15),
                )
                .into()
            }
            None => widgets::not_found("Recipe not found"),
        };

        widgets::layout(None, ScreenMessage::ParentMessage, content)
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
