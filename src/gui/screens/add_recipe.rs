use iced::{
    Element, Task,
    widget::{button, column, row, scrollable, text, text_editor, text_input},
};
use rfd::AsyncFileDialog;
use tracing::error;

use crate::{
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{self, Page},
    },
    models::{self, NewRecipe},
};

/// Authoring form. Submitting appends to the personal collection and
/// persists it; no grid is shown here.
#[derive(Debug)]
pub struct AddRecipeScreen {
    name: String,
    ingredients: text_editor::Content,
    instructions: text_editor::Content,
    image: String,
    notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AddRecipeMessage {
    NameChanged(String),
    IngredientsEdited(text_editor::Action),
    InstructionsEdited(text_editor::Action),
    ImageChanged(String),
    PickImage,
    Submit,
    Persisted(Result<(), String>),
    None,
}

impl AddRecipeScreen {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            ingredients: text_editor::Content::new(),
            instructions: text_editor::Content::new(),
            image: String::new(),
            notice: None,
        }
    }

    fn reset(&mut self) {
        self.name.clear();
        self.ingredients = text_editor::Content::new();
        self.instructions = text_editor::Content::new();
        self.image.clear();
    }
}

impl Screen for AddRecipeScreen {
    type Message = AddRecipeMessage;
    type ParentMessage = Page;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = column![text("Add a Recipe").size(28)].spacing(12);

        if let Some(notice) = &self.notice {
            content = content.push(widgets::notice(notice));
        }

        content = content
            .push(text("Recipe Name"))
            .push(
                text_input("e.g. Tomato Soup", &self.name).on_input(|name| {
                    ScreenMessage::ScreenMessage(AddRecipeMessage::NameChanged(name))
                }),
            )
            .push(text("Ingredients (one per line)"))
            .push(
                text_editor(&self.ingredients)
                    .placeholder("One ingredient per line")
                    .height(140)
                    .on_action(|action| {
                        ScreenMessage::ScreenMessage(AddRecipeMessage::IngredientsEdited(action))
                    }),
            )
            .push(text("Instructions (one step per line)"))
            .push(
                text_editor(&self.instructions)
                    .placeholder("One step per line")
                    .height(140)
                    .on_action(|action| {
                        ScreenMessage::ScreenMessage(AddRecipeMessage::InstructionsEdited(action))
                    }),
            )
            .push(text("Image URL (optional)"))
            .push(
                row![
                    text_input("https://...", &self.image).on_input(|image| {
                        ScreenMessage::ScreenMessage(AddRecipeMessage::ImageChanged(image))
                    }),
                    button("Browse...")
                        .on_press(ScreenMessage::ScreenMessage(AddRecipeMessage::PickImage)),
                ]
                .spacing(10),
            )
            .push(
                button("Add Recipe")
                    .style(button::success)
                    .on_press(ScreenMessage::ScreenMessage(AddRecipeMessage::Submit)),
            );

        widgets::layout(
            Some(Page::AddRecipe),
            ScreenMessage::ParentMessage,
            scrollable(content),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            AddRecipeMessage::NameChanged(name) => {
                self.name = name;
                Task::none()
            }
            AddRecipeMessage::IngredientsEdited(action) => {
                self.ingredients.perform(action);
                Task::none()
            }
            AddRecipeMessage::InstructionsEdited(action) => {
                self.instructions.perform(action);
                Task::none()
            }
            AddRecipeMessage::ImageChanged(image) => {
                self.image = image;
                Task::none()
            }
            AddRecipeMessage::PickImage => Task::perform(
                AsyncFileDialog::new()
                    .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
                    .pick_file(),
                |handle| match handle {
                    Some(file) => ScreenMessage::ScreenMessage(AddRecipeMessage::ImageChanged(
                        file.path().to_string_lossy().into_owned(),
                    )),
                    None => ScreenMessage::ScreenMessage(AddRecipeMessage::None),
                },
            ),
            AddRecipeMessage::Submit => {
                let form = NewRecipe {
                    name: self.name.clone(),
                    ingredients: editor_text(&self.ingredients),
                    instructions: editor_text(&self.instructions),
                    image: self.image.clone(),
                };
                let recipe = form.into_recipe(models::timestamp_id());
                state.my_recipes.push(recipe);
                let persist = state
                    .persist_my_recipes()
                    .map(|result| ScreenMessage::ScreenMessage(AddRecipeMessage::Persisted(result)));
                self.reset();
                persist
            }
            AddRecipeMessage::Persisted(Ok(())) => {
                self.notice = Some("Recipe added successfully!".to_string());
                Task::none()
            }
            AddRecipeMessage::Persisted(Err(e)) => {
                error!("Failed to persist new recipe: {e}");
                Task::none()
            }
            AddRecipeMessage::None => Task::none(),
        }
    }
}

// Content::text always carries a trailing newline; the form treats each
// visible line as one element, so that newline is not part of the input.
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}
