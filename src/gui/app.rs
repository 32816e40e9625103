use std::path::PathBuf;

use iced::{Element, Task, Theme};
use tracing::error;

use crate::core::{
    catalog::RecipeCatalog,
    store::{ShelfDb, ShelfRepository},
};

use super::{
    Message,
    message::BootData,
    screens::{Screen, ScreenData, ScreenMessage, loading_page::LoadingScreen},
    state::{AppState, StartPage},
};

/// Startup configuration resolved from the command line.
#[derive(Debug, Clone)]
pub struct Flags {
    pub catalog_path: PathBuf,
    pub store_path: PathBuf,
    pub start_page: StartPage,
}

pub struct RecipeShelfApp {
    state: AppState,
    screen: ScreenData,
}

pub fn run(flags: Flags) -> iced::Result {
    iced::application(
        move || RecipeShelfApp::new(flags.clone()),
        RecipeShelfApp::update,
        RecipeShelfApp::view,
    )
    .title("Recipe Shelf")
    .theme(RecipeShelfApp::theme)
    .run()
}

impl RecipeShelfApp {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::new(flags.start_page),
            screen: ScreenData::Loading(LoadingScreen),
        };
        let boot = Task::perform(
            bootstrap(flags.catalog_path, flags.store_path),
            Message::Booted,
        );
        (app, boot)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_parent)
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(unwrap_parent)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn unwrap_parent(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

/// Loads everything the pages need: the catalog (degrading to empty on
/// failure) and the personal collection. A store that fails to open or
/// holds malformed data disables persistence for the session.
async fn bootstrap(catalog_path: PathBuf, store_path: PathBuf) -> BootData {
    let catalog = RecipeCatalog::new(catalog_path).fetch_all().await;

    let (store, my_recipes) = match ShelfDb::open(&store_path).await {
        Ok(store) => match store.load().await {
            Ok(recipes) => (Some(store), recipes),
            Err(e) => {
                error!("Failed to load saved recipes: {e:#}");
                (None, Vec::new())
            }
        },
        Err(e) => {
            error!("Failed to open recipe store {store_path:?}: {e:#}");
            (None, Vec::new())
        }
    };

    BootData {
        catalog,
        store,
        my_recipes,
    }
}
