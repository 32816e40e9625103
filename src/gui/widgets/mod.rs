use iced::{
    Element, Length,
    widget::{button, column, container, row, text},
};

use crate::models::Recipe;

const GRID_COLUMNS: usize = 3;

/// Navigation targets reachable from the chrome, plus the detail view
/// reached from recipe cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    BrowseAll,
    MyRecipes,
    AddRecipe,
    Detail(i64),
}

/// Which collection a grid is rendering; decides the second card action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Save,
    Delete,
}

/// Shared page chrome: title, navigation with the active page highlighted,
/// and the page content below.
pub fn layout<'a, M: Clone + 'a>(
    active: Option<Page>,
    on_navigate: impl Fn(Page) -> M + 'a,
    content: impl Into<Element<'a, M>>,
) -> Element<'a, M> {
    let nav_item = |label: &'a str, target: Page| {
        let style: fn(&iced::Theme, button::Status) -> button::Style = if active == Some(target) {
            button::primary
        } else {
            button::text
        };
        button(text(label)).style(style).on_press(on_navigate(target))
    };

    container(
        column![
            row![
                text("Recipe Shelf").size(24),
                nav_item("All Recipes", Page::BrowseAll),
                nav_item("My Recipes", Page::MyRecipes),
                nav_item("Add Recipe", Page::AddRecipe),
            ]
            .spacing(20)
            .align_y(iced::Alignment::Center),
            container(content.into()).height(Length::Fill),
        ]
        .spacing(15),
    )
    .padding(20)
    .into()
}

/// Projects a recipe collection into rows of cards, in input order.
pub fn recipe_grid<'a, M: Clone + 'a>(
    recipes: Vec<&'a Recipe>,
    action: CardAction,
    on_view: fn(i64) -> M,
    on_action: fn(i64) -> M,
) -> Element<'a, M> {
    let mut grid = column![].spacing(15);
    for band in recipes.chunks(GRID_COLUMNS) {
        let mut cards = row![].spacing(15);
        for recipe in band {
            cards = cards.push(recipe_card(recipe, action, on_view, on_action));
        }
        grid = grid.push(cards);
    }
    grid.into()
}

fn recipe_card<'a, M: Clone + 'a>(
    recipe: &'a Recipe,
    action: CardAction,
    on_view: fn(i64) -> M,
    on_action: fn(i64) -> M,
) -> Element<'a, M> {
    let action_button = match action {
        CardAction::Save => button("Save to My Recipes")
            .style(button::success)
            .on_press(on_action(recipe.id)),
        CardAction::Delete => button("Delete")
            .style(button::danger)
            .on_press(on_action(recipe.id)),
    };
    container(
        column![
            text(recipe.image_or_placeholder()).size(12),
            text(recipe.name.as_str()).size(20),
            text(recipe.ingredient_summary()).size(14),
            row![
                button("View Recipe").on_press(on_view(recipe.id)),
                action_button,
            ]
            .spacing(10),
        ]
        .spacing(8),
    )
    .style(container::bordered_box)
    .padding(12)
    .width(Length::FillPortion(1))
    .into()
}

/// Success notice shown after a save or add.
pub fn notice<'a, M: 'a>(message: &'a str) -> Element<'a, M> {
    container(text(message).style(text::success))
        .style(container::bordered_box)
        .padding(10)
        .width(Length::Fill)
        .into()
}

/// Error notice, currently only the detail page's missing-recipe alert.
pub fn not_found<'a, M: 'a>(message: &'a str) -> Element<'a, M> {
    container(text(message).style(text::danger))
        .style(container::bordered_box)
        .padding(10)
        .width(Length::Fill)
        .into()
}
