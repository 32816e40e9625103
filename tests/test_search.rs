//! Tests for free-text filtering over recipe collections.

mod common;

use common::*;
use recipeshelf::core::search;

fn sample_recipes() -> Vec<Recipe> {
    vec![
        make_recipe(1, "Pasta", &["tomato", "basil", "pasta", "salt"]),
        make_recipe(2, "Pancakes", &["egg", "flour", "milk"]),
        make_recipe(3, "Salad", &["lettuce", "tomato"]),
    ]
}

#[test]
fn test_empty_term_returns_all_in_order() {
    let recipes = sample_recipes();

    let shown = search::filter(&recipes, "");

    let ids: Vec<i64> = shown.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_unmatched_term_returns_empty() {
    let recipes = sample_recipes();

    let shown = search::filter(&recipes, "chocolate");
    assert!(shown.is_empty());
}

#[test]
fn test_name_match_is_case_insensitive() {
    let recipes = sample_recipes();

    let shown = search::filter(&recipes, "PASTA");

    let ids: Vec<i64> = shown.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_ingredient_substring_matches() {
    let recipes = sample_recipes();

    // "toma" is a substring of "tomato" in Pasta and Salad.
    let shown = search::filter(&recipes, "toma");

    let ids: Vec<i64> = shown.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_filter_does_not_mutate_the_collection() {
    let recipes = sample_recipes();
    let before = recipes.clone();

    let _ = search::filter(&recipes, "egg");

    assert_eq!(recipes, before);
}
