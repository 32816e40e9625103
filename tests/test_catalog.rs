//! Integration tests for the static recipe catalog.
//!
//! Tests cover:
//! - Parsing a catalog file, preserving input order
//! - Degrading to an empty collection when the file is missing
//! - Degrading to an empty collection when the file is malformed

mod common;

use common::*;

#[tokio::test]
async fn test_fetch_all_parses_catalog_in_order() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 1, "name": "Pasta", "ingredients": ["tomato", "basil"], "instructions": ["Boil."]},
            {"id": 2, "name": "Soup", "ingredients": ["water"], "instructions": ["Simmer."],
             "image": "https://example.com/soup.png"}
        ]"#,
    )?;

    let recipes = RecipeCatalog::new(&path).fetch_all().await;

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].id, 1);
    assert_eq!(recipes[0].name, "Pasta");
    assert_eq!(recipes[1].id, 2);

    // Missing image field parses as None and renders the placeholder.
    assert_eq!(recipes[0].image, None);
    assert_eq!(recipes[0].image_or_placeholder(), PLACEHOLDER_IMAGE);
    assert_eq!(
        recipes[1].image.as_deref(),
        Some("https://example.com/soup.png")
    );

    Ok(())
}

#[tokio::test]
async fn test_missing_catalog_degrades_to_empty() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("does-not-exist.json");

    let recipes = RecipeCatalog::new(&path).fetch_all().await;
    assert!(recipes.is_empty());
}

#[tokio::test]
async fn test_malformed_catalog_degrades_to_empty() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("data.json");
    std::fs::write(&path, "this is not json")?;

    let recipes = RecipeCatalog::new(&path).fetch_all().await;
    assert!(recipes.is_empty());

    Ok(())
}
