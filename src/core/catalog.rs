use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::error;

use crate::models::Recipe;

/// One-shot reader for the static recipe catalog.
///
/// The catalog is immutable for the session: it is fetched once at startup
/// and never written back.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    path: PathBuf,
}

impl RecipeCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads and parses the catalog. Any failure is logged and yields an
    /// empty collection; the caller renders an empty grid.
    pub async fn fetch_all(&self) -> Vec<Recipe> {
        match self.try_fetch().await {
            Ok(recipes) => recipes,
            Err(e) => {
                error!("Error fetching recipes: {e:#}");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self) -> anyhow::Result<Vec<Recipe>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read recipe catalog {:?}", self.path))?;
        let recipes = serde_json::from_str(&raw)
            .with_context(|| format!("Recipe catalog {:?} is not a valid recipe list", self.path))?;
        Ok(recipes)
    }
}
