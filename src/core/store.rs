use std::path::Path;

use anyhow::Context;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

use crate::models::Recipe;

const MY_RECIPES_KEY: &str = "my_recipes";

/// Persistence seam for the user's personal recipe collection.
///
/// The collection is one value under one key: `save_all` rewrites it
/// wholesale, there are no partial updates.
pub trait ShelfRepository {
    fn load(&self) -> impl Future<Output = anyhow::Result<Vec<Recipe>>>;
    fn save_all(&self, recipes: &[Recipe]) -> impl Future<Output = anyhow::Result<()>>;
}

/// SQLite-backed key-value store holding the serialized shelf.
#[derive(Debug, Clone)]
pub struct ShelfDb {
    pool: SqlitePool,
}

impl ShelfDb {
    pub async fn open<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        let connect_opts = SqliteConnectOptions::new()
            .filename(db_file.as_ref())
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_opts)
            .await
            .with_context(|| format!("Failed to open recipe store {:?}", db_file.as_ref()))?;

        sqlx::query("CREATE TABLE IF NOT EXISTS shelf (key TEXT PRIMARY KEY, value TEXT NOT NULL)")
            .execute(&pool)
            .await?;

        Ok(Self { pool })
    }
}

impl ShelfRepository for ShelfDb {
    async fn load(&self) -> anyhow::Result<Vec<Recipe>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM shelf WHERE key = $1")
            .bind(MY_RECIPES_KEY)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some((raw,)) => {
                let recipes =
                    serde_json::from_str(&raw).context("Stored recipe data is malformed")?;
                Ok(recipes)
            }
            None => Ok(Vec::new()),
        }
    }

    async fn save_all(&self, recipes: &[Recipe]) -> anyhow::Result<()> {
        let raw = serde_json::to_string(recipes)?;
        sqlx::query(
            r#"INSERT INTO shelf (key, value) VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value"#,
        )
        .bind(MY_RECIPES_KEY)
        .bind(raw)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
