//! SQLite-backed local store.

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use checklist_core::{
    config::StoreConfig, error::ChecklistError, shellexpand, traits::LocalStore,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

const IN_MEMORY: &str = ":memory:";

/// Key-value store backed by a single SQLite table.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the store described by `config`, running migrations on first use.
    pub async fn new(config: &StoreConfig) -> Result<Self, ChecklistError> {
        Self::open(&config.db_path).await
    }

    /// Open a store at `path`. `:memory:` gives a private in-memory database.
    pub async fn open(path: &str) -> Result<Self, ChecklistError> {
        let db_path = shellexpand(path);
        let in_memory = db_path == IN_MEMORY;

        if !in_memory {
            if let Some(parent) = std::path::Path::new(&db_path).parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ChecklistError::Store(format!("failed to create data dir: {e}"))
                })?;
            }
        }

        let mut opts = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| ChecklistError::Store(format!("invalid db path: {e}")))?
            .create_if_missing(true);
        if !in_memory {
            opts = opts.journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);
        }

        // Every in-memory connection is its own database: keep exactly one, forever.
        let mut pool_opts = SqlitePoolOptions::new().max_connections(4);
        if in_memory {
            pool_opts = pool_opts
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }
        let pool = pool_opts
            .connect_with(opts)
            .await
            .map_err(|e| ChecklistError::Store(format!("failed to connect to sqlite: {e}")))?;

        Self::run_migrations(&pool).await?;

        info!("Local store initialized at {db_path}");

        Ok(Self { pool })
    }

    /// Number of stored keys.
    pub async fn count(&self) -> Result<i64, ChecklistError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM local_store")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ChecklistError::Store(format!("count failed: {e}")))?;
        Ok(count)
    }

    /// Run SQL migrations, tracking which have already been applied.
    async fn run_migrations(pool: &SqlitePool) -> Result<(), ChecklistError> {
        sqlx::raw_sql(
            "CREATE TABLE IF NOT EXISTS _migrations (
                name TEXT PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .execute(pool)
        .await
        .map_err(|e| ChecklistError::Store(format!("failed to create migrations table: {e}")))?;

        let migrations: &[(&str, &str)] =
            &[("001_init", include_str!("../../migrations/001_init.sql"))];

        for (name, sql) in migrations {
            let applied: Option<(String,)> =
                sqlx::query_as("SELECT name FROM _migrations WHERE name = ?")
                    .bind(name)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| {
                        ChecklistError::Store(format!("failed to check migration {name}: {e}"))
                    })?;

            if applied.is_some() {
                continue;
            }

            sqlx::raw_sql(sql)
                .execute(pool)
                .await
                .map_err(|e| ChecklistError::Store(format!("migration {name} failed: {e}")))?;

            sqlx::query("INSERT INTO _migrations (name) VALUES (?)")
                .bind(name)
                .execute(pool)
                .await
                .map_err(|e| {
                    ChecklistError::Store(format!("failed to record migration {name}: {e}"))
                })?;
        }
        Ok(())
    }
}

#[async_trait]
impl LocalStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ChecklistError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM local_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ChecklistError::Store(format!("query failed: {e}")))?;

        Ok(row.map(|(v,)| v))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ChecklistError> {
        sqlx::query(
            "INSERT INTO local_store (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| ChecklistError::Store(format!("upsert failed: {e}")))?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), ChecklistError> {
        let result = sqlx::query("DELETE FROM local_store")
            .execute(&self.pool)
            .await
            .map_err(|e| ChecklistError::Store(format!("clear failed: {e}")))?;

        info!("Local store cleared ({} keys)", result.rows_affected());
        Ok(())
    }
}
