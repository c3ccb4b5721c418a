pub mod queries;
pub mod schema;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

use crate::database::queries::Queries;
use crate::signinglog::backend::{BackendError, BackendResult, SigningLogBackend};
use crate::signinglog::entry::{NewSigningLogEntry, SigningLogEntry};

/// SQLite-backed signing log
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        info!("Connected to signing log database");
        Ok(Database { pool })
    }

    /// Private in-memory database with the schema applied
    pub async fn new_in_memory() -> Result<Self, sqlx::Error> {
        // Every connection to sqlite::memory: gets its own database, so keep exactly one
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let db = Database { pool };
        db.run_migrations().await?;
        Ok(db)
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(schema::SIGNINGLOG_SCHEMA)
            .execute(&self.pool)
            .await?;
        debug!("Signing log schema applied");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn count(&self) -> Result<u64, sqlx::Error> {
        Queries::count_signing_logs(&self.pool).await
    }
}

#[async_trait]
impl SigningLogBackend for Database {
    async fn list_from(&self, cursor: Option<u64>, limit: usize) -> BackendResult<Vec<SigningLogEntry>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut entries = match cursor {
            // SQLite rowids stop at i64::MAX, so a larger cursor is the same as no bound
            Some(cursor) => match i64::try_from(cursor) {
                Ok(cursor) => Queries::list_signing_logs_before(&self.pool, cursor, limit).await?,
                Err(_) => Queries::list_signing_logs(&self.pool, limit).await?,
            },
            None => Queries::list_signing_logs(&self.pool, limit).await?,
        };
        // Queries return newest first
        entries.reverse();
        Ok(entries)
    }

    async fn delete_by_id(&self, id: u64) -> BackendResult<()> {
        let Ok(row_id) = i64::try_from(id) else {
            return Err(BackendError::NotFound(id));
        };

        let deleted = Queries::delete_signing_log(&self.pool, row_id).await?;
        if deleted == 0 {
            return Err(BackendError::NotFound(id));
        }
        Ok(())
    }

    async fn append(&self, entry: NewSigningLogEntry) -> BackendResult<SigningLogEntry> {
        let row_id = Queries::insert_signing_log(&self.pool, &entry).await?;
        let id = u64::try_from(row_id)
            .map_err(|_| BackendError::Storage(format!("Invalid row id assigned: {}", row_id)))?;
        Ok(entry.with_id(id))
    }
}
