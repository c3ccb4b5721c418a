use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::signinglog::entry::{NewSigningLogEntry, SigningLogEntry};

pub struct Queries;

impl Queries {
    pub async fn list_signing_logs(
        pool: &SqlitePool,
        limit: i64,
    ) -> Result<Vec<SigningLogEntry>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, make, model, serial_number, fingerprint, created
            FROM signinglog
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        rows.iter().map(Self::signing_log_from_row).collect()
    }

    pub async fn list_signing_logs_before(
        pool: &SqlitePool,
        before_id: i64,
        limit: i64,
    ) -> Result<Vec<SigningLogEntry>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, make, model, serial_number, fingerprint, created
            FROM signinglog
            WHERE id < ?
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(before_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        rows.iter().map(Self::signing_log_from_row).collect()
    }

    /// Returns the number of rows removed
    pub async fn delete_signing_log(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM signinglog WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Returns the assigned row ID
    pub async fn insert_signing_log(
        pool: &SqlitePool,
        entry: &NewSigningLogEntry,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO signinglog (make, model, serial_number, fingerprint, created)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entry.make)
        .bind(&entry.model)
        .bind(&entry.serial_number)
        .bind(&entry.fingerprint)
        .bind(entry.created)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn count_signing_logs(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM signinglog")
            .fetch_one(pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    fn signing_log_from_row(row: &SqliteRow) -> Result<SigningLogEntry, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let created: DateTime<Utc> = row.try_get("created")?;

        Ok(SigningLogEntry {
            id: u64::try_from(id).map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            make: row.try_get("make")?,
            model: row.try_get("model")?,
            serial_number: row.try_get("serial_number")?,
            fingerprint: row.try_get("fingerprint")?,
            created,
        })
    }
}
