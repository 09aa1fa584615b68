use std::sync::Arc;

use sqlx::Error;

use crate::configs::Storage;
use crate::models::HistoryEntry;
use crate::services::LocalStamp;

pub struct HistoryRepository {
    storage: Arc<Storage>,
}

impl HistoryRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl HistoryRepository {
    pub async fn create(&self, stamp: &LocalStamp) -> Result<i64, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO history (Time, Date, timestamp)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&stamp.local_date)
        .bind(&stamp.local_time)
        .bind(&stamp.timestamp)
        .execute(self.storage.get_pool())
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    /// Newest first by instant. `julianday` folds the offset in, so entries on
    /// either side of a DST change still compare correctly; it stops at
    /// milliseconds, where the raw string takes over.
    pub async fn find_all(&self) -> Result<Vec<HistoryEntry>, Error> {
        let entries: Vec<HistoryEntry> = sqlx::query_as(
            r#"
            SELECT id, Time, Date, timestamp FROM history
            ORDER BY julianday(timestamp) DESC, timestamp DESC, id DESC
            "#,
        )
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(entries)
    }

    pub async fn find_recent(&self, limit: i64) -> Result<Vec<HistoryEntry>, Error> {
        let entries: Vec<HistoryEntry> = sqlx::query_as(
            r#"
            SELECT id, Time, Date, timestamp FROM history
            ORDER BY julianday(timestamp) DESC, timestamp DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(entries)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM history")
            .fetch_one(self.storage.get_pool())
            .await
    }
}
