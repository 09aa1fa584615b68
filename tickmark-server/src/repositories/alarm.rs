use std::sync::Arc;

use sqlx::{Error, Sqlite, Transaction};

use crate::configs::Storage;
use crate::models::Alarm;

pub struct AlarmRepository {
    storage: Arc<Storage>,
}

impl AlarmRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &sqlx::SqlitePool {
        self.storage.get_pool()
    }
}

impl AlarmRepository {
    /// Drops every stored alarm and inserts `item` in its place.
    pub async fn replace(
        &self,
        item: &Alarm,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i64, Error> {
        sqlx::query("DELETE FROM alarms")
            .execute(&mut **transaction)
            .await?;

        let id = sqlx::query(
            r#"
            INSERT INTO alarms (days, time, times, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&item.days)
        .bind(&item.time)
        .bind(&item.times)
        .bind(&item.created_at)
        .execute(&mut **transaction)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn find_latest(&self) -> Result<Option<Alarm>, Error> {
        let alarm: Option<Alarm> = sqlx::query_as(
            "SELECT id, days, time, times, created_at FROM alarms ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(self.storage.get_pool())
        .await?;

        Ok(alarm)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM alarms")
            .fetch_one(self.storage.get_pool())
            .await
    }
}
