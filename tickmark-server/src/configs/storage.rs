use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Error, SqlitePool};

use crate::configs::schema::SchemaManager;
use crate::configs::settings::Database;

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
    schema: Arc<SchemaManager>,
}

impl Storage {
    pub async fn new(database: Database, schema_manager: SchemaManager) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(&database.url)?.create_if_missing(true);

        // Every connection to `:memory:` opens its own empty database.
        let max_connections = if database.url.contains(":memory:") { 1 } else { 10 };

        let pool = SqlitePoolOptions::new()
            .min_connections(1) // in memory db might drop connection when 0
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let storage = Self {
            pool,
            schema: Arc::new(schema_manager),
        };

        if database.clean_start {
            storage.dispose_schema().await?;

            tracing::warn!("perform a clean boot: clean and recreate schema");
        }

        storage.init().await?;

        Ok(storage)
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates missing tables and appends missing columns. Safe to call repeatedly.
    pub async fn init(&self) -> Result<(), Error> {
        for statement in self.schema.create_schema() {
            sqlx::query(&statement).execute(&self.pool).await?;
        }

        for (table, column, kind) in self.schema.additive_columns() {
            if self.has_column(table, column).await? {
                continue;
            }

            sqlx::query(&format!("ALTER TABLE {table} ADD COLUMN {column} {kind}"))
                .execute(&self.pool)
                .await?;

            tracing::info!("added column {column} to table {table}");
        }

        Ok(())
    }

    pub async fn has_column(&self, table: &str, column: &str) -> Result<bool, Error> {
        let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info($1)")
            .bind(table)
            .fetch_all(&self.pool)
            .await?;

        Ok(columns.iter().any(|name| name == column))
    }

    async fn dispose_schema(&self) -> Result<(), Error> {
        for statement in self.schema.dispose_schema() {
            sqlx::query(&statement).execute(&self.pool).await?;
        }

        Ok(())
    }
}
