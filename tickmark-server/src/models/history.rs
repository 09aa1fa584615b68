use tickmark_api::models::CheckinResponse;

use super::Table;

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct HistoryEntry {
    pub id: i64,
    /// Stored under the `Time` column for compatibility.
    #[sqlx(rename = "Time")]
    pub local_date: String,
    /// Stored under the `Date` column for compatibility.
    #[sqlx(rename = "Date")]
    pub local_time: String,
    pub timestamp: String,
}

impl From<HistoryEntry> for CheckinResponse {
    fn from(entry: HistoryEntry) -> Self {
        CheckinResponse::new(entry.local_date, entry.local_time)
    }
}

#[derive(Clone)]
pub struct HistoryTable;

impl Table for HistoryTable {
    fn name(&self) -> &'static str {
        "history"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                Time TEXT NOT NULL,
                Date TEXT NOT NULL,
                timestamp TEXT NOT NULL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS history;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
